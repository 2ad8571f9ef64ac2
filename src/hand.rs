//! Hands and rank multisets.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::card::Card;
use crate::variant::{Cribbage, Variant};

/// How many cards of each rank a hand holds, ignoring suits.
///
/// Ordered by multiset inclusion: `a <= b` when every rank count of `a` is
/// at most the matching count of `b`. Two multisets where each has a rank
/// the other lacks are incomparable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankCounts {
    counts: BTreeMap<u8, usize>,
}

impl RankCounts {
    /// Returns the number of cards of `rank`.
    #[must_use]
    pub fn get(&self, rank: u8) -> usize {
        self.counts.get(&rank).copied().unwrap_or(0)
    }

    /// Iterates over `(rank, count)` pairs with a nonzero count, lowest rank
    /// first.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.counts.iter().map(|(&rank, &count)| (rank, count))
    }

    fn add(&mut self, rank: u8) {
        *self.counts.entry(rank).or_insert(0) += 1;
    }

    fn is_within(&self, other: &Self) -> bool {
        self.iter().all(|(rank, count)| count <= other.get(rank))
    }
}

impl<V: Variant> FromIterator<Card<V>> for RankCounts {
    fn from_iter<I: IntoIterator<Item = Card<V>>>(iter: I) -> Self {
        let mut counts = Self::default();
        for card in iter {
            counts.add(card.rank());
        }
        counts
    }
}

impl PartialOrd for RankCounts {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.is_within(other), other.is_within(self)) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (false, false) => None,
        }
    }
}

/// Cards held by one player, in the order they were received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand<V: Variant> {
    cards: Vec<Card<V>>,
}

impl<V: Variant> Hand<V> {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards`.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card<V>>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card<V>) {
        self.cards.push(card);
    }

    /// Removes the first card equal to `card`.
    ///
    /// Returns whether a card was removed.
    pub fn remove_card(&mut self, card: &Card<V>) -> bool {
        if let Some(index) = self.cards.iter().position(|c| c == card) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card<V>] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sorts the hand by the variant's card ordering.
    pub fn sort(&mut self) {
        self.cards.sort_unstable();
    }

    /// Sums the points of every card under the variant's scoring.
    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.cards.iter().map(Card::points).sum()
    }

    /// Counts the cards of each rank.
    #[must_use]
    pub fn rank_counts(&self) -> RankCounts {
        self.cards.iter().copied().collect()
    }

    /// Returns whether every rank requirement of this hand can be met from
    /// `other`, ignoring suits.
    ///
    /// This is how a meld is checked against a hand:
    ///
    /// ```
    /// use cardkit::{Card, Hand};
    /// use cardkit::variant::Pinochle;
    ///
    /// let parse = |cards: &[&str]| -> Hand<Pinochle> {
    ///     cards.iter().map(|s| s.parse::<Card<Pinochle>>().unwrap()).collect()
    /// };
    /// let meld = parse(&["K♠", "K♡"]);
    /// let held = parse(&["K♢", "9♣", "K♣"]);
    /// assert!(meld.contains_subset(&held));
    /// assert!(!held.contains_subset(&meld));
    /// ```
    #[must_use]
    pub fn contains_subset(&self, other: &Self) -> bool {
        self.rank_counts() <= other.rank_counts()
    }
}

impl<V: Variant> Default for Hand<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variant> FromIterator<Card<V>> for Hand<V> {
    fn from_iter<I: IntoIterator<Item = Card<V>>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Hand<Cribbage> {
    /// Number of distinct card combinations whose points total 15.
    ///
    /// Saturates at `u64::MAX` for hands far larger than a real deal.
    #[must_use]
    pub fn fifteens(&self) -> u64 {
        // ways[s]: number of subsets seen so far summing to s
        let mut ways = [0_u64; 16];
        ways[0] = 1;
        for card in &self.cards {
            let points = card.points() as usize;
            for sum in (points..=15).rev() {
                ways[sum] = ways[sum].saturating_add(ways[sum - points]);
            }
        }
        ways[15]
    }

    /// Number of pairs of cards sharing a rank.
    #[must_use]
    pub fn pairs(&self) -> usize {
        self.rank_counts()
            .iter()
            .map(|(_, count)| count * (count - 1) / 2)
            .sum()
    }

    /// Scores two points per fifteen and two points per pair, saturating at
    /// `u32::MAX`.
    #[must_use]
    pub fn score_fifteens_and_pairs(&self) -> u32 {
        let pairs = u64::try_from(self.pairs()).unwrap_or(u64::MAX);
        let score = self.fifteens().saturating_add(pairs).saturating_mul(2);
        u32::try_from(score).unwrap_or(u32::MAX)
    }
}
