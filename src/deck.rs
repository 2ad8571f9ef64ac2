//! Deck assembly, shuffling and dealing.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Suit};
use crate::error::{CardError, DealError};
use crate::hand::Hand;
use crate::variant::{Pinochle, Variant};

/// Builds the cross product of `ranks` and the four suits.
///
/// Cards come out rank-major: every suit of the first rank in
/// [`Suit::ALL`] order, then every suit of the second rank, and so on.
///
/// Each rank may appear once; use [`DeckOptions::copies`] for repeated
/// cards.
///
/// # Errors
///
/// Returns [`CardError::InvalidRank`] if any rank is not valid for `V`, or
/// [`CardError::DuplicateRank`] if a rank is listed twice.
///
/// # Example
///
/// ```
/// use cardkit::{make_deck, Card, Suit};
/// use cardkit::variant::Standard;
///
/// let deck = make_deck::<Standard>(&[1, 2]).unwrap();
/// assert_eq!(deck.len(), 8);
/// assert_eq!(deck[0], Card::new(1, Suit::Spades).unwrap());
/// ```
pub fn make_deck<V: Variant>(ranks: &[u8]) -> Result<Vec<Card<V>>, CardError> {
    let mut cards = Vec::with_capacity(ranks.len() * Suit::ALL.len());

    for (index, &rank) in ranks.iter().enumerate() {
        if ranks[..index].contains(&rank) {
            return Err(CardError::DuplicateRank(rank));
        }
        for suit in Suit::ALL {
            cards.push(Card::new(rank, suit)?);
        }
    }

    Ok(cards)
}

/// Configuration for building a [`Deck`].
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardkit::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_ranks(&[9, 10, 11, 12, 13, 1])
///     .with_copies(2)
///     .with_seed(7);
/// assert_eq!(options.copies, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOptions {
    /// Ranks to assemble. `None` uses the variant's full rank list.
    pub ranks: Option<Vec<u8>>,
    /// How many times the rank-by-suit cross product is repeated.
    pub copies: u8,
    /// Seed to shuffle with after assembly. `None` leaves the deck in
    /// assembly order.
    pub seed: Option<u64>,
}

impl DeckOptions {
    /// Options for a single, unshuffled deck of the variant's ranks.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ranks: None,
            copies: 1,
            seed: None,
        }
    }

    /// Restricts the deck to the given ranks.
    ///
    /// # Example
    ///
    /// ```
    /// use cardkit::DeckOptions;
    ///
    /// let options = DeckOptions::new().with_ranks(&[1, 13]);
    /// assert_eq!(options.ranks, Some(vec![1, 13]));
    /// ```
    #[must_use]
    pub fn with_ranks(mut self, ranks: &[u8]) -> Self {
        self.ranks = Some(ranks.to_vec());
        self
    }

    /// Sets the number of copies of each card.
    ///
    /// # Example
    ///
    /// ```
    /// use cardkit::DeckOptions;
    ///
    /// let options = DeckOptions::new().with_copies(2);
    /// assert_eq!(options.copies, 2);
    /// ```
    #[must_use]
    pub const fn with_copies(mut self, copies: u8) -> Self {
        self.copies = copies;
        self
    }

    /// Sets the shuffle seed.
    ///
    /// # Example
    ///
    /// ```
    /// use cardkit::DeckOptions;
    ///
    /// let options = DeckOptions::new().with_seed(42);
    /// assert_eq!(options.seed, Some(42));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// An ordered, mutable pile of undealt cards.
///
/// The top of the deck is the **last** element of [`Deck::cards`]; dealing
/// removes from there. Two decks are equal when their remaining cards are
/// equal, in order.
#[derive(Debug, Clone)]
pub struct Deck<V: Variant> {
    /// Cards still in the deck.
    cards: Vec<Card<V>>,
    /// Contents as assembled, used by [`Deck::reset`].
    assembled: Vec<Card<V>>,
}

impl<V: Variant> Deck<V> {
    /// Creates an unshuffled deck of every rank of the variant.
    ///
    /// # Example
    ///
    /// ```
    /// use cardkit::Deck;
    /// use cardkit::variant::Standard;
    ///
    /// let deck = Deck::<Standard>::new();
    /// assert_eq!(deck.len(), 52);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let cards = make_deck(V::RANKS);
        debug_assert!(
            cards.is_ok(),
            "{} lists a rank it does not accept: {cards:?}",
            V::NAME
        );
        Self::from_cards(cards.unwrap_or_default())
    }

    /// Creates an unshuffled deck of the given ranks.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::EmptyRanks`] if `ranks` is empty, or
    /// [`CardError::InvalidRank`] if a rank is not valid for the variant.
    pub fn from_ranks(ranks: &[u8]) -> Result<Self, CardError> {
        if ranks.is_empty() {
            return Err(CardError::EmptyRanks);
        }
        Ok(Self::from_cards(make_deck(ranks)?))
    }

    /// Creates a deck holding exactly `cards`, top card last.
    #[must_use]
    pub fn from_cards(cards: Vec<Card<V>>) -> Self {
        Self {
            assembled: cards.clone(),
            cards,
        }
    }

    /// Creates a deck from options, shuffling it if a seed is set.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::EmptyRanks`] if the options would produce no
    /// cards, or [`CardError::InvalidRank`] for a rank the variant rejects.
    ///
    /// # Example
    ///
    /// ```
    /// use cardkit::{Deck, DeckOptions};
    /// use cardkit::variant::Cribbage;
    ///
    /// let options = DeckOptions::new().with_copies(2).with_seed(3);
    /// let deck = Deck::<Cribbage>::with_options(&options).unwrap();
    /// assert_eq!(deck.len(), 104);
    /// ```
    pub fn with_options(options: &DeckOptions) -> Result<Self, CardError> {
        let ranks = options.ranks.as_deref().unwrap_or(V::RANKS);
        if ranks.is_empty() || options.copies == 0 {
            return Err(CardError::EmptyRanks);
        }

        let single = make_deck::<V>(ranks)?;
        let mut cards = Vec::with_capacity(single.len() * usize::from(options.copies));
        for _ in 0..options.copies {
            cards.extend_from_slice(&single);
        }

        tracing::debug!(
            variant = V::NAME,
            ranks = ranks.len(),
            copies = options.copies,
            cards = cards.len(),
            "assembled deck"
        );

        let mut deck = Self::from_cards(cards);
        if let Some(seed) = options.seed {
            deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        }
        Ok(deck)
    }

    /// Returns the cards still in the deck, top card last.
    #[must_use]
    pub fn cards(&self) -> &[Card<V>] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffles the remaining cards in place.
    ///
    /// The same RNG state and the same deck contents always produce the
    /// same order.
    pub fn shuffle<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        tracing::debug!(variant = V::NAME, cards = self.cards.len(), "shuffled deck");
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards remain.
    pub fn deal(&mut self) -> Result<Card<V>, DealError> {
        let card = self.cards.pop().ok_or(DealError::EmptyDeck)?;
        tracing::trace!(%card, remaining = self.cards.len(), "dealt card");
        Ok(card)
    }

    /// Deals `count` cards into a new hand, in deal order.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than `count` cards
    /// remain. The deck is left untouched in that case.
    pub fn deal_hand(&mut self, count: usize) -> Result<Hand<V>, DealError> {
        let remaining = self.cards.len();
        if count > remaining {
            return Err(DealError::NotEnoughCards {
                requested: count,
                remaining,
            });
        }

        let hand: Hand<V> = self.cards.drain(remaining - count..).rev().collect();
        tracing::debug!(
            variant = V::NAME,
            dealt = count,
            remaining = self.cards.len(),
            "dealt hand"
        );
        Ok(hand)
    }

    /// Restores every dealt card, in assembly order.
    pub fn reset(&mut self) {
        self.cards.clone_from(&self.assembled);
    }
}

impl<V: Variant> PartialEq for Deck<V> {
    fn eq(&self, other: &Self) -> bool {
        self.cards == other.cards
    }
}

impl<V: Variant> Eq for Deck<V> {}

impl<V: Variant> Default for Deck<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck<Pinochle> {
    /// Creates the 48-card pinochle deck: two copies of nine through Ace in
    /// every suit, unshuffled.
    ///
    /// # Example
    ///
    /// ```
    /// use cardkit::Deck;
    /// use cardkit::variant::Pinochle;
    ///
    /// let deck = Deck::<Pinochle>::pinochle();
    /// assert_eq!(deck.len(), 48);
    /// assert!(deck.cards()[..4].iter().all(|card| card.rank() == 9));
    /// ```
    #[must_use]
    pub fn pinochle() -> Self {
        let mut deck = Self::new();
        deck.cards.extend_from_within(..);
        deck.assembled.clone_from(&deck.cards);
        deck
    }
}
