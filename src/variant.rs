//! Card variants: the rank range, ordering and scoring rules a card carries.
//!
//! A [`Card`](crate::Card) is parameterized by one of these marker types, so
//! a cribbage card and a pinochle card are different types and the scoring
//! rules travel with the card instead of living in a type hierarchy.

use core::fmt::Debug;
use core::hash::Hash;

use crate::card::{ACE, JACK, KING, QUEEN};

/// Scoring and ordering capability shared by every card of a variant.
pub trait Variant: Copy + Eq + Hash + Debug + Default + 'static {
    /// Human readable name, used in error messages.
    const NAME: &'static str;

    /// Ranks of a full deck, in deck-assembly order.
    const RANKS: &'static [u8];

    /// Returns whether `rank` may appear on a card of this variant.
    #[must_use]
    fn is_valid_rank(rank: u8) -> bool {
        Self::RANKS.contains(&rank)
    }

    /// Key used to order ranks.
    ///
    /// Defaults to the rank itself. Variants where a rank beats its numeric
    /// successor (an Ace above a King) remap it here.
    #[must_use]
    fn ordering_key(rank: u8) -> u8 {
        rank
    }

    /// Points a single card of `rank` is worth.
    #[must_use]
    fn points(rank: u8) -> u32;
}

/// Plain playing cards: Ace low, no scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Standard;

impl Variant for Standard {
    const NAME: &'static str = "standard";
    const RANKS: &'static [u8] = &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13];

    fn is_valid_rank(rank: u8) -> bool {
        (ACE..=KING).contains(&rank)
    }

    fn points(_rank: u8) -> u32 {
        0
    }
}

/// Cribbage cards: Ace counts one, face cards count ten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cribbage;

impl Variant for Cribbage {
    const NAME: &'static str = "cribbage";
    const RANKS: &'static [u8] = Standard::RANKS;

    fn is_valid_rank(rank: u8) -> bool {
        Standard::is_valid_rank(rank)
    }

    fn points(rank: u8) -> u32 {
        u32::from(rank.min(10))
    }
}

/// Pinochle cards: nine through Ace, Ace high.
///
/// The Ace keeps the rank value `1` and is remapped to `14` for ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pinochle;

impl Variant for Pinochle {
    const NAME: &'static str = "pinochle";
    const RANKS: &'static [u8] = &[9, 10, JACK, QUEEN, KING, ACE];

    fn ordering_key(rank: u8) -> u8 {
        if rank == ACE { 14 } else { rank }
    }

    fn points(rank: u8) -> u32 {
        match rank {
            10 => 10,
            JACK => 2,
            QUEEN => 3,
            KING => 4,
            ACE => 11,
            _ => 0,
        }
    }
}
