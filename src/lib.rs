//! Playing card value types with pluggable scoring, plus decks and hands,
//! with optional `no_std` support.
//!
//! A [`Card`] is parameterized by a [`Variant`](variant::Variant) that
//! decides which ranks exist, how they are ordered and what they score.
//! [`Deck`] assembles the rank-by-suit cross product, shuffles with an
//! injected RNG and deals from the top. [`Hand`] totals points and checks
//! meld-style multiset inclusion.
//!
//! # Example
//!
//! ```
//! use cardkit::{Deck, Hand};
//! use cardkit::variant::Pinochle;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut deck = Deck::<Pinochle>::pinochle();
//! deck.shuffle(&mut ChaCha8Rng::seed_from_u64(42));
//! let hand: Hand<Pinochle> = deck.deal_hand(12).unwrap();
//! assert_eq!(deck.len(), 36);
//! assert!(hand.total_points() <= 12 * 11);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod cleanup;
pub mod deck;
pub mod dice;
pub mod error;
pub mod hand;
pub mod tally;
pub mod variant;

// Re-export main types
pub use card::{ACE, Card, JACK, KING, QUEEN, Suit};
pub use cleanup::remove_where;
pub use deck::{Deck, DeckOptions, make_deck};
pub use dice::{Dice, DicePool, Roll};
pub use error::{CardError, DealError, DiceError};
pub use hand::{Hand, RankCounts};
pub use tally::EventCounter;
pub use variant::{Cribbage, Pinochle, Standard, Variant};
