//! Error types for card, deck and dice operations.

use thiserror::Error;

/// Errors that can occur while constructing cards or assembling decks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The rank is outside the range of the card variant.
    #[error("rank {rank} is not valid for {variant} cards")]
    InvalidRank {
        /// The rejected rank.
        rank: u8,
        /// Name of the variant that rejected it.
        variant: &'static str,
    },
    /// The symbol does not name one of the four suits.
    #[error("unknown suit symbol {0:?}")]
    InvalidSuit(char),
    /// The text is not of the form `<rank><suit>`.
    #[error("malformed card text")]
    Parse,
    /// The same rank was listed more than once.
    #[error("rank {0} is listed more than once")]
    DuplicateRank(u8),
    /// No ranks or no copies were requested for a deck.
    #[error("deck would contain no cards")]
    EmptyRanks,
}

/// Errors that can occur while dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck has no cards left.
    #[error("no cards left in the deck")]
    EmptyDeck,
    /// Fewer cards remain than were requested.
    #[error("requested {requested} cards but only {remaining} remain")]
    NotEnoughCards {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur while building dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiceError {
    /// Zero dice were requested.
    #[error("at least one die is required")]
    NoDice,
    /// A die must have at least two sides.
    #[error("a die needs at least 2 sides, got {0}")]
    TooFewSides(u8),
}
