//! Card types.

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::str::FromStr;

use crate::error::CardError;
use crate::variant::{Standard, Variant};

/// Rank value of an Ace.
pub const ACE: u8 = 1;
/// Rank value of a Jack.
pub const JACK: u8 = 11;
/// Rank value of a Queen.
pub const QUEEN: u8 = 12;
/// Rank value of a King.
pub const KING: u8 = 13;

/// Card suit, declared in ordering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades, `♠`.
    Spades,
    /// Hearts, `♡`.
    Hearts,
    /// Diamonds, `♢`.
    Diamonds,
    /// Clubs, `♣`.
    Clubs,
}

impl Suit {
    /// All suits in declared order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♡',
            Self::Diamonds => '♢',
            Self::Clubs => '♣',
        }
    }

    /// Looks up a suit by symbol.
    ///
    /// Accepts the outline symbols, the filled heart and diamond, and the
    /// ASCII initials in either case.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] for any other character.
    pub const fn from_symbol(symbol: char) -> Result<Self, CardError> {
        match symbol {
            '♠' | 'S' | 's' => Ok(Self::Spades),
            '♡' | '♥' | 'H' | 'h' => Ok(Self::Hearts),
            '♢' | '♦' | 'D' | 'd' => Ok(Self::Diamonds),
            '♣' | 'C' | 'c' => Ok(Self::Clubs),
            other => Err(CardError::InvalidSuit(other)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card of variant `V`.
///
/// Cards are immutable values. Equality and hashing use rank and suit;
/// ordering uses the variant's rank key, then the suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card<V: Variant = Standard> {
    rank: u8,
    suit: Suit,
    variant: PhantomData<V>,
}

impl<V: Variant> Card<V> {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if the variant does not use `rank`.
    ///
    /// # Example
    ///
    /// ```
    /// use cardkit::{Card, Suit};
    /// use cardkit::variant::Pinochle;
    ///
    /// let card = Card::<Pinochle>::new(9, Suit::Hearts).unwrap();
    /// assert_eq!(card.rank(), 9);
    /// assert!(Card::<Pinochle>::new(2, Suit::Hearts).is_err());
    /// ```
    pub fn new(rank: u8, suit: Suit) -> Result<Self, CardError> {
        if !V::is_valid_rank(rank) {
            return Err(CardError::InvalidRank {
                rank,
                variant: V::NAME,
            });
        }

        Ok(Self {
            rank,
            suit,
            variant: PhantomData,
        })
    }

    /// Returns the rank.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the points this card is worth in its variant.
    #[must_use]
    pub fn points(&self) -> u32 {
        V::points(self.rank)
    }

    /// Returns the key this card is ordered by.
    #[must_use]
    pub fn ordering_key(&self) -> (u8, Suit) {
        (V::ordering_key(self.rank), self.suit)
    }

    /// Returns whether `self` and `other` are the same card object rather
    /// than two equal cards.
    #[must_use]
    pub fn same_instance(&self, other: &Self) -> bool {
        core::ptr::eq(self, other)
    }
}

impl<V: Variant> Ord for Card<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordering_key().cmp(&other.ordering_key())
    }
}

impl<V: Variant> PartialOrd for Card<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

const fn rank_label(rank: u8) -> Option<&'static str> {
    match rank {
        ACE => Some("A"),
        JACK => Some("J"),
        QUEEN => Some("Q"),
        KING => Some("K"),
        _ => None,
    }
}

fn parse_rank(text: &str) -> Result<u8, CardError> {
    match text {
        "A" | "a" => Ok(ACE),
        "J" | "j" => Ok(JACK),
        "Q" | "q" => Ok(QUEEN),
        "K" | "k" => Ok(KING),
        digits => digits.parse().map_err(|_| CardError::Parse),
    }
}

impl<V: Variant> fmt::Display for Card<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match rank_label(self.rank) {
            Some(label) => write!(f, "{label}{}", self.suit),
            None => write!(f, "{}{}", self.rank, self.suit),
        }
    }
}

impl<V: Variant> FromStr for Card<V> {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (index, symbol) = s.char_indices().last().ok_or(CardError::Parse)?;
        if index == 0 {
            return Err(CardError::Parse);
        }
        let suit = Suit::from_symbol(symbol)?;
        let rank = parse_rank(&s[..index])?;
        Self::new(rank, suit)
    }
}
