//! Deck integration tests.

use std::collections::HashSet;

use cardkit::{
    ACE, Card, CardError, DealError, Deck, DeckOptions, JACK, KING, Pinochle, QUEEN, Standard,
    Suit, make_deck,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn card<V: cardkit::Variant>(rank: u8, suit: Suit) -> Card<V> {
    Card::new(rank, suit).unwrap()
}

#[test]
fn pinochle_sub_deck_layout() {
    let ranks = [9, 10, JACK, QUEEN, KING, ACE];
    let single = make_deck::<Pinochle>(&ranks).unwrap();
    assert_eq!(single.len(), ranks.len() * 4);

    let deck = Deck::<Pinochle>::with_options(&DeckOptions::new().with_ranks(&ranks).with_copies(2))
        .unwrap();
    assert_eq!(deck.len(), 48);
    assert_eq!(
        deck.cards()[..4],
        [
            card::<Pinochle>(9, Suit::Spades),
            card(9, Suit::Hearts),
            card(9, Suit::Diamonds),
            card(9, Suit::Clubs),
        ]
    );
    assert_eq!(deck, Deck::<Pinochle>::pinochle());
}

#[test]
fn standard_deck_holds_every_card_once() {
    let deck = Deck::<Standard>::new();
    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(deck.len(), 52);
    assert_eq!(unique.len(), 52);
}

#[test]
fn seeded_shuffle_is_reproducible() {
    let mut a = Deck::<Standard>::new();
    let mut b = Deck::<Standard>::new();
    a.shuffle(&mut ChaCha8Rng::seed_from_u64(42));
    b.shuffle(&mut ChaCha8Rng::seed_from_u64(42));
    assert_eq!(a.cards(), b.cards());
    assert_ne!(a.cards(), Deck::<Standard>::new().cards());

    let mut c = Deck::<Standard>::new();
    c.shuffle(&mut ChaCha8Rng::seed_from_u64(43));
    assert_ne!(a.cards(), c.cards());
}

#[test]
fn options_seed_matches_manual_shuffle() {
    let seeded = Deck::<Standard>::with_options(&DeckOptions::new().with_seed(7)).unwrap();
    let mut manual = Deck::<Standard>::new();
    manual.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
    assert_eq!(seeded.cards(), manual.cards());
}

#[test]
fn dealing_five_from_shuffled_deck() {
    let mut deck = Deck::<Standard>::new();
    deck.shuffle(&mut ChaCha8Rng::seed_from_u64(2024));

    let mut dealt = Vec::new();
    for expected_len in (47..52).rev() {
        let before: Vec<Card> = deck.cards().to_vec();
        let card = deck.deal().unwrap();
        assert!(before.contains(&card));
        assert!(!deck.cards().contains(&card));
        assert_eq!(deck.len(), expected_len);
        dealt.push(card);
    }

    let unique: HashSet<Card> = dealt.iter().copied().collect();
    assert_eq!(unique.len(), 5);
}

#[test]
fn deal_until_empty() {
    let mut deck = Deck::<Standard>::from_ranks(&[KING]).unwrap();
    for _ in 0..4 {
        deck.deal().unwrap();
    }
    assert!(deck.is_empty());
    assert_eq!(deck.deal().unwrap_err(), DealError::EmptyDeck);
    assert_eq!(
        deck.deal_hand(1).unwrap_err(),
        DealError::NotEnoughCards {
            requested: 1,
            remaining: 0
        }
    );
    deck.reset();
    assert_eq!(deck.len(), 4);
}

#[test]
fn invalid_ranks_are_rejected() {
    assert_eq!(
        Deck::<Standard>::from_ranks(&[1, 14]).unwrap_err(),
        CardError::InvalidRank {
            rank: 14,
            variant: "standard"
        }
    );
    assert_eq!(
        Deck::<Pinochle>::with_options(&DeckOptions::new().with_ranks(&[])).unwrap_err(),
        CardError::EmptyRanks
    );
}
