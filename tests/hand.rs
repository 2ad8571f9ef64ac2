//! Hand integration tests.

use cardkit::{Card, Cribbage, Deck, Hand, Pinochle, Standard, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn parse<V: cardkit::Variant>(cards: &[&str]) -> Hand<V> {
    cards
        .iter()
        .map(|text| text.parse::<Card<V>>().unwrap())
        .collect()
}

#[test]
fn three_of_a_rank_is_not_within_two() {
    let three: Hand<Standard> = parse(&["9♠", "9♡", "9♢"]);
    let two: Hand<Standard> = parse(&["9♠", "9♣", "10♡", "J♢"]);
    assert!(three.contains_subset(&three));
    assert!(!three.contains_subset(&two));
    assert!(three.rank_counts().partial_cmp(&two.rank_counts()).is_none());
}

#[test]
fn pinochle_meld_in_dealt_hand() {
    let mut deck = Deck::<Pinochle>::pinochle();
    deck.shuffle(&mut ChaCha8Rng::seed_from_u64(11));
    let hand = deck.deal_hand(12).unwrap();

    let any_king: Hand<Pinochle> = parse(&["K♠"]);
    let has_king = hand.cards().iter().any(|card| card.rank() == 13);
    assert_eq!(any_king.contains_subset(&hand), has_king);

    let every_card: Hand<Pinochle> = Deck::<Pinochle>::pinochle().cards().iter().copied().collect();
    assert!(hand.contains_subset(&every_card));
}

#[test]
fn pinochle_points_total_over_whole_deck() {
    let deck: Hand<Pinochle> = Deck::<Pinochle>::pinochle().cards().iter().copied().collect();
    // eight of each rank, 30 points per set of six ranks
    assert_eq!(deck.total_points(), 8 * 30);
}

#[test]
fn cribbage_hand_scoring() {
    // Classic 29 hand without the nobs and runs: J-5-5-5-5
    let hand: Hand<Cribbage> = parse(&["J♣", "5♠", "5♡", "5♢", "5♣"]);
    // four fives to 15 in ways: 4 choose 3 = 4, jack with each five = 4
    assert_eq!(hand.fifteens(), 8);
    assert_eq!(hand.pairs(), 6);
    assert_eq!(hand.score_fifteens_and_pairs(), 28);
}

#[test]
fn sorted_standard_hand() {
    let mut hand: Hand<Standard> = parse(&["K♣", "A♠", "A♣", "7♡"]);
    hand.sort();
    assert_eq!(
        hand.cards(),
        [
            Card::<Standard>::new(1, Suit::Spades).unwrap(),
            Card::new(1, Suit::Clubs).unwrap(),
            Card::new(7, Suit::Hearts).unwrap(),
            Card::new(13, Suit::Clubs).unwrap(),
        ]
    );
}
