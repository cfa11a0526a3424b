//! Card, deck, hand evaluation and computer policy tests.

use std::collections::HashSet;

use fieldjack::{
    Card, ComputerPolicy, DECK_SIZE, Deck, GameOptions, Suit, full_deck, hand_value, is_blackjack,
    is_soft,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn spades(ranks: &[u8]) -> Vec<Card> {
    ranks.iter().map(|&rank| card(Suit::Spades, rank)).collect()
}

#[test]
fn card_values_and_display() {
    assert_eq!(card(Suit::Spades, Card::ACE).base_value(), 11);
    assert_eq!(card(Suit::Hearts, Card::KING).base_value(), 10);
    assert_eq!(card(Suit::Clubs, Card::JACK).base_value(), 10);
    assert_eq!(card(Suit::Diamonds, 7).base_value(), 7);

    assert_eq!(card(Suit::Spades, Card::ACE).to_string(), "♠A");
    assert_eq!(card(Suit::Hearts, 10).to_string(), "♥10");
    assert_eq!(card(Suit::Clubs, Card::KING).to_string(), "♣K");

    assert!(Suit::Hearts.is_red());
    assert!(Suit::Diamonds.is_red());
    assert!(!Suit::Spades.is_red());
}

#[test]
fn full_deck_has_every_card_once() {
    let cards = full_deck();
    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(cards.iter().collect::<HashSet<_>>().len(), DECK_SIZE);
}

#[test]
fn deck_reshuffles_on_fifty_third_draw() {
    let mut deck = Deck::new(3);
    let drawn: HashSet<Card> = (0..DECK_SIZE).map(|_| deck.draw()).collect();
    assert_eq!(drawn.len(), DECK_SIZE);
    assert_eq!(deck.remaining(), 0);
    assert_eq!(deck.reshuffles(), 0);

    let _ = deck.draw();
    assert_eq!(deck.reshuffles(), 1);
    assert_eq!(deck.remaining(), DECK_SIZE - 1);

    for _ in 0..200 {
        let _ = deck.draw();
    }
    assert_eq!(deck.reshuffles(), 4);
}

#[test]
fn same_seed_gives_same_order() {
    let mut first = Deck::new(99);
    let mut second = Deck::new(99);
    for _ in 0..60 {
        assert_eq!(first.draw(), second.draw());
    }
}

#[test]
fn stacked_deck_falls_back_to_full_deck() {
    let draws = spades(&[Card::ACE, 9]);
    let mut deck = Deck::stacked(&draws, 4);
    assert_eq!(deck.remaining(), 2);
    assert_eq!(deck.draw(), draws[0]);
    assert_eq!(deck.draw(), draws[1]);

    let _ = deck.draw();
    assert_eq!(deck.reshuffles(), 1);
    assert_eq!(deck.remaining(), DECK_SIZE - 1);
}

#[test]
fn hand_values_reduce_soft_aces() {
    assert_eq!(hand_value(&spades(&[Card::ACE, Card::ACE, 9])), 21);
    assert_eq!(hand_value(&spades(&[Card::ACE, Card::KING])), 21);
    assert_eq!(hand_value(&spades(&[10, 10, 5])), 25);
    assert_eq!(hand_value(&spades(&[Card::ACE, Card::ACE])), 12);
    assert_eq!(hand_value(&spades(&[Card::ACE, Card::ACE, Card::ACE, Card::ACE, 7])), 21);
    assert_eq!(hand_value(&[]), 0);

    assert!(is_soft(&spades(&[Card::ACE, 6])));
    assert!(!is_soft(&spades(&[Card::ACE, 6, 10])));
}

#[test]
fn blackjack_needs_exactly_two_cards() {
    assert!(is_blackjack(&spades(&[Card::ACE, Card::QUEEN])));
    assert!(!is_blackjack(&spades(&[Card::ACE, 5, 5])));
    assert!(!is_blackjack(&spades(&[10, 9])));
}

#[test]
fn policy_builds_highest_safe_total_against_low_player() {
    let policy = ComputerPolicy::default();

    let reserve = spades(&[5, Card::KING, Card::QUEEN, 9, Card::ACE]);
    assert_eq!(policy.choose(&reserve, &[], 10), 4);

    // Equal totals keep the earliest card.
    let reserve = spades(&[5, Card::KING, Card::QUEEN, 9, 2]);
    assert_eq!(policy.choose(&reserve, &[], 10), 1);
}

#[test]
fn policy_skips_cards_that_would_bust() {
    let policy = ComputerPolicy::default();
    let field = spades(&[10, 5]);
    let reserve = spades(&[Card::KING, 6, 2]);
    assert_eq!(policy.choose(&reserve, &field, 12), 1);
}

#[test]
fn policy_beats_high_player_when_it_can() {
    let policy = ComputerPolicy::default();
    let field = spades(&[10]);
    let reserve = spades(&[9, 8, Card::ACE, 5]);
    assert_eq!(policy.choose(&reserve, &field, 18), 2);
}

#[test]
fn policy_falls_back_to_highest_safe_total() {
    let policy = ComputerPolicy::default();
    let field = spades(&[10]);
    // 20 ties the player without beating it.
    let reserve = spades(&[5, 8, Card::KING, Card::QUEEN]);
    assert_eq!(policy.choose(&reserve, &field, 20), 2);
}

#[test]
fn policy_plays_first_card_when_every_candidate_busts() {
    let policy = ComputerPolicy::default();
    let field = spades(&[10, 6]);
    let reserve = spades(&[6, 7, 8, 9, 10]);
    assert_eq!(policy.choose(&reserve, &field, 15), 0);
    assert_eq!(policy.choose(&reserve, &field, 19), 0);
}

#[test]
fn policy_on_empty_reserve_returns_first_index() {
    assert_eq!(ComputerPolicy::default().choose(&[], &[], 0), 0);
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_reserve_size(4)
        .with_field_limit(6)
        .with_stand_value(18)
        .with_policy_threshold(15)
        .with_blackjack_bonus(3);

    assert_eq!(options.reserve_size, 4);
    assert_eq!(options.field_limit, 6);
    assert_eq!(options.stand_value, 18);
    assert_eq!(options.policy_threshold, 15);
    assert_eq!(options.blackjack_bonus, 3);
    assert_eq!(options.policy(), ComputerPolicy::new(15));
}
