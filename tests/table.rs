//! Deck and table integration tests.

use std::collections::HashSet;

use cardtable::{
    Card, Composition, DECK_SIZE, DealtCard, Deck, DrawError, Rank, Suit, Table, TableOptions,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn reduced_composition() -> Composition {
    Composition::standard().without_all(
        &[Rank::Jack, Rank::Queen, Rank::King, Rank::Ace],
        &[Suit::Hearts, Suit::Diamonds],
    )
}

fn sorted_labels(cards: &[Card]) -> Vec<String> {
    let mut labels: Vec<String> = cards.iter().map(ToString::to_string).collect();
    labels.sort();
    labels
}

#[test]
fn standard_composition_builds_full_deck() {
    let deck = Deck::build(&Composition::standard());
    assert_eq!(deck.remaining(), DECK_SIZE);
    assert!(!deck.is_empty());
}

#[test]
fn reduced_composition_excludes_cross_product() {
    let composition = reduced_composition();
    assert_eq!(composition.size(), 44);
    assert!(!composition.contains(card(Suit::Hearts, Rank::Queen)));
    assert!(composition.contains(card(Suit::Spades, Rank::Queen)));
    assert!(composition.contains(card(Suit::Hearts, Rank::Two)));

    let deck = Deck::build(&composition);
    assert_eq!(deck.remaining(), 44);
}

#[test]
fn excluding_a_card_twice_has_no_further_effect() {
    let composition = Composition::standard()
        .without(Rank::Ace, Suit::Spades)
        .without(Rank::Ace, Suit::Spades);
    assert_eq!(composition.size(), 51);
}

#[test]
fn shuffle_preserves_the_multiset() {
    let composition = Composition::standard();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let reference = Deck::build(&composition);
    let mut deck = Deck::build(&composition);
    deck.shuffle(&mut rng);

    assert_eq!(deck.remaining(), DECK_SIZE);
    assert_eq!(sorted_labels(deck.cards()), sorted_labels(reference.cards()));
}

#[test]
fn shuffle_is_deterministic_per_seed() {
    let composition = Composition::standard();

    let mut first = Deck::build(&composition);
    first.shuffle(&mut ChaCha8Rng::seed_from_u64(42));

    let mut second = Deck::build(&composition);
    second.shuffle(&mut ChaCha8Rng::seed_from_u64(42));

    assert_eq!(first, second);
}

#[test]
fn draw_returns_the_top_card() {
    let mut deck = Deck::from_cards(vec![
        card(Suit::Clubs, Rank::Two),
        card(Suit::Spades, Rank::Ace),
    ]);

    assert_eq!(deck.draw().unwrap(), card(Suit::Spades, Rank::Ace));
    assert_eq!(deck.draw().unwrap(), card(Suit::Clubs, Rank::Two));
    assert_eq!(deck.draw().unwrap_err(), DrawError::EmptyDeck);
}

#[test]
fn draws_are_distinct_until_the_deck_is_empty() {
    let composition = Composition::standard();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::build(&composition);
    deck.shuffle(&mut rng);

    let mut seen = HashSet::new();
    for _ in 0..DECK_SIZE {
        let drawn = deck.draw().unwrap();
        assert!(seen.insert(drawn), "duplicate card drawn: {drawn}");
    }

    assert!(deck.is_empty());
    assert_eq!(deck.draw().unwrap_err(), DrawError::EmptyDeck);
}

#[test]
fn reset_restores_the_composition_and_allows_drawing() {
    let composition = Composition::standard();
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut deck = Deck::build(&composition);
    deck.shuffle(&mut rng);

    while deck.draw().is_ok() {}
    assert_eq!(deck.remaining(), 0);

    deck.reset(&composition, &mut rng);
    assert_eq!(deck.remaining(), DECK_SIZE);
    assert!(deck.draw().is_ok());
}

#[test]
fn forty_four_card_deck_runs_dry_on_the_forty_fifth_draw() {
    let options = TableOptions::default().with_composition(reduced_composition());
    let table = Table::new(options, 13);
    assert_eq!(table.remaining(), 44);

    let mut seen = HashSet::new();
    for _ in 0..44 {
        let id = table.draw().unwrap();
        let drawn = table.card(id).unwrap().identity();
        assert!(seen.insert(drawn), "duplicate card drawn: {drawn}");
    }

    assert!(table.deck_is_empty());
    assert_eq!(table.draw().unwrap_err(), DrawError::EmptyDeck);

    table.reset();
    assert_eq!(table.remaining(), 44);
    assert_eq!(table.dealt_count(), 0);
}

#[test]
fn flip_twice_restores_the_original_face() {
    let mut dealt = DealtCard::new(card(Suit::Hearts, Rank::Seven), true);
    dealt.flip();
    assert!(!dealt.is_face_up());
    dealt.flip();
    assert!(dealt.is_face_up());
    assert_eq!(dealt.identity(), card(Suit::Hearts, Rank::Seven));
}

#[test]
fn options_builder_sets_fields() {
    let composition = reduced_composition();
    let options = TableOptions::default()
        .with_composition(composition.clone())
        .with_deal_face_up(false);

    assert_eq!(options.composition, composition);
    assert!(!options.deal_face_up);
}

#[test]
fn table_assigns_sequential_ids_in_deal_order() {
    let table = Table::new(TableOptions::default(), 5);

    let first = table.draw().unwrap();
    let second = table.draw().unwrap();
    let third = table.draw().unwrap();
    assert_eq!((first, second, third), (0, 1, 2));

    let ids: Vec<u8> = table.dealt_cards().iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
    assert_eq!(table.remaining(), DECK_SIZE - 3);
}

#[test]
fn table_deals_face_per_options() {
    let face_up_table = Table::new(TableOptions::default(), 1);
    let id = face_up_table.draw().unwrap();
    assert!(face_up_table.card(id).unwrap().is_face_up());

    let face_down_table = Table::new(TableOptions::default().with_deal_face_up(false), 1);
    let id = face_down_table.draw().unwrap();
    assert!(!face_down_table.card(id).unwrap().is_face_up());
}

#[test]
fn table_flip_toggles_and_reports_the_new_face() {
    let table = Table::new(TableOptions::default(), 2);
    let id = table.draw().unwrap();

    assert_eq!(table.flip(id), Some(false));
    assert_eq!(table.flip(id), Some(true));
    assert_eq!(table.flip(99), None);
}

#[test]
fn table_draw_pops_the_rigged_top_card() {
    let table = Table::new(TableOptions::default(), 4);
    *table.deck.lock() = Deck::from_cards(vec![
        card(Suit::Diamonds, Rank::Ten),
        card(Suit::Spades, Rank::Queen),
    ]);

    let id = table.draw().unwrap();
    assert_eq!(
        table.card(id).unwrap().identity(),
        card(Suit::Spades, Rank::Queen)
    );
    assert_eq!(table.remaining(), 1);
}

#[test]
fn discard_removes_the_card_from_play() {
    let table = Table::new(TableOptions::default(), 6);
    let id = table.draw().unwrap();
    let kept = table.draw().unwrap();

    let removed = table.discard(id);
    assert!(removed.is_some());
    assert_eq!(table.card(id), None);
    assert_eq!(table.dealt_count(), 1);
    assert_eq!(table.discard(id), None);

    let ids: Vec<u8> = table.dealt_cards().iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, vec![kept]);
}

#[test]
fn reset_clears_play_and_restarts_ids() {
    let table = Table::new(TableOptions::default(), 8);
    table.draw().unwrap();
    table.draw().unwrap();
    assert_eq!(table.dealt_count(), 2);

    table.reset();
    assert_eq!(table.dealt_count(), 0);
    assert_eq!(table.remaining(), DECK_SIZE);
    assert_eq!(table.draw().unwrap(), 0);
}
