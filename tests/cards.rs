//! Card, hand and deck integration tests.

use std::collections::HashSet;

use handrank::{
    ACE, Card, CardError, DECK_SIZE, Deck, DrawError, Hand, HandError, KING, MAX_HAND_SIZE, Suit,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn card(rank: u8, suit: Suit) -> Card {
    Card::new(rank, suit).unwrap()
}

fn all_cards() -> Vec<Card> {
    let mut deck = Deck::ordered();
    deck.draw_many(DECK_SIZE).unwrap()
}

#[test]
fn card_rank_validation() {
    assert_eq!(
        Card::new(0, Suit::Clubs).unwrap_err(),
        CardError::InvalidRank(0)
    );
    assert_eq!(
        Card::new(15, Suit::Hearts).unwrap_err(),
        CardError::InvalidRank(15)
    );

    for rank in 2..=14 {
        assert_eq!(card(rank, Suit::Spades).rank(), rank);
    }
}

#[test]
fn ace_given_as_one_is_stored_high() {
    let low = card(1, Suit::Clubs);
    let high = card(14, Suit::Diamonds);

    assert_eq!(low.rank(), ACE);
    assert!(low.is_ace());
    assert_eq!(low, high);
    assert!(!low.is_identical(&high));
    assert!(low.is_identical(&card(ACE, Suit::Clubs)));
}

#[test]
fn equality_ignores_suit() {
    assert_eq!(card(7, Suit::Clubs), card(7, Suit::Hearts));
    assert_ne!(card(7, Suit::Clubs), card(8, Suit::Clubs));

    let ranks: HashSet<Card> = [card(9, Suit::Clubs), card(9, Suit::Spades)].into();
    assert_eq!(ranks.len(), 1);
}

#[test]
fn ace_ranks_above_king() {
    let ace = card(1, Suit::Hearts);
    let king = card(KING, Suit::Hearts);

    assert!(ace > king);
    assert!(king < ace);
    assert!(ace >= card(ACE, Suit::Spades));
    assert!(card(2, Suit::Clubs) < ace);
}

#[test]
fn ordering_is_trichotomous_and_transitive() {
    let cards = all_cards();

    for a in &cards {
        for b in &cards {
            let relations = [a < b, a == b, a > b];
            assert_eq!(relations.iter().filter(|&&r| r).count(), 1, "{a} vs {b}");

            for c in &cards {
                if a < b && b < c {
                    assert!(a < c, "{a} < {b} < {c}");
                }
            }
        }
    }
}

#[test]
fn suit_parsing() {
    assert_eq!("clubs".parse::<Suit>().unwrap(), Suit::Clubs);
    assert_eq!("Hearts".parse::<Suit>().unwrap(), Suit::Hearts);
    assert_eq!("d".parse::<Suit>().unwrap(), Suit::Diamonds);
    assert_eq!("S".parse::<Suit>().unwrap(), Suit::Spades);
    assert_eq!("stars".parse::<Suit>().unwrap_err(), CardError::InvalidSuit);
    assert_eq!("".parse::<Suit>().unwrap_err(), CardError::InvalidSuit);
}

#[test]
fn card_display() {
    assert_eq!(card(2, Suit::Clubs).to_string(), "2 of clubs");
    assert_eq!(card(10, Suit::Hearts).to_string(), "10 of hearts");
    assert_eq!(card(11, Suit::Diamonds).to_string(), "Jack of diamonds");
    assert_eq!(card(12, Suit::Spades).to_string(), "Queen of spades");
    assert_eq!(card(13, Suit::Clubs).to_string(), "King of clubs");
    assert_eq!(card(1, Suit::Hearts).to_string(), "Ace of hearts");
}

#[test]
fn hand_deal_accumulates() {
    let mut hand = Hand::new();
    assert!(hand.is_empty());

    hand.deal(&[card(2, Suit::Clubs), card(3, Suit::Clubs)])
        .unwrap();
    hand.deal(&[]).unwrap();
    hand.add_card(card(4, Suit::Clubs)).unwrap();

    assert_eq!(hand.len(), 3);
    assert_eq!(hand.cards()[2].rank(), 4);
}

#[test]
fn hand_overflow_leaves_cards_untouched() {
    let mut hand = Hand::new();
    for rank in 2..7 {
        hand.add_card(card(rank, Suit::Hearts)).unwrap();
    }
    assert_eq!(hand.len(), MAX_HAND_SIZE);

    assert_eq!(
        hand.add_card(card(9, Suit::Spades)).unwrap_err(),
        HandError::Overflow(6)
    );
    assert_eq!(hand.len(), MAX_HAND_SIZE);

    hand.clear();
    hand.deal(&[card(2, Suit::Clubs), card(3, Suit::Clubs)])
        .unwrap();
    let err = hand
        .deal(&[
            card(4, Suit::Clubs),
            card(5, Suit::Clubs),
            card(6, Suit::Clubs),
            card(7, Suit::Clubs),
        ])
        .unwrap_err();
    assert_eq!(err, HandError::Overflow(6));
    assert_eq!(hand.len(), 2);
}

#[test]
fn ordered_deck_holds_every_card_once() {
    let cards = all_cards();
    assert_eq!(cards.len(), DECK_SIZE);

    for (i, a) in cards.iter().enumerate() {
        assert!((2..=ACE).contains(&a.rank()));
        for b in &cards[i + 1..] {
            assert!(!a.is_identical(b), "{a} drawn twice");
        }
    }

    assert!(cards[0].is_identical(&card(2, Suit::Clubs)));
    assert!(cards[1].is_identical(&card(2, Suit::Hearts)));
    assert!(cards[DECK_SIZE - 1].is_identical(&card(ACE, Suit::Spades)));
}

#[test]
fn deck_draws_until_exhausted() {
    let mut deck = Deck::new(7);
    assert_eq!(deck.len(), DECK_SIZE);

    let mut drawn = Vec::new();
    while let Ok(card) = deck.draw() {
        assert!(!drawn.iter().any(|c: &Card| c.is_identical(&card)));
        drawn.push(card);
    }

    assert_eq!(drawn.len(), DECK_SIZE);
    assert!(deck.is_empty());
    assert_eq!(deck.draw().unwrap_err(), DrawError::Exhausted);
}

#[test]
fn draw_many_is_all_or_nothing() {
    let mut deck = Deck::new(3);
    deck.draw_many(50).unwrap();
    assert_eq!(deck.draw_many(3).unwrap_err(), DrawError::Exhausted);
    assert_eq!(deck.len(), 2);
    assert_eq!(deck.draw_many(2).unwrap().len(), 2);
    assert!(deck.is_empty());
}

#[test]
fn seeded_decks_are_reproducible() {
    let mut a = Deck::new(42);
    let mut b = Deck::new(42);
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut c = Deck::with_rng(&mut rng);

    for _ in 0..DECK_SIZE {
        let card = a.draw().unwrap();
        assert!(card.is_identical(&b.draw().unwrap()));
        assert!(card.is_identical(&c.draw().unwrap()));
    }
}

#[test]
fn shuffle_changes_order() {
    let ordered = all_cards();
    let mut deck = Deck::new(1);
    let shuffled = deck.draw_many(DECK_SIZE).unwrap();

    assert!(
        ordered
            .iter()
            .zip(&shuffled)
            .any(|(a, b)| !a.is_identical(b))
    );
}
