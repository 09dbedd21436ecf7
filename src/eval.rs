//! Best-hand evaluation.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use itertools::Itertools;
use log::trace;

use crate::card::Card;
use crate::category::Category;
use crate::hand::{Hand, MAX_HAND_SIZE};
use crate::options::EvalOptions;

/// Finds the best ranking category of a hand of up to five cards.
///
/// Categories are tried strongest first and the first match wins. When
/// nothing above a pair matches, every two-card combination holding a
/// pair is reported, so the result may repeat [`Category::Pair`].
///
/// # Example
///
/// ```
/// use handrank::{Card, Category, Evaluator, Hand, Suit};
///
/// let mut hand = Hand::new();
/// hand.deal(&[
///     Card::new(3, Suit::Clubs).unwrap(),
///     Card::new(3, Suit::Hearts).unwrap(),
///     Card::new(3, Suit::Diamonds).unwrap(),
///     Card::new(7, Suit::Spades).unwrap(),
///     Card::new(7, Suit::Clubs).unwrap(),
/// ])
/// .unwrap();
///
/// let evaluator = Evaluator::default();
/// assert_eq!(evaluator.evaluate(&hand), vec![Category::FullHouse]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluator {
    /// Evaluation options.
    pub options: EvalOptions,
}

impl Evaluator {
    /// Creates an evaluator with the given options.
    #[must_use]
    pub const fn new(options: EvalOptions) -> Self {
        Self { options }
    }

    /// Evaluates the cards currently held by `hand`.
    #[must_use]
    pub fn evaluate(&self, hand: &Hand) -> Vec<Category> {
        self.evaluate_cards(hand.cards())
    }

    /// Evaluates a slice of up to five cards.
    #[must_use]
    pub fn evaluate_cards(&self, cards: &[Card]) -> Vec<Category> {
        if cards.is_empty() {
            return Vec::new();
        }

        for category in Category::PRIORITY {
            let matched = match category {
                Category::FourOfAKind => {
                    cards.len() == MAX_HAND_SIZE && self.any_combination(cards, category)
                }
                Category::ThreeOfAKind => self.any_combination(cards, category),
                _ => category.matches(cards, &self.options),
            };
            if matched {
                return self.found(category);
            }
        }

        if cards.len() == 2 {
            return Vec::new();
        }

        let pairs: Vec<Category> = cards
            .iter()
            .copied()
            .combinations(2)
            .filter(|combo| Category::Pair.matches(combo, &self.options))
            .map(|_| Category::Pair)
            .collect();
        trace!("{} pair combinations in {} cards", pairs.len(), cards.len());
        pairs
    }

    /// Returns whether any combination of the category's size matches it.
    fn any_combination(&self, cards: &[Card], category: Category) -> bool {
        cards
            .iter()
            .copied()
            .combinations(category.required_cards())
            .any(|combo| category.matches(&combo, &self.options))
    }

    fn found(&self, category: Category) -> Vec<Category> {
        trace!("best hand is {category} (wheel: {})", self.options.wheel);
        vec![category]
    }
}

/// Evaluates `hand` with default options.
///
/// Shorthand for `Evaluator::default().evaluate(hand)`.
#[must_use]
pub fn evaluate(hand: &Hand) -> Vec<Category> {
    Evaluator::default().evaluate(hand)
}
