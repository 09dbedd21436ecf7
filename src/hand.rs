//! Poker hand representation.

extern crate alloc;

use alloc::vec::Vec;

use log::debug;

use crate::card::Card;
use crate::category::Category;
use crate::error::HandError;
use crate::eval::Evaluator;
use crate::options::EvalOptions;

/// Maximum number of cards a hand can hold.
pub const MAX_HAND_SIZE: usize = 5;

/// A hand of at most five cards.
///
/// The best ranking is computed on demand from the current cards, so it
/// always reflects the latest deal.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand, in the order they were dealt.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Deals `cards` into the hand.
    ///
    /// The deal is all-or-nothing: on error the hand is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::Overflow`] if the hand would hold more than
    /// [`MAX_HAND_SIZE`] cards.
    pub fn deal(&mut self, cards: &[Card]) -> Result<(), HandError> {
        let total = self.cards.len() + cards.len();
        if total > MAX_HAND_SIZE {
            debug!(
                "rejected deal of {} cards into a hand of {}",
                cards.len(),
                self.cards.len()
            );
            return Err(HandError::Overflow(total));
        }

        self.cards.extend_from_slice(cards);
        Ok(())
    }

    /// Adds a single card to the hand.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::Overflow`] if the hand is already full.
    pub fn add_card(&mut self, card: Card) -> Result<(), HandError> {
        self.deal(&[card])
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new deal.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the best ranking of the hand with default options.
    #[must_use]
    pub fn best_hand(&self) -> Vec<Category> {
        self.best_hand_with(&EvalOptions::default())
    }

    /// Returns the best ranking of the hand with the given options.
    #[must_use]
    pub fn best_hand_with(&self, options: &EvalOptions) -> Vec<Category> {
        Evaluator::new(*options).evaluate(self)
    }
}
