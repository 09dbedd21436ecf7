//! Shuffled card supply.

extern crate alloc;

use alloc::vec::Vec;

use log::debug;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{ACE, Card, DECK_SIZE, Suit};
use crate::error::DrawError;

/// A standard 52-card deck that yields each card once.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards; the top of the deck is the end of the vector.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a deck shuffled with a generator seeded from `seed`.
    ///
    /// The same seed always yields the same order.
    ///
    /// # Example
    ///
    /// ```
    /// use handrank::{DECK_SIZE, Deck};
    ///
    /// let mut deck = Deck::new(42);
    /// let card = deck.draw().unwrap();
    /// assert_eq!(deck.len(), DECK_SIZE - 1);
    /// let _ = card;
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_rng(&mut rng)
    }

    /// Creates a deck shuffled with the given random source.
    #[must_use]
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        deck.shuffle(rng);
        deck
    }

    /// Creates an unshuffled deck.
    ///
    /// Cards are drawn in rank order from twos to aces, each rank in
    /// clubs, hearts, diamonds, spades order.
    #[must_use]
    pub fn ordered() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in (2..=ACE).rev() {
            for suit in Suit::ALL.into_iter().rev() {
                cards.push(Card::new_unchecked(rank, suit));
            }
        }

        Self { cards }
    }

    /// Shuffles the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        debug!("shuffled deck of {} cards", self.cards.len());
    }

    /// Draws the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Exhausted`] if the deck is empty.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        self.cards.pop().ok_or_else(|| {
            debug!("draw from an exhausted deck");
            DrawError::Exhausted
        })
    }

    /// Draws `count` cards from the top, in draw order.
    ///
    /// Nothing is drawn unless all `count` cards are available.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Exhausted`] if fewer than `count` cards remain.
    pub fn draw_many(&mut self, count: usize) -> Result<Vec<Card>, DrawError> {
        if count > self.cards.len() {
            debug!(
                "cannot draw {count} cards, {} remaining",
                self.cards.len()
            );
            return Err(DrawError::Exhausted);
        }

        let split = self.cards.len() - count;
        let mut drawn = self.cards.split_off(split);
        drawn.reverse();
        Ok(drawn)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::ordered()
    }
}
