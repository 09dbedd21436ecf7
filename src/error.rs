//! Error types for card, hand and deck operations.

use thiserror::Error;

/// Errors that can occur when building a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is outside `1..=14`.
    #[error("invalid card rank {0}, expected 1 to 14")]
    InvalidRank(u8),
    /// Suit name not recognized.
    #[error("unrecognized suit")]
    InvalidSuit,
}

/// Errors that can occur when dealing into a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The deal would leave the hand holding this many cards, more than five.
    #[error("hand would hold {0} cards, at most 5 are allowed")]
    Overflow(usize),
}

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Exhausted,
}
