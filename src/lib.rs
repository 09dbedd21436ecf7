//! A poker hand category evaluator with optional `no_std` support.
//!
//! The crate classifies a hand of up to five cards into its best
//! [`Category`], from a pair up to a royal flush. A shuffled [`Deck`]
//! supplies cards and a [`Hand`] collects them.
//!
//! # Example
//!
//! ```
//! use handrank::{Card, Category, Deck, Hand, Suit};
//!
//! let mut hand = Hand::new();
//! hand.deal(&[
//!     Card::new(4, Suit::Clubs).unwrap(),
//!     Card::new(4, Suit::Hearts).unwrap(),
//!     Card::new(7, Suit::Diamonds).unwrap(),
//! ])
//! .unwrap();
//! assert_eq!(hand.best_hand(), vec![Category::Pair]);
//!
//! let mut deck = Deck::new(42);
//! hand.clear();
//! hand.deal(&deck.draw_many(5).unwrap()).unwrap();
//! assert_eq!(hand.len(), 5);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod category;
pub mod deck;
pub mod error;
pub mod eval;
pub mod hand;
pub mod options;

// Re-export main types
pub use card::{ACE, Card, DECK_SIZE, JACK, KING, QUEEN, Suit, TEN};
pub use category::Category;
pub use deck::Deck;
pub use error::{CardError, DrawError, HandError};
pub use eval::{Evaluator, evaluate};
pub use hand::{Hand, MAX_HAND_SIZE};
pub use options::EvalOptions;
