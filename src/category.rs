//! Ranking categories and the predicates that recognize them.
//!
//! Every predicate first rejects input of the wrong size and never
//! reorders the caller's cards.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use itertools::Itertools;

use crate::card::{ACE, Card, TEN};
use crate::options::EvalOptions;

/// A poker ranking category.
///
/// Variants are ordered by evaluation priority, [`Category::Pair`]
/// weakest and [`Category::RoyalFlush`] strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Two cards of one rank.
    Pair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Five cards of consecutive rank.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Four cards of one rank.
    FourOfAKind,
    /// A straight that is also a flush.
    StraightFlush,
    /// A ten-to-ace straight flush.
    RoyalFlush,
}

impl Category {
    /// All categories, strongest first, in the order the evaluator tries them.
    pub const PRIORITY: [Self; 8] = [
        Self::RoyalFlush,
        Self::StraightFlush,
        Self::FourOfAKind,
        Self::Flush,
        Self::Straight,
        Self::FullHouse,
        Self::ThreeOfAKind,
        Self::Pair,
    ];

    /// Returns how many cards the category's predicate accepts.
    #[must_use]
    pub const fn required_cards(self) -> usize {
        match self {
            Self::Pair => 2,
            Self::ThreeOfAKind => 3,
            Self::FourOfAKind => 4,
            Self::Straight
            | Self::Flush
            | Self::FullHouse
            | Self::StraightFlush
            | Self::RoyalFlush => 5,
        }
    }

    /// Returns whether `cards` has exactly the shape of this category.
    ///
    /// # Example
    ///
    /// ```
    /// use handrank::{Card, Category, EvalOptions, Suit};
    ///
    /// let cards = [
    ///     Card::new(7, Suit::Clubs).unwrap(),
    ///     Card::new(7, Suit::Hearts).unwrap(),
    /// ];
    /// assert!(Category::Pair.matches(&cards, &EvalOptions::default()));
    /// assert!(!Category::ThreeOfAKind.matches(&cards, &EvalOptions::default()));
    /// ```
    #[must_use]
    pub fn matches(self, cards: &[Card], options: &EvalOptions) -> bool {
        match self {
            Self::Pair => is_pair(cards),
            Self::ThreeOfAKind => is_three_of_a_kind(cards),
            Self::Straight => is_straight(cards, options.wheel),
            Self::Flush => is_flush(cards),
            Self::FullHouse => is_full_house(cards),
            Self::FourOfAKind => is_four_of_a_kind(cards),
            Self::StraightFlush => is_straight_flush(cards, options.wheel),
            Self::RoyalFlush => is_royal_flush(cards, options.wheel),
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Pair => "pair",
            Self::ThreeOfAKind => "three of a kind",
            Self::Straight => "straight",
            Self::Flush => "flush",
            Self::FullHouse => "full house",
            Self::FourOfAKind => "four of a kind",
            Self::StraightFlush => "straight flush",
            Self::RoyalFlush => "royal flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns whether every card has the same rank.
///
/// An empty slice is trivially uniform.
#[must_use]
pub fn all_same_rank(cards: &[Card]) -> bool {
    cards.iter().all_equal()
}

/// Two cards of one rank.
#[must_use]
pub fn is_pair(cards: &[Card]) -> bool {
    cards.len() == 2 && all_same_rank(cards)
}

/// Three cards of one rank.
#[must_use]
pub fn is_three_of_a_kind(cards: &[Card]) -> bool {
    cards.len() == 3 && all_same_rank(cards)
}

/// Four cards of one rank.
#[must_use]
pub fn is_four_of_a_kind(cards: &[Card]) -> bool {
    cards.len() == 4 && all_same_rank(cards)
}

/// Five cards that split into a pair and a disjoint three of a kind.
#[must_use]
pub fn is_full_house(cards: &[Card]) -> bool {
    if cards.len() != 5 {
        return false;
    }

    (0..cards.len()).combinations(2).any(|picked| {
        let (pair, rest): (Vec<Card>, Vec<Card>) = cards
            .iter()
            .enumerate()
            .partition_map(|(index, &card)| {
                if picked.contains(&index) {
                    itertools::Either::Left(card)
                } else {
                    itertools::Either::Right(card)
                }
            });
        is_pair(&pair) && is_three_of_a_kind(&rest)
    })
}

/// Five cards of one suit.
#[must_use]
pub fn is_flush(cards: &[Card]) -> bool {
    cards.len() == 5 && cards.iter().map(Card::suit).all_equal()
}

/// Five cards whose ranks, sorted ace-high, each rise by exactly one.
///
/// With `wheel` set, A-2-3-4-5 also counts.
#[must_use]
pub fn is_straight(cards: &[Card], wheel: bool) -> bool {
    if cards.len() != 5 {
        return false;
    }

    let sorted: Vec<u8> = cards.iter().sorted().map(Card::rank).collect();
    if sorted.iter().tuple_windows().all(|(low, high)| *high == low + 1) {
        return true;
    }

    wheel && sorted == [2, 3, 4, 5, ACE]
}

/// A straight that is also a flush.
#[must_use]
pub fn is_straight_flush(cards: &[Card], wheel: bool) -> bool {
    is_straight(cards, wheel) && is_flush(cards)
}

/// A straight flush holding both a ten and an ace.
#[must_use]
pub fn is_royal_flush(cards: &[Card], wheel: bool) -> bool {
    is_straight_flush(cards, wheel)
        && cards.iter().any(|card| card.rank() == TEN)
        && cards.iter().any(Card::is_ace)
}
