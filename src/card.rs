//! Card types and ordering.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use crate::error::CardError;

/// Rank used for an ace. Aces always rank above kings.
pub const ACE: u8 = 14;

/// Rank of a king.
pub const KING: u8 = 13;

/// Rank of a queen.
pub const QUEEN: u8 = 12;

/// Rank of a jack.
pub const JACK: u8 = 11;

/// Rank of a ten.
pub const TEN: u8 = 10;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits, in deck order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Hearts, Self::Diamonds, Self::Spades];

    const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "clubs",
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Spades => "spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    /// Parses a suit from its full name or its initial, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| {
                let name = suit.name();
                s.eq_ignore_ascii_case(name) || s.eq_ignore_ascii_case(&name[..1])
            })
            .ok_or(CardError::InvalidSuit)
    }
}

/// A playing card.
///
/// Equality, hashing and ordering look at the rank only, so two cards of
/// the same rank compare equal whatever their suits. Use
/// [`Card::is_identical`] to compare suits as well.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    /// Rank in `2..=14`, with [`ACE`] as 14.
    rank: u8,
    suit: Suit,
}

impl Card {
    /// Creates a new card.
    ///
    /// An ace may be given as either 1 or 14; it is stored as [`ACE`].
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside `1..=14`.
    ///
    /// # Example
    ///
    /// ```
    /// use handrank::{ACE, Card, Suit};
    ///
    /// let low = Card::new(1, Suit::Spades).unwrap();
    /// let high = Card::new(14, Suit::Hearts).unwrap();
    /// assert_eq!(low.rank(), ACE);
    /// assert_eq!(low, high);
    /// ```
    pub const fn new(rank: u8, suit: Suit) -> Result<Self, CardError> {
        match rank {
            1 => Ok(Self { rank: ACE, suit }),
            2..=ACE => Ok(Self { rank, suit }),
            _ => Err(CardError::InvalidRank(rank)),
        }
    }

    /// Creates a card from a rank already known to be in `2..=14`.
    pub(crate) const fn new_unchecked(rank: u8, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the rank of the card (2..=14, ace is 14).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == ACE
    }

    /// Returns whether both rank and suit match.
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            JACK => write!(f, "Jack of {}", self.suit),
            QUEEN => write!(f, "Queen of {}", self.suit),
            KING => write!(f, "King of {}", self.suit),
            ACE => write!(f, "Ace of {}", self.suit),
            rank => write!(f, "{rank} of {}", self.suit),
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
