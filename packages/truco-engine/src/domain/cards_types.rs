//! Core card-related types: Card, Suit

use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Oro,
    Copa,
    Espada,
    Basto,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Oro, Suit::Copa, Suit::Espada, Suit::Basto];
}

/// Card numbers present in a Spanish 40-card deck (8 and 9 are removed).
pub const NUMBERS: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 10, 11, 12];

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub number: u8,
}

impl Card {
    /// Build a card, rejecting numbers that are not in the deck.
    pub fn new(suit: Suit, number: u8) -> Result<Self, DomainError> {
        if !NUMBERS.contains(&number) {
            return Err(DomainError::validation(
                ValidationKind::InvalidCard,
                format!("No card numbered {number} in a 40-card deck"),
            ));
        }
        Ok(Card { suit, number })
    }

    /// Value of the card when counting envido or flor (figures count 0).
    pub fn envido_value(&self) -> u8 {
        if self.number >= 10 {
            0
        } else {
            self.number
        }
    }
}

// Note: Ord on Card is only for stable sorting: suit order then number.
// Never use it to compare cards in play; see `compare_truco_score`.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.number.cmp(&other.number),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
