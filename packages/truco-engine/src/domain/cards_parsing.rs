//! Card parsing from string representations (e.g., "1E", "12B")

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

impl Suit {
    pub const fn letter(&self) -> char {
        match self {
            Suit::Oro => 'O',
            Suit::Copa => 'C',
            Suit::Espada => 'E',
            Suit::Basto => 'B',
        }
    }

    fn from_letter(ch: char) -> Option<Suit> {
        match ch {
            'O' => Some(Suit::Oro),
            'C' => Some(Suit::Copa),
            'E' => Some(Suit::Espada),
            'B' => Some(Suit::Basto),
            _ => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.suit.letter())
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err =
            || DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"));

        if !(2..=3).contains(&s.len()) || !s.is_ascii() {
            return Err(parse_err());
        }
        let (digits, suit_part) = s.split_at(s.len() - 1);
        let suit = suit_part
            .chars()
            .next()
            .and_then(Suit::from_letter)
            .ok_or_else(parse_err)?;
        if digits.starts_with('0') || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(parse_err());
        }
        let number = digits.parse::<u8>().map_err(|_| parse_err())?;
        Card::new(suit, number)
    }
}

/// Non-panicking helper to parse card tokens (e.g., "1E", "7O") into Card instances.
/// Returns an error if any token is invalid.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
