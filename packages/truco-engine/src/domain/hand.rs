//! A player's three cards, split into unrevealed and revealed.

use serde::{Deserialize, Serialize};

use super::cards_logic::{envido_cards, envido_score, flor_score, has_flor};
use super::cards_types::Card;
use crate::errors::domain::{DomainError, ValidationKind};

/// Invariant: a card lives in exactly one of the two lists, at most once.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Hand {
    pub unrevealed: Vec<Card>,
    /// Reveal order.
    pub revealed: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            unrevealed: cards,
            revealed: Vec::new(),
        }
    }

    pub fn all_cards(&self) -> Vec<Card> {
        let mut all = self.revealed.clone();
        all.extend(self.unrevealed.iter().copied());
        all
    }

    pub fn has_unrevealed(&self, card: Card) -> bool {
        self.unrevealed.contains(&card)
    }

    /// Move `card` from the unrevealed to the revealed list.
    pub fn reveal(&mut self, card: Card) -> Result<(), DomainError> {
        let Some(pos) = self.unrevealed.iter().position(|&c| c == card) else {
            return Err(DomainError::validation(
                ValidationKind::CardNotInHand,
                format!("Card {card} not in hand"),
            ));
        };
        let removed = self.unrevealed.remove(pos);
        self.revealed.push(removed);
        Ok(())
    }

    /// Reveal every card still hidden.
    pub fn reveal_all(&mut self) {
        let rest: Vec<Card> = self.unrevealed.drain(..).collect();
        self.revealed.extend(rest);
    }

    /// Reveal the cards that make up the hand's envido score.
    pub fn reveal_envido_cards(&mut self) {
        for card in envido_cards(&self.all_cards()) {
            if let Some(pos) = self.unrevealed.iter().position(|&c| c == card) {
                let moved = self.unrevealed.remove(pos);
                self.revealed.push(moved);
            }
        }
    }

    pub fn envido_score(&self) -> u8 {
        envido_score(&self.all_cards())
    }

    /// Envido score provable from the revealed cards alone.
    pub fn revealed_envido_score(&self) -> u8 {
        envido_score(&self.revealed)
    }

    pub fn has_flor(&self) -> bool {
        has_flor(&self.all_cards())
    }

    pub fn flor_score(&self) -> Option<u8> {
        flor_score(&self.all_cards())
    }
}
