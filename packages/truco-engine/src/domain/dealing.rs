//! Deck construction, shuffling and dealing.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::cards_types::{Card, Suit, NUMBERS};
use super::rules::{CARDS_PER_HAND, DECK_SIZE, PLAYERS};
use crate::errors::domain::{DomainError, ValidationKind};

/// Cards dealt to each player for one round, indexed by player id.
pub type Deal = [Vec<Card>; PLAYERS];

/// Generate the full 40-card Spanish deck in standard order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for number in NUMBERS {
            deck.push(Card { suit, number });
        }
    }
    deck
}

/// A shuffled deck that cards are dealt from.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a fresh deck and shuffle it deterministically from `seed`.
    pub fn shuffled(seed: u64) -> Self {
        let mut cards = full_deck();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        cards.shuffle(&mut rng);
        Self { cards }
    }

    /// Remove `n` cards from the top of the deck.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DomainError> {
        if n > self.cards.len() {
            return Err(DomainError::validation(
                ValidationKind::InvalidDeal,
                format!("Cannot deal {n} cards from {} remaining", self.cards.len()),
            ));
        }
        Ok(self.cards.drain(..n).collect())
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

/// Deal both hands for a round from a freshly shuffled deck.
pub fn deal_hands(seed: u64) -> Result<Deal, DomainError> {
    let mut deck = Deck::shuffled(seed);
    let first = deck.deal(CARDS_PER_HAND)?;
    let second = deck.deal(CARDS_PER_HAND)?;
    Ok([first, second])
}

/// Check that a recorded deal could have come from one deck.
pub fn validate_deal(deal: &Deal) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for (player, hand) in deal.iter().enumerate() {
        if hand.len() != CARDS_PER_HAND {
            return Err(DomainError::validation(
                ValidationKind::InvalidDeal,
                format!(
                    "Player {player} was dealt {} cards, expected {CARDS_PER_HAND}",
                    hand.len()
                ),
            ));
        }
        for card in hand {
            if !NUMBERS.contains(&card.number) {
                return Err(DomainError::validation(
                    ValidationKind::InvalidCard,
                    format!("Card {card} does not exist"),
                ));
            }
            if !seen.insert(*card) {
                return Err(DomainError::validation(
                    ValidationKind::InvalidDeal,
                    format!("Card {card} dealt twice"),
                ));
            }
        }
    }
    Ok(())
}
