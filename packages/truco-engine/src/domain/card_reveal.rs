//! Face-off play: up to six alternating card reveals per round.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::cards_logic::compare_truco_score;
use super::cards_types::{Card, Suit};
use super::rules::{opponent_of, PlayerId, FACE_OFFS, MAX_REVEALS, PLAYERS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealStep {
    pub card: Card,
    pub player_id: PlayerId,
}

/// Outcome of one face-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceOffResult {
    Won(PlayerId),
    Tie,
}

const ESPADA_ONE: Card = Card {
    suit: Suit::Espada,
    number: 1,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRevealSequence {
    /// Player who reveals first in the round.
    mano: PlayerId,
    steps: Vec<RevealStep>,
    /// One entry per completed face-off.
    face_offs: Vec<FaceOffResult>,
}

impl CardRevealSequence {
    pub fn new(mano: PlayerId) -> Self {
        Self {
            mano,
            steps: Vec::with_capacity(MAX_REVEALS),
            face_offs: Vec::with_capacity(FACE_OFFS),
        }
    }

    pub fn mano(&self) -> PlayerId {
        self.mano
    }

    pub fn steps(&self) -> &[RevealStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn face_offs(&self) -> &[FaceOffResult] {
        &self.face_offs
    }

    pub fn wins(&self, player: PlayerId) -> usize {
        self.face_offs
            .iter()
            .filter(|r| **r == FaceOffResult::Won(player))
            .count()
    }

    /// Player who must reveal next; `None` once the sequence is finished.
    pub fn next_player(&self) -> Option<PlayerId> {
        if self.is_finished() {
            return None;
        }
        match self.steps.len() {
            0 => Some(self.mano),
            2 => Some(self.face_off_leader(&self.face_offs[..1])),
            4 => Some(self.face_off_leader(&self.face_offs[..2])),
            n if n < MAX_REVEALS => Some(opponent_of(self.steps[n - 1].player_id)),
            _ => None,
        }
    }

    /// Who opens the next face-off given the completed ones.
    ///
    /// The last face-off's winner leads; after a tie the mano leads again.
    fn face_off_leader(&self, done: &[FaceOffResult]) -> PlayerId {
        match done.last() {
            Some(FaceOffResult::Won(p)) => *p,
            _ => self.mano,
        }
    }

    /// Record `card` revealed by `player`; false when it is not their turn.
    pub fn add_step(&mut self, card: Card, player: PlayerId) -> bool {
        if self.next_player() != Some(player) {
            return false;
        }
        self.steps.push(RevealStep {
            card,
            player_id: player,
        });
        if self.steps.len() % PLAYERS == 0 {
            let first = self.steps[self.steps.len() - 2];
            let second = self.steps[self.steps.len() - 1];
            let result = match compare_truco_score(first.card, second.card) {
                Ordering::Greater => FaceOffResult::Won(first.player_id),
                Ordering::Less => FaceOffResult::Won(second.player_id),
                Ordering::Equal => FaceOffResult::Tie,
            };
            self.face_offs.push(result);
        }
        true
    }

    /// The first face-off's winner leads the second with the espada 1,
    /// which cannot be beaten.
    fn espada_shortcut(&self) -> Option<PlayerId> {
        let lead = self.steps.get(2)?;
        if self.steps.len() != 3 || lead.card != ESPADA_ONE {
            return None;
        }
        (self.face_offs.first() == Some(&FaceOffResult::Won(lead.player_id)))
            .then_some(lead.player_id)
    }

    pub fn is_finished(&self) -> bool {
        if self.espada_shortcut().is_some() {
            return true;
        }
        let done = self.face_offs.len();
        done >= FACE_OFFS || (done >= 2 && self.wins(0) != self.wins(1))
    }

    /// Round winner once the sequence is finished.
    ///
    /// More face-off wins take the round. On equal wins the first face-off
    /// that was not a tie decides; when all three tied, the mano wins.
    pub fn winner(&self) -> Option<PlayerId> {
        if !self.is_finished() {
            return None;
        }
        if let Some(p) = self.espada_shortcut() {
            return Some(p);
        }
        match self.wins(0).cmp(&self.wins(1)) {
            Ordering::Greater => Some(0),
            Ordering::Less => Some(1),
            Ordering::Equal => Some(
                self.face_offs
                    .iter()
                    .find_map(|r| match r {
                        FaceOffResult::Won(p) => Some(*p),
                        FaceOffResult::Tie => None,
                    })
                    .unwrap_or(self.mano),
            ),
        }
    }
}
