//! Betting sequences: named steps validated against a static transition table.
//!
//! Envido, flor and truco escalation share one state machine. Each step type
//! carries its own legality table (every legal prefix maps to a [`Cost`]) and
//! its own set of terminal steps; everything else lives here.

pub mod envido;
pub mod flor;
pub mod truco;

use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::domain::rules::PlayerId;
use crate::errors::domain::{DomainError, SequenceErrorKind};

pub use envido::{EnvidoSequence, EnvidoStep};
pub use flor::{FlorSequence, FlorStep};
pub use truco::{TrucoSequence, TrucoStep};

/// Value of a legality-table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cost {
    /// Legal prefix that still awaits an answer.
    NotReady,
    /// Fixed number of points.
    Points(u8),
    /// Worth what the leading player lacks to win (falta envido, contraflor al resto).
    Falta,
}

/// A step vocabulary together with its legality table.
pub trait StepTable: Copy + Eq + Hash + Debug + 'static {
    /// Wire name of the step, e.g. `say_envido`.
    fn name(self) -> &'static str;
    /// Every legal step sequence and its cost.
    fn table() -> &'static HashMap<Vec<Self>, Cost>;
    /// Whether a sequence ending in this step is closed.
    fn is_terminal(self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceStep<S> {
    pub step: S,
    pub player_id: PlayerId,
}

/// Ordered steps of one betting sequence plus the players who said them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BettingSequence<S> {
    steps: Vec<SequenceStep<S>>,
    /// Set once the sequence has paid out (or was voided) and must not pay again.
    awarded: bool,
}

impl<S> Default for BettingSequence<S> {
    fn default() -> Self {
        Self {
            steps: Vec::new(),
            awarded: false,
        }
    }
}

impl<S: StepTable> BettingSequence<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[SequenceStep<S>] {
        &self.steps
    }

    pub fn step_names(&self) -> Vec<S> {
        self.steps.iter().map(|s| s.step).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last_step(&self) -> Option<S> {
        self.steps.last().map(|s| s.step)
    }

    pub fn contains(&self, step: S) -> bool {
        self.steps.iter().any(|s| s.step == step)
    }

    /// True iff appending `step` yields a key of the legality table.
    pub fn can_add_step(&self, step: S) -> bool {
        let mut key = self.step_names();
        key.push(step);
        S::table().contains_key(&key)
    }

    /// Append `step` said by `player_id`; no-op returning false when illegal.
    pub fn add_step(&mut self, step: S, player_id: PlayerId) -> bool {
        if !self.can_add_step(step) {
            return false;
        }
        self.steps.push(SequenceStep { step, player_id });
        true
    }

    /// Clone with `step` appended, for previews that must not touch live state.
    pub fn with_step(&self, step: S, player_id: PlayerId) -> Option<Self> {
        let mut next = self.clone();
        next.add_step(step, player_id).then_some(next)
    }

    pub fn is_finished(&self) -> bool {
        self.last_step().is_some_and(|s| s.is_terminal())
    }

    /// Started, not closed and not yet paid: somebody owes an answer.
    pub fn is_pending(&self) -> bool {
        !self.is_empty() && !self.is_finished() && !self.awarded
    }

    /// Finished or already paid out.
    pub fn is_resolved(&self) -> bool {
        self.is_finished() || self.awarded
    }

    pub fn is_awarded(&self) -> bool {
        self.awarded
    }

    pub fn mark_awarded(&mut self) {
        self.awarded = true;
    }

    /// Player who opened the sub-sequence containing the last step.
    ///
    /// A sub-sequence starts at the first step or right after a terminal step;
    /// answers hand the turn back to this player.
    pub fn starting_player(&self) -> Option<PlayerId> {
        let (_, before_last) = self.steps.split_last()?;
        let start = before_last
            .iter()
            .rposition(|s| s.step.is_terminal())
            .map_or(0, |i| i + 1);
        Some(self.steps[start].player_id)
    }

    /// Player who said the most recent non-terminal step.
    pub fn last_raiser(&self) -> Option<PlayerId> {
        self.steps
            .iter()
            .rev()
            .find(|s| !s.step.is_terminal())
            .map(|s| s.player_id)
    }

    /// Player who said the last step.
    pub fn last_player(&self) -> Option<PlayerId> {
        self.steps.last().map(|s| s.player_id)
    }

    /// Points this sequence is worth.
    ///
    /// `winner_score`/`loser_score` are the current game scores, used only by
    /// falta-style entries. Fails for unfinished sequences unless `for_hint`
    /// is set; never mutates.
    pub fn cost(
        &self,
        max_points: u8,
        winner_score: u8,
        loser_score: u8,
        for_hint: bool,
    ) -> Result<u8, DomainError> {
        if !for_hint && !self.is_finished() {
            return Err(DomainError::sequence(
                SequenceErrorKind::Unfinished,
                format!("Cost requested for unfinished sequence '{self}'"),
            ));
        }
        match S::table().get(&self.step_names()) {
            None => Err(DomainError::sequence(
                SequenceErrorKind::Unknown,
                format!("Sequence '{self}' is not in the legality table"),
            )),
            Some(Cost::NotReady) => Err(DomainError::sequence(
                SequenceErrorKind::Unfinished,
                format!("Sequence '{self}' has no cost yet"),
            )),
            Some(Cost::Points(points)) => Ok(*points),
            Some(Cost::Falta) => Ok(falta_points(max_points, winner_score, loser_score)),
        }
    }
}

impl<S: StepTable> fmt::Display for BettingSequence<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.steps.iter().map(|s| s.step.name()).collect();
        f.write_str(&names.join(","))
    }
}

/// Points of a falta envido / contraflor al resto.
///
/// While both players are below half of `max_points` the falta wins the game
/// outright; otherwise it is worth what the leader lacks to reach `max_points`.
pub fn falta_points(max_points: u8, winner_score: u8, loser_score: u8) -> u8 {
    let half = max_points / 2;
    if winner_score < half && loser_score < half {
        return max_points.saturating_sub(winner_score);
    }
    max_points.saturating_sub(winner_score.max(loser_score))
}
