use serde::{Deserialize, Serialize};

use super::{priority, ActionBehavior};
use crate::domain::betting::EnvidoStep;
use crate::domain::game::GameState;
use crate::domain::rules::{is_seated, opponent_of, PlayerId};
use crate::error::EngineError;
use crate::errors::domain::DomainError;

/// Whether `player` may open or raise the envido with `step`.
fn can_raise(g: &GameState, player: PlayerId, step: EnvidoStep) -> bool {
    let round = &g.round;
    if !is_seated(player) || round.is_finished || g.plays_flor(player) || !round.flor.is_empty() {
        return false;
    }
    if round.envido.is_empty() {
        let truco_allows = round.truco.is_empty() || round.truco.is_first_truco_open();
        if !truco_allows || !g.player(player).hand.revealed.is_empty() {
            return false;
        }
    } else if !round.envido.is_pending() {
        return false;
    }
    round.envido.can_add_step(step)
}

fn can_answer(g: &GameState, player: PlayerId, step: EnvidoStep) -> bool {
    let round = &g.round;
    is_seated(player)
        && !round.is_finished
        && !g.plays_flor(player)
        && round.envido.is_pending()
        && round.envido.can_add_step(step)
}

/// Envido winner by hand score; the mano wins ties.
pub(crate) fn envido_winner(g: &GameState) -> PlayerId {
    let mano = g.mano();
    let other = opponent_of(mano);
    if g.player(other).hand.envido_score() > g.player(mano).hand.envido_score() {
        other
    } else {
        mano
    }
}

fn settle(g: &mut GameState, winner: PlayerId, points: u8) {
    g.round.result.envido_winner = Some(winner);
    g.round.result.envido_points = points;
    g.round.envido.mark_awarded();
    g.award(winner, points);
}

/// Cost of the envido sequence with `winner` leading the falta formula.
fn finished_cost(g: &GameState, winner: PlayerId) -> Result<u8, DomainError> {
    g.round.envido.cost(
        g.config.max_points,
        g.score(winner),
        g.score(opponent_of(winner)),
        false,
    )
}

fn add_step(g: &mut GameState, step: EnvidoStep, player: PlayerId) -> Result<(), EngineError> {
    if g.round.envido.add_step(step, player) {
        Ok(())
    } else {
        Err(EngineError::illegal(format!(
            "Cannot add {step:?} to envido '{}'",
            g.round.envido
        )))
    }
}

macro_rules! envido_raise {
    ($name:ident, $step:expr) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            pub player_id: PlayerId,
        }

        impl ActionBehavior for $name {
            fn player_id(&self) -> PlayerId {
                self.player_id
            }

            fn is_possible(&self, g: &GameState) -> bool {
                can_raise(g, self.player_id, $step)
            }

            fn run(&self, g: &mut GameState) -> Result<(), EngineError> {
                add_step(g, $step, self.player_id)
            }

            fn priority(&self) -> u8 {
                priority::RAISE
            }
        }
    };
}

envido_raise!(SayEnvido, EnvidoStep::Envido);
envido_raise!(SayRealEnvido, EnvidoStep::RealEnvido);
envido_raise!(SayFaltaEnvido, EnvidoStep::FaltaEnvido);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SayEnvidoQuiero {
    pub player_id: PlayerId,
    /// Accepter's envido score, filled in by the engine.
    #[serde(default)]
    pub score: u8,
}

impl SayEnvidoQuiero {
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            score: 0,
        }
    }
}

impl ActionBehavior for SayEnvidoQuiero {
    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn is_possible(&self, g: &GameState) -> bool {
        can_answer(g, self.player_id, EnvidoStep::Quiero)
    }

    fn run(&self, g: &mut GameState) -> Result<(), EngineError> {
        add_step(g, EnvidoStep::Quiero, self.player_id)
    }

    fn enrich(&mut self, g: &GameState) {
        if is_seated(self.player_id) {
            self.score = g.player(self.player_id).hand.envido_score();
        }
    }

    fn priority(&self) -> u8 {
        priority::ANSWER
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SayEnvidoNoQuiero {
    pub player_id: PlayerId,
    /// Points conceded to the raiser, filled in by the engine.
    #[serde(default)]
    pub cost: u8,
}

impl SayEnvidoNoQuiero {
    pub fn new(player_id: PlayerId) -> Self {
        Self { player_id, cost: 0 }
    }
}

impl ActionBehavior for SayEnvidoNoQuiero {
    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn is_possible(&self, g: &GameState) -> bool {
        can_answer(g, self.player_id, EnvidoStep::NoQuiero)
    }

    fn run(&self, g: &mut GameState) -> Result<(), EngineError> {
        add_step(g, EnvidoStep::NoQuiero, self.player_id)?;
        let winner = opponent_of(self.player_id);
        let points = finished_cost(g, winner)?;
        settle(g, winner, points);
        Ok(())
    }

    fn enrich(&mut self, g: &GameState) {
        if !is_seated(self.player_id) {
            return;
        }
        let winner = opponent_of(self.player_id);
        self.cost = g
            .round
            .envido
            .with_step(EnvidoStep::NoQuiero, self.player_id)
            .and_then(|s| {
                s.cost(
                    g.config.max_points,
                    g.score(winner),
                    g.score(self.player_id),
                    true,
                )
                .ok()
            })
            .unwrap_or_default();
    }

    fn priority(&self) -> u8 {
        priority::ANSWER
    }
}

/// Concede the envido after it was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaySonBuenas {
    pub player_id: PlayerId,
}

impl ActionBehavior for SaySonBuenas {
    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn is_possible(&self, g: &GameState) -> bool {
        g.round.envido.awaits_score_answer()
            && can_answer(g, self.player_id, EnvidoStep::SonBuenas)
            && envido_winner(g) != self.player_id
    }

    fn run(&self, g: &mut GameState) -> Result<(), EngineError> {
        add_step(g, EnvidoStep::SonBuenas, self.player_id)?;
        let winner = opponent_of(self.player_id);
        let points = finished_cost(g, winner)?;
        settle(g, winner, points);
        Ok(())
    }

    fn priority(&self) -> u8 {
        priority::ANSWER
    }
}

/// Claim the envido after it was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaySonMejores {
    pub player_id: PlayerId,
    #[serde(default)]
    pub score: u8,
}

impl SaySonMejores {
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            score: 0,
        }
    }
}

impl ActionBehavior for SaySonMejores {
    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn is_possible(&self, g: &GameState) -> bool {
        g.round.envido.awaits_score_answer()
            && can_answer(g, self.player_id, EnvidoStep::SonMejores)
            && envido_winner(g) == self.player_id
    }

    fn run(&self, g: &mut GameState) -> Result<(), EngineError> {
        add_step(g, EnvidoStep::SonMejores, self.player_id)?;
        let points = finished_cost(g, self.player_id)?;
        settle(g, self.player_id, points);
        Ok(())
    }

    fn enrich(&mut self, g: &GameState) {
        if is_seated(self.player_id) {
            self.score = g.player(self.player_id).hand.envido_score();
        }
    }

    fn priority(&self) -> u8 {
        priority::ANSWER
    }
}

/// Show the cards backing an envido win once the round is over.
///
/// Declared scores are never trusted: `enrich` recomputes them from the hand,
/// so the revealed cards always reproduce the winning score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealEnvidoScore {
    pub player_id: PlayerId,
}

impl ActionBehavior for RevealEnvidoScore {
    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn is_possible(&self, g: &GameState) -> bool {
        g.envido_reveal_owed() == Some(self.player_id)
    }

    fn run(&self, g: &mut GameState) -> Result<(), EngineError> {
        g.player_mut(self.player_id).hand.reveal_envido_cards();
        Ok(())
    }

    fn priority(&self) -> u8 {
        priority::MANDATORY_REVEAL
    }

    fn requires_turn(&self) -> bool {
        false
    }
}
