use serde::{Deserialize, Serialize};

use super::{priority, ActionBehavior};
use crate::domain::betting::FlorStep;
use crate::domain::game::GameState;
use crate::domain::rules::{is_seated, opponent_of, PlayerId, FLOR_SOLO_POINTS};
use crate::error::EngineError;

/// A pending flor that `player` may answer with `step`.
fn can_answer(g: &GameState, player: PlayerId, step: FlorStep) -> bool {
    is_seated(player)
        && !g.round.is_finished
        && g.plays_flor(player)
        && g.round.flor.is_pending()
        && g.round.flor.can_add_step(step)
}

/// Flor winner by flor score; the mano wins ties.
fn flor_winner(g: &GameState) -> PlayerId {
    let mano = g.mano();
    let other = opponent_of(mano);
    let score = |p: PlayerId| g.player(p).hand.flor_score().unwrap_or_default();
    if score(other) > score(mano) {
        other
    } else {
        mano
    }
}

fn settle(g: &mut GameState, winner: PlayerId, points: u8) {
    g.round.result.flor_winner = Some(winner);
    g.round.result.flor_points = points;
    g.round.flor.mark_awarded();
    g.award(winner, points);
}

fn add_step(g: &mut GameState, step: FlorStep, player: PlayerId) -> Result<(), EngineError> {
    if g.round.flor.add_step(step, player) {
        Ok(())
    } else {
        Err(EngineError::illegal(format!(
            "Cannot add {step:?} to flor '{}'",
            g.round.flor
        )))
    }
}

fn settle_finished(g: &mut GameState, winner: PlayerId) -> Result<(), EngineError> {
    let points = g.round.flor.cost(
        g.config.max_points,
        g.score(winner),
        g.score(opponent_of(winner)),
        false,
    )?;
    settle(g, winner, points);
    Ok(())
}

/// Sing flor. Voids a pending envido; scores at once when the opponent
/// holds no flor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SayFlor {
    pub player_id: PlayerId,
}

impl ActionBehavior for SayFlor {
    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn is_possible(&self, g: &GameState) -> bool {
        let round = &g.round;
        g.must_sing_flor(self.player_id)
            && !round.envido.is_resolved()
            && (round.truco.is_empty() || round.truco.is_first_truco_open())
    }

    fn run(&self, g: &mut GameState) -> Result<(), EngineError> {
        add_step(g, FlorStep::Flor, self.player_id)?;
        if g.round.envido.is_pending() {
            g.round.envido.mark_awarded();
        }
        if !g.plays_flor(opponent_of(self.player_id)) {
            settle(g, self.player_id, FLOR_SOLO_POINTS);
        }
        Ok(())
    }

    fn priority(&self) -> u8 {
        priority::FLOR
    }
}

macro_rules! flor_answer {
    ($name:ident, $step:expr, $priority:expr) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            pub player_id: PlayerId,
        }

        impl ActionBehavior for $name {
            fn player_id(&self) -> PlayerId {
                self.player_id
            }

            fn is_possible(&self, g: &GameState) -> bool {
                can_answer(g, self.player_id, $step)
            }

            fn run(&self, g: &mut GameState) -> Result<(), EngineError> {
                add_step(g, $step, self.player_id)
            }

            fn priority(&self) -> u8 {
                $priority
            }
        }
    };
}

flor_answer!(SayContraflor, FlorStep::Contraflor, priority::RAISE);
flor_answer!(
    SayContraflorAlResto,
    FlorStep::ContraflorAlResto,
    priority::RAISE
);

/// Back down from a contested flor; the last raiser scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SayConFlorMeAchico {
    pub player_id: PlayerId,
}

impl ActionBehavior for SayConFlorMeAchico {
    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn is_possible(&self, g: &GameState) -> bool {
        can_answer(g, self.player_id, FlorStep::ConFlorMeAchico)
    }

    fn run(&self, g: &mut GameState) -> Result<(), EngineError> {
        add_step(g, FlorStep::ConFlorMeAchico, self.player_id)?;
        settle_finished(g, opponent_of(self.player_id))
    }

    fn priority(&self) -> u8 {
        priority::ANSWER
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SayConFlorQuiero {
    pub player_id: PlayerId,
    #[serde(default)]
    pub score: u8,
}

impl SayConFlorQuiero {
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            score: 0,
        }
    }
}

impl ActionBehavior for SayConFlorQuiero {
    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn is_possible(&self, g: &GameState) -> bool {
        can_answer(g, self.player_id, FlorStep::ConFlorQuiero)
    }

    fn run(&self, g: &mut GameState) -> Result<(), EngineError> {
        add_step(g, FlorStep::ConFlorQuiero, self.player_id)
    }

    fn enrich(&mut self, g: &GameState) {
        if is_seated(self.player_id) {
            self.score = g
                .player(self.player_id)
                .hand
                .flor_score()
                .unwrap_or_default();
        }
    }

    fn priority(&self) -> u8 {
        priority::ANSWER
    }
}

/// Answer an accepted contraflor with one's own flor score; settles the flor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SayFlorScore {
    pub player_id: PlayerId,
    #[serde(default)]
    pub score: u8,
}

impl SayFlorScore {
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            score: 0,
        }
    }
}

impl ActionBehavior for SayFlorScore {
    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn is_possible(&self, g: &GameState) -> bool {
        g.round.flor.awaits_flor_score() && can_answer(g, self.player_id, FlorStep::FlorScore)
    }

    fn run(&self, g: &mut GameState) -> Result<(), EngineError> {
        add_step(g, FlorStep::FlorScore, self.player_id)?;
        let winner = flor_winner(g);
        settle_finished(g, winner)
    }

    fn enrich(&mut self, g: &GameState) {
        if is_seated(self.player_id) {
            self.score = g
                .player(self.player_id)
                .hand
                .flor_score()
                .unwrap_or_default();
        }
    }

    fn priority(&self) -> u8 {
        priority::ANSWER
    }
}

/// Show the whole hand backing a flor win once the round is over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealFlorScore {
    pub player_id: PlayerId,
}

impl ActionBehavior for RevealFlorScore {
    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn is_possible(&self, g: &GameState) -> bool {
        g.flor_reveal_owed() == Some(self.player_id)
    }

    fn run(&self, g: &mut GameState) -> Result<(), EngineError> {
        g.player_mut(self.player_id).hand.reveal_all();
        Ok(())
    }

    fn priority(&self) -> u8 {
        priority::MANDATORY_REVEAL
    }

    fn requires_turn(&self) -> bool {
        false
    }
}
