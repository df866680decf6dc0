use serde::{Deserialize, Serialize};

use super::{priority, ActionBehavior};
use crate::domain::betting::TrucoStep;
use crate::domain::game::GameState;
use crate::domain::rules::{opponent_of, PlayerId};
use crate::error::EngineError;

/// Truco talk waits for envido and flor, and for a pending flor song.
fn truco_open(g: &GameState, player: PlayerId) -> bool {
    let round = &g.round;
    !round.is_finished
        && !round.envido.is_pending()
        && !round.flor.is_pending()
        && !g.must_sing_flor(player)
}

/// Only the holder of the last acceptance, or the responder of a pending
/// raise, may raise.
fn can_raise(g: &GameState, player: PlayerId, step: TrucoStep) -> bool {
    let truco = &g.round.truco;
    truco_open(g, player) && truco.last_raiser() != Some(player) && truco.can_add_step(step)
}

fn can_answer(g: &GameState, player: PlayerId, step: TrucoStep) -> bool {
    truco_open(g, player) && g.round.truco.is_pending() && g.round.truco.can_add_step(step)
}

fn add_step(g: &mut GameState, step: TrucoStep, player: PlayerId) -> Result<(), EngineError> {
    if g.round.truco.add_step(step, player) {
        Ok(())
    } else {
        Err(EngineError::illegal(format!(
            "Cannot add {step:?} to truco '{}'",
            g.round.truco
        )))
    }
}

/// Points `step` would close the truco at, as seen before saying it.
fn preview_cost(g: &GameState, player: PlayerId, step: TrucoStep) -> u8 {
    g.round
        .truco
        .with_step(step, player)
        .and_then(|s| s.cost(g.config.max_points, 0, 0, true).ok())
        .unwrap_or_default()
}

macro_rules! truco_raise {
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

truco_raise!(SayTruco, TrucoStep::Truco);
truco_raise!(SayQuieroRetruco, TrucoStep::QuieroRetruco);
truco_raise!(SayQuieroValeCuatro, TrucoStep::QuieroValeCuatro);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SayTrucoQuiero {
    pub player_id: PlayerId,
    /// Points the round is now played for, filled in by the engine.
    #[serde(default)]
    pub cost: u8,
}

impl SayTrucoQuiero {
    pub fn new(player_id: PlayerId) -> Self {
        Self { player_id, cost: 0 }
    }
}

impl ActionBehavior for SayTrucoQuiero {
    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn is_possible(&self, g: &GameState) -> bool {
        can_answer(g, self.player_id, TrucoStep::Quiero)
    }

    fn run(&self, g: &mut GameState) -> Result<(), EngineError> {
        add_step(g, TrucoStep::Quiero, self.player_id)
    }

    fn enrich(&mut self, g: &GameState) {
        self.cost = preview_cost(g, self.player_id, TrucoStep::Quiero);
    }

    fn priority(&self) -> u8 {
        priority::ANSWER
    }
}

/// Decline a raise: the raiser takes the previous stake and the round ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SayTrucoNoQuiero {
    pub player_id: PlayerId,
    #[serde(default)]
    pub cost: u8,
}

impl SayTrucoNoQuiero {
    pub fn new(player_id: PlayerId) -> Self {
        Self { player_id, cost: 0 }
    }
}

impl ActionBehavior for SayTrucoNoQuiero {
    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn is_possible(&self, g: &GameState) -> bool {
        can_answer(g, self.player_id, TrucoStep::NoQuiero)
    }

    fn run(&self, g: &mut GameState) -> Result<(), EngineError> {
        add_step(g, TrucoStep::NoQuiero, self.player_id)?;
        let points = g.truco_points()?;
        g.settle_truco(opponent_of(self.player_id), points);
        g.finish_round();
        Ok(())
    }

    fn enrich(&mut self, g: &GameState) {
        self.cost = preview_cost(g, self.player_id, TrucoStep::NoQuiero);
    }

    fn priority(&self) -> u8 {
        priority::ANSWER
    }
}
