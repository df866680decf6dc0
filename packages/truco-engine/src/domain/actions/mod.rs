//! Player actions and their legality/effect rules.
//!
//! Every action is a small struct implementing [`ActionBehavior`]; the closed
//! [`Action`] enum is the wire format, tagged by `name`.

mod envido;
mod flor;
mod round;
mod truco;

use serde::{Deserialize, Serialize};

pub use envido::{
    RevealEnvidoScore, SayEnvido, SayEnvidoNoQuiero, SayEnvidoQuiero, SayFaltaEnvido,
    SayRealEnvido, SaySonBuenas, SaySonMejores,
};
pub use flor::{
    RevealFlorScore, SayConFlorMeAchico, SayConFlorQuiero, SayContraflor, SayContraflorAlResto,
    SayFlor, SayFlorScore,
};
pub use round::{ConfirmRoundFinished, RevealCard, SayMeVoyAlMazo};
pub use truco::{
    SayQuieroRetruco, SayQuieroValeCuatro, SayTruco, SayTrucoNoQuiero, SayTrucoQuiero,
};

use crate::domain::game::GameState;
use crate::domain::hand::Hand;
use crate::domain::rules::PlayerId;
use crate::error::EngineError;

/// Ordering of simultaneously legal actions; higher comes first.
pub mod priority {
    pub const MANDATORY_REVEAL: u8 = 100;
    pub const CONFIRM: u8 = 90;
    pub const FLOR: u8 = 80;
    pub const ANSWER: u8 = 70;
    pub const RAISE: u8 = 50;
    pub const REVEAL_CARD: u8 = 30;
    pub const MAZO: u8 = 10;
}

/// Capability shared by every action.
pub trait ActionBehavior {
    fn player_id(&self) -> PlayerId;

    /// Rule-level legality. Turn order and game end are checked by the caller.
    fn is_possible(&self, g: &GameState) -> bool;

    /// Apply the effect. Only called after `is_possible` returned true.
    fn run(&self, g: &mut GameState) -> Result<(), EngineError>;

    /// Overwrite client-supplied derived fields (scores, costs) with the
    /// values computed from `g`.
    fn enrich(&mut self, _g: &GameState) {}

    fn priority(&self) -> u8;

    /// Whether only the player expected to act may submit this action.
    fn requires_turn(&self) -> bool {
        true
    }

    /// Evaluated after `run`: the actor is no longer the one expected to act.
    fn yields_turn(&self, g: &GameState) -> bool {
        g.expected_turn() != g.turn_player_id
    }
}

macro_rules! actions {
    ($($variant:ident => $name:literal),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(tag = "name", rename_all = "snake_case")]
        pub enum Action {
            $($variant($variant),)*
        }

        impl Action {
            /// Wire name of the action.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Action::$variant(_) => $name,)*
                }
            }

            fn behavior(&self) -> &dyn ActionBehavior {
                match self {
                    $(Action::$variant(a) => a,)*
                }
            }

            fn behavior_mut(&mut self) -> &mut dyn ActionBehavior {
                match self {
                    $(Action::$variant(a) => a,)*
                }
            }
        }

        $(
            impl From<$variant> for Action {
                fn from(a: $variant) -> Self {
                    Action::$variant(a)
                }
            }
        )*
    };
}

actions! {
    SayEnvido => "say_envido",
    SayRealEnvido => "say_real_envido",
    SayFaltaEnvido => "say_falta_envido",
    SayEnvidoQuiero => "say_envido_quiero",
    SayEnvidoNoQuiero => "say_envido_no_quiero",
    SaySonBuenas => "say_son_buenas",
    SaySonMejores => "say_son_mejores",
    RevealEnvidoScore => "reveal_envido_score",
    SayFlor => "say_flor",
    SayContraflor => "say_contraflor",
    SayContraflorAlResto => "say_contraflor_al_resto",
    SayConFlorMeAchico => "say_con_flor_me_achico",
    SayConFlorQuiero => "say_con_flor_quiero",
    SayFlorScore => "say_flor_score",
    RevealFlorScore => "reveal_flor_score",
    SayTruco => "say_truco",
    SayQuieroRetruco => "say_quiero_retruco",
    SayQuieroValeCuatro => "say_quiero_vale_cuatro",
    SayTrucoQuiero => "say_truco_quiero",
    SayTrucoNoQuiero => "say_truco_no_quiero",
    RevealCard => "reveal_card",
    SayMeVoyAlMazo => "say_me_voy_al_mazo",
    ConfirmRoundFinished => "confirm_round_finished",
}

impl ActionBehavior for Action {
    fn player_id(&self) -> PlayerId {
        self.behavior().player_id()
    }

    fn is_possible(&self, g: &GameState) -> bool {
        self.behavior().is_possible(g)
    }

    fn run(&self, g: &mut GameState) -> Result<(), EngineError> {
        self.behavior().run(g)
    }

    fn enrich(&mut self, g: &GameState) {
        self.behavior_mut().enrich(g)
    }

    fn priority(&self) -> u8 {
        self.behavior().priority()
    }

    fn requires_turn(&self) -> bool {
        self.behavior().requires_turn()
    }

    fn yields_turn(&self, g: &GameState) -> bool {
        self.behavior().yields_turn(g)
    }
}

/// Every action `player_id` could conceivably submit holding `hand`,
/// with derived fields left at their defaults.
pub fn candidates(player_id: PlayerId, hand: &Hand) -> Vec<Action> {
    let mut all: Vec<Action> = vec![
        SayEnvido { player_id }.into(),
        SayRealEnvido { player_id }.into(),
        SayFaltaEnvido { player_id }.into(),
        SayEnvidoQuiero::new(player_id).into(),
        SayEnvidoNoQuiero::new(player_id).into(),
        SaySonBuenas { player_id }.into(),
        SaySonMejores::new(player_id).into(),
        RevealEnvidoScore { player_id }.into(),
        SayFlor { player_id }.into(),
        SayContraflor { player_id }.into(),
        SayContraflorAlResto { player_id }.into(),
        SayConFlorMeAchico { player_id }.into(),
        SayConFlorQuiero::new(player_id).into(),
        SayFlorScore::new(player_id).into(),
        RevealFlorScore { player_id }.into(),
        SayTruco { player_id }.into(),
        SayQuieroRetruco { player_id }.into(),
        SayQuieroValeCuatro { player_id }.into(),
        SayTrucoQuiero::new(player_id).into(),
        SayTrucoNoQuiero::new(player_id).into(),
        SayMeVoyAlMazo { player_id }.into(),
        ConfirmRoundFinished { player_id }.into(),
    ];
    all.extend(
        hand.unrevealed
            .iter()
            .map(|&card| Action::from(RevealCard { player_id, card })),
    );
    all
}
