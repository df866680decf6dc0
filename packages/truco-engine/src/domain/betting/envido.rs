//! Envido escalation: envido, real envido and falta envido.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{BettingSequence, Cost, StepTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnvidoStep {
    #[serde(rename = "say_envido")]
    Envido,
    #[serde(rename = "say_real_envido")]
    RealEnvido,
    #[serde(rename = "say_falta_envido")]
    FaltaEnvido,
    #[serde(rename = "say_envido_quiero")]
    Quiero,
    #[serde(rename = "say_envido_no_quiero")]
    NoQuiero,
    #[serde(rename = "say_son_buenas")]
    SonBuenas,
    #[serde(rename = "say_son_mejores")]
    SonMejores,
}

pub type EnvidoSequence = BettingSequence<EnvidoStep>;

impl EnvidoStep {
    pub const RAISES: [EnvidoStep; 3] = [
        EnvidoStep::Envido,
        EnvidoStep::RealEnvido,
        EnvidoStep::FaltaEnvido,
    ];
}

// Raise chain, cost when accepted, cost when declined.
const CHAINS: &[(&[EnvidoStep], Cost, u8)] = {
    use EnvidoStep::*;
    &[
        (&[Envido], Cost::Points(2), 1),
        (&[RealEnvido], Cost::Points(3), 1),
        (&[FaltaEnvido], Cost::Falta, 1),
        (&[Envido, Envido], Cost::Points(4), 2),
        (&[Envido, RealEnvido], Cost::Points(5), 2),
        (&[Envido, FaltaEnvido], Cost::Falta, 2),
        (&[RealEnvido, FaltaEnvido], Cost::Falta, 3),
        (&[Envido, Envido, RealEnvido], Cost::Points(7), 4),
        (&[Envido, Envido, FaltaEnvido], Cost::Falta, 4),
        (&[Envido, RealEnvido, FaltaEnvido], Cost::Falta, 5),
        (&[Envido, Envido, RealEnvido, FaltaEnvido], Cost::Falta, 7),
    ]
};

static TABLE: Lazy<HashMap<Vec<EnvidoStep>, Cost>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for &(chain, accepted, declined) in CHAINS {
        let chain = chain.to_vec();
        let with = |tail: &[EnvidoStep]| {
            let mut key = chain.clone();
            key.extend_from_slice(tail);
            key
        };
        table.insert(chain.clone(), Cost::NotReady);
        table.insert(with(&[EnvidoStep::NoQuiero]), Cost::Points(declined));
        table.insert(with(&[EnvidoStep::Quiero]), accepted);
        table.insert(with(&[EnvidoStep::Quiero, EnvidoStep::SonBuenas]), accepted);
        table.insert(with(&[EnvidoStep::Quiero, EnvidoStep::SonMejores]), accepted);
    }
    table
});

impl StepTable for EnvidoStep {
    fn name(self) -> &'static str {
        match self {
            EnvidoStep::Envido => "say_envido",
            EnvidoStep::RealEnvido => "say_real_envido",
            EnvidoStep::FaltaEnvido => "say_falta_envido",
            EnvidoStep::Quiero => "say_envido_quiero",
            EnvidoStep::NoQuiero => "say_envido_no_quiero",
            EnvidoStep::SonBuenas => "say_son_buenas",
            EnvidoStep::SonMejores => "say_son_mejores",
        }
    }

    fn table() -> &'static HashMap<Vec<Self>, Cost> {
        &TABLE
    }

    fn is_terminal(self) -> bool {
        matches!(
            self,
            EnvidoStep::NoQuiero | EnvidoStep::SonBuenas | EnvidoStep::SonMejores
        )
    }
}

impl EnvidoSequence {
    /// A quiero was said: the score comparison is owed or done.
    pub fn is_accepted(&self) -> bool {
        self.contains(EnvidoStep::Quiero)
    }

    /// Accepted and waiting for son buenas / son mejores.
    pub fn awaits_score_answer(&self) -> bool {
        self.last_step() == Some(EnvidoStep::Quiero)
    }
}
