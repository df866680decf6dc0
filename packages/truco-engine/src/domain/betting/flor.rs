//! Flor escalation: flor, contraflor and contraflor al resto.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{BettingSequence, Cost, StepTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlorStep {
    #[serde(rename = "say_flor")]
    Flor,
    #[serde(rename = "say_contraflor")]
    Contraflor,
    #[serde(rename = "say_contraflor_al_resto")]
    ContraflorAlResto,
    #[serde(rename = "say_con_flor_me_achico")]
    ConFlorMeAchico,
    #[serde(rename = "say_con_flor_quiero")]
    ConFlorQuiero,
    #[serde(rename = "say_flor_score")]
    FlorScore,
}

pub type FlorSequence = BettingSequence<FlorStep>;

static TABLE: Lazy<HashMap<Vec<FlorStep>, Cost>> = Lazy::new(|| {
    use FlorStep::*;
    let entries: [(&[FlorStep], Cost); 14] = [
        (&[Flor], Cost::NotReady),
        (&[Flor, ConFlorMeAchico], Cost::Points(4)),
        (&[Flor, Contraflor], Cost::NotReady),
        (&[Flor, Contraflor, ConFlorQuiero], Cost::NotReady),
        (&[Flor, Contraflor, ConFlorQuiero, FlorScore], Cost::Points(6)),
        (&[Flor, Contraflor, ConFlorMeAchico], Cost::Points(4)),
        (&[Flor, ContraflorAlResto], Cost::NotReady),
        (&[Flor, ContraflorAlResto, ConFlorQuiero], Cost::NotReady),
        (&[Flor, ContraflorAlResto, ConFlorQuiero, FlorScore], Cost::Falta),
        (&[Flor, ContraflorAlResto, ConFlorMeAchico], Cost::Points(4)),
        (&[Flor, Contraflor, ContraflorAlResto], Cost::NotReady),
        (&[Flor, Contraflor, ContraflorAlResto, ConFlorQuiero], Cost::NotReady),
        (
            &[Flor, Contraflor, ContraflorAlResto, ConFlorQuiero, FlorScore],
            Cost::Falta,
        ),
        (&[Flor, Contraflor, ContraflorAlResto, ConFlorMeAchico], Cost::Points(6)),
    ];
    entries
        .into_iter()
        .map(|(steps, cost)| (steps.to_vec(), cost))
        .collect()
});

impl StepTable for FlorStep {
    fn name(self) -> &'static str {
        match self {
            FlorStep::Flor => "say_flor",
            FlorStep::Contraflor => "say_contraflor",
            FlorStep::ContraflorAlResto => "say_contraflor_al_resto",
            FlorStep::ConFlorMeAchico => "say_con_flor_me_achico",
            FlorStep::ConFlorQuiero => "say_con_flor_quiero",
            FlorStep::FlorScore => "say_flor_score",
        }
    }

    fn table() -> &'static HashMap<Vec<Self>, Cost> {
        &TABLE
    }

    fn is_terminal(self) -> bool {
        matches!(self, FlorStep::ConFlorMeAchico | FlorStep::FlorScore)
    }
}

impl FlorSequence {
    /// The flor scores were compared (both players had flor and it was accepted).
    pub fn is_compared(&self) -> bool {
        self.last_step() == Some(FlorStep::FlorScore)
    }

    /// Accepted and waiting for the other flor score.
    pub fn awaits_flor_score(&self) -> bool {
        self.last_step() == Some(FlorStep::ConFlorQuiero)
    }
}
