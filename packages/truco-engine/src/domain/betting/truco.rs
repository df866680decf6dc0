//! Truco escalation: truco, quiero retruco and quiero vale cuatro.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{BettingSequence, Cost, StepTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrucoStep {
    #[serde(rename = "say_truco")]
    Truco,
    #[serde(rename = "say_quiero_retruco")]
    QuieroRetruco,
    #[serde(rename = "say_quiero_vale_cuatro")]
    QuieroValeCuatro,
    #[serde(rename = "say_truco_quiero")]
    Quiero,
    #[serde(rename = "say_truco_no_quiero")]
    NoQuiero,
}

pub type TrucoSequence = BettingSequence<TrucoStep>;

impl TrucoStep {
    pub const RAISES: [TrucoStep; 3] = [
        TrucoStep::Truco,
        TrucoStep::QuieroRetruco,
        TrucoStep::QuieroValeCuatro,
    ];
}

const ACCEPTED: [u8; 3] = [2, 3, 4];
const DECLINED: [u8; 3] = [1, 2, 3];

/// Insert the raise at `level` after `prefix`, its answers, and every
/// continuation: the next raise either answers the pending one or follows
/// its acceptance.
fn insert_level(table: &mut HashMap<Vec<TrucoStep>, Cost>, prefix: &[TrucoStep], level: usize) {
    let mut raised = prefix.to_vec();
    raised.push(TrucoStep::RAISES[level]);

    let mut accepted = raised.clone();
    accepted.push(TrucoStep::Quiero);
    let mut declined = raised.clone();
    declined.push(TrucoStep::NoQuiero);

    table.insert(raised.clone(), Cost::NotReady);
    table.insert(accepted.clone(), Cost::Points(ACCEPTED[level]));
    table.insert(declined, Cost::Points(DECLINED[level]));

    if level + 1 < TrucoStep::RAISES.len() {
        insert_level(table, &raised, level + 1);
        insert_level(table, &accepted, level + 1);
    }
}

static TABLE: Lazy<HashMap<Vec<TrucoStep>, Cost>> = Lazy::new(|| {
    let mut table = HashMap::new();
    insert_level(&mut table, &[], 0);
    table
});

impl StepTable for TrucoStep {
    fn name(self) -> &'static str {
        match self {
            TrucoStep::Truco => "say_truco",
            TrucoStep::QuieroRetruco => "say_quiero_retruco",
            TrucoStep::QuieroValeCuatro => "say_quiero_vale_cuatro",
            TrucoStep::Quiero => "say_truco_quiero",
            TrucoStep::NoQuiero => "say_truco_no_quiero",
        }
    }

    fn table() -> &'static HashMap<Vec<Self>, Cost> {
        &TABLE
    }

    fn is_terminal(self) -> bool {
        matches!(self, TrucoStep::Quiero | TrucoStep::NoQuiero)
    }
}

impl TrucoSequence {
    /// Exactly `truco` said and either pending or accepted.
    pub fn is_first_truco_open(&self) -> bool {
        matches!(
            self.step_names().as_slice(),
            [TrucoStep::Truco] | [TrucoStep::Truco, TrucoStep::Quiero]
        )
    }
}
