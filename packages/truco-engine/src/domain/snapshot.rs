//! Per-player projection of the game, safe to hand to that player's client.

use serde::{Deserialize, Serialize};

use crate::domain::actions::Action;
use crate::domain::betting::{EnvidoSequence, FlorSequence, TrucoSequence};
use crate::domain::card_reveal::CardRevealSequence;
use crate::domain::cards_types::Card;
use crate::domain::game::{ActionLogEntry, GameState, RoundResult};
use crate::domain::rules::{opponent_of, PlayerId};
use crate::error::EngineError;

/// Public info about one player; `unrevealed` is empty for the opponent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub id: PlayerId,
    pub score: u8,
    pub revealed: Vec<Card>,
    pub unrevealed: Vec<Card>,
    pub unrevealed_count: usize,
}

/// Round history without the dealt hands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundLogPublic {
    pub round_number: u32,
    pub mano: PlayerId,
    pub actions: Vec<ActionLogEntry>,
    pub result: Option<RoundResult>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientGameState {
    pub viewer_id: PlayerId,
    pub max_points: u8,
    pub flor_enabled: bool,
    pub round_number: u32,
    pub round_turn_player_id: PlayerId,
    pub turn_player_id: PlayerId,
    pub you: PlayerPublic,
    pub them: PlayerPublic,
    pub envido: EnvidoSequence,
    pub flor: FlorSequence,
    pub truco: TrucoSequence,
    pub card_reveal: CardRevealSequence,
    pub round_result: RoundResult,
    pub is_round_finished: bool,
    pub is_ended: bool,
    pub winner: Option<PlayerId>,
    /// The viewer's legal actions, highest priority first.
    pub possible_actions: Vec<Action>,
    pub rounds_log: Vec<RoundLogPublic>,
}

impl GameState {
    /// Project the state for `viewer`, hiding the opponent's unrevealed cards.
    pub fn client_view(&self, viewer: PlayerId) -> Result<ClientGameState, EngineError> {
        if viewer > 1 {
            return Err(EngineError::malformed(format!("Unknown player {viewer}")));
        }
        let public = |id: PlayerId, show_hand: bool| {
            let p = self.player(id);
            PlayerPublic {
                id,
                score: p.score,
                revealed: p.hand.revealed.clone(),
                unrevealed: if show_hand {
                    p.hand.unrevealed.clone()
                } else {
                    Vec::new()
                },
                unrevealed_count: p.hand.unrevealed.len(),
            }
        };

        Ok(ClientGameState {
            viewer_id: viewer,
            max_points: self.config.max_points,
            flor_enabled: self.config.flor_enabled,
            round_number: self.round_number,
            round_turn_player_id: self.round_turn_player_id,
            turn_player_id: self.turn_player_id,
            you: public(viewer, true),
            them: public(opponent_of(viewer), false),
            envido: self.round.envido.clone(),
            flor: self.round.flor.clone(),
            truco: self.round.truco.clone(),
            card_reveal: self.round.card_reveal.clone(),
            round_result: self.round.result.clone(),
            is_round_finished: self.round.is_finished,
            is_ended: self.is_ended,
            winner: self.winner,
            possible_actions: self.possible_actions_for(viewer).to_vec(),
            rounds_log: self
                .rounds_log
                .iter()
                .map(|log| RoundLogPublic {
                    round_number: log.round_number,
                    mano: log.mano,
                    actions: log.actions.clone(),
                    result: log.result.clone(),
                })
                .collect(),
        })
    }
}
