use serde::{Deserialize, Serialize};

use super::{priority, ActionBehavior};
use crate::domain::betting::TrucoStep;
use crate::domain::cards_types::Card;
use crate::domain::game::GameState;
use crate::domain::rules::{is_seated, opponent_of, PlayerId, MAZO_ENVIDO_POINTS, PLAYERS};
use crate::error::EngineError;

/// Play a card into the current face-off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealCard {
    pub player_id: PlayerId,
    pub card: Card,
}

impl ActionBehavior for RevealCard {
    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn is_possible(&self, g: &GameState) -> bool {
        let round = &g.round;
        !round.is_finished
            && !round.envido.is_pending()
            && !round.flor.is_pending()
            && !round.truco.is_pending()
            && !g.must_sing_flor(self.player_id)
            && round.card_reveal.next_player() == Some(self.player_id)
            && g.player(self.player_id).hand.has_unrevealed(self.card)
    }

    fn run(&self, g: &mut GameState) -> Result<(), EngineError> {
        g.player_mut(self.player_id).hand.reveal(self.card)?;
        if !g.round.card_reveal.add_step(self.card, self.player_id) {
            return Err(EngineError::illegal(format!(
                "Player {} cannot reveal now",
                self.player_id
            )));
        }
        if let Some(winner) = g.round.card_reveal.winner() {
            let points = g.truco_points()?;
            g.settle_truco(winner, points);
            g.finish_round();
        }
        Ok(())
    }

    fn priority(&self) -> u8 {
        priority::REVEAL_CARD
    }
}

/// Leave the round. The opponent takes the truco, plus one envido point
/// when envido was never played and the first face-off is still open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SayMeVoyAlMazo {
    pub player_id: PlayerId,
}

impl ActionBehavior for SayMeVoyAlMazo {
    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    /// Blocked while an envido or flor outcome is still owed, including an
    /// unsung flor on either side.
    fn is_possible(&self, g: &GameState) -> bool {
        let round = &g.round;
        is_seated(self.player_id)
            && !round.is_finished
            && !round.envido.is_pending()
            && !round.flor.is_pending()
            && !g.must_sing_flor(0)
            && !g.must_sing_flor(1)
    }

    fn run(&self, g: &mut GameState) -> Result<(), EngineError> {
        let winner = opponent_of(self.player_id);
        if g.round.truco.is_pending() && !g.round.truco.add_step(TrucoStep::NoQuiero, self.player_id)
        {
            return Err(EngineError::illegal("Pending truco cannot be declined"));
        }
        let points = g.truco_points()?;

        let envido_untouched = g.round.envido.is_empty()
            && g.round.flor.is_empty()
            && !g.plays_flor(0)
            && !g.plays_flor(1);
        if envido_untouched && g.round.card_reveal.len() < PLAYERS {
            g.round.result.envido_winner = Some(winner);
            g.round.result.envido_points = MAZO_ENVIDO_POINTS;
            g.round.envido.mark_awarded();
            g.award(winner, MAZO_ENVIDO_POINTS);
        }

        g.round.result.went_to_mazo = Some(self.player_id);
        g.settle_truco(winner, points);
        g.finish_round();
        Ok(())
    }

    fn priority(&self) -> u8 {
        priority::MAZO
    }
}

/// Acknowledge a finished round; the second acknowledgement deals the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmRoundFinished {
    pub player_id: PlayerId,
}

impl ActionBehavior for ConfirmRoundFinished {
    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn is_possible(&self, g: &GameState) -> bool {
        g.round.is_finished
            && g.round.confirmed.get(self.player_id as usize) == Some(&false)
            && g.envido_reveal_owed().is_none()
            && g.flor_reveal_owed().is_none()
    }

    fn run(&self, g: &mut GameState) -> Result<(), EngineError> {
        g.round.confirmed[self.player_id as usize] = true;
        Ok(())
    }

    fn priority(&self) -> u8 {
        priority::CONFIRM
    }

    fn requires_turn(&self) -> bool {
        false
    }
}
