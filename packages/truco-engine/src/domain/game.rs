//! Game aggregate and the single entry point that applies actions.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::actions::{candidates, Action, ActionBehavior};
use super::betting::{EnvidoSequence, FlorSequence, TrucoSequence};
use super::card_reveal::CardRevealSequence;
use super::dealing::{deal_hands, validate_deal, Deal};
use super::hand::Hand;
use super::rules::{
    is_seated, mano_for_round, opponent_of, PlayerId, PLAYERS, TRUCO_BASE_POINTS,
};
use super::seed_derivation::derive_dealing_seed;
use crate::config::GameConfig;
use crate::error::EngineError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub score: u8,
    pub hand: Hand,
}

/// Points settled in one round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub envido_winner: Option<PlayerId>,
    pub envido_points: u8,
    pub flor_winner: Option<PlayerId>,
    pub flor_points: u8,
    pub truco_winner: Option<PlayerId>,
    pub truco_points: u8,
    /// Player who left the round with "me voy al mazo".
    pub went_to_mazo: Option<PlayerId>,
}

/// Everything that is replaced when a new round is dealt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub envido: EnvidoSequence,
    pub flor: FlorSequence,
    pub truco: TrucoSequence,
    pub card_reveal: CardRevealSequence,
    pub result: RoundResult,
    /// Per-player acknowledgement of a finished round.
    pub confirmed: [bool; PLAYERS],
    pub is_finished: bool,
}

impl RoundState {
    pub fn new(mano: PlayerId) -> Self {
        Self {
            envido: EnvidoSequence::new(),
            flor: FlorSequence::new(),
            truco: TrucoSequence::new(),
            card_reveal: CardRevealSequence::new(mano),
            result: RoundResult::default(),
            confirmed: [false; PLAYERS],
            is_finished: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLogEntry {
    pub player_id: PlayerId,
    pub action: Action,
}

/// Append-only record of one round; `result` is set when the round is sealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundLog {
    pub round_number: u32,
    pub mano: PlayerId,
    pub dealt: Deal,
    pub actions: Vec<ActionLogEntry>,
    pub result: Option<RoundResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub seed: u64,
    /// 1-based.
    pub round_number: u32,
    /// Mano of the current round.
    pub round_turn_player_id: PlayerId,
    pub turn_player_id: PlayerId,
    pub players: [Player; PLAYERS],
    pub round: RoundState,
    pub rounds_log: Vec<RoundLog>,
    pub is_ended: bool,
    pub winner: Option<PlayerId>,
    /// Legal actions per player, enriched and ordered by priority.
    pub possible_actions: [Vec<Action>; PLAYERS],
    /// Recorded deals consumed before falling back to seeded shuffling.
    #[serde(default)]
    pending_deals: VecDeque<Deal>,
}

impl GameState {
    /// Start a game whose every deal is derived from `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, EngineError> {
        Self::build(config, seed, VecDeque::new())
    }

    /// Start a game that plays `deals` in order, one per round, then
    /// continues with deals derived from `seed`.
    pub fn with_deals(config: GameConfig, seed: u64, deals: Vec<Deal>) -> Result<Self, EngineError> {
        for deal in &deals {
            validate_deal(deal)?;
        }
        Self::build(config, seed, deals.into())
    }

    fn build(config: GameConfig, seed: u64, pending_deals: VecDeque<Deal>) -> Result<Self, EngineError> {
        config.validate()?;
        let mano = mano_for_round(1);
        let mut g = Self {
            config,
            seed,
            round_number: 0,
            round_turn_player_id: mano,
            turn_player_id: mano,
            players: [0, 1].map(|id| Player {
                id,
                score: 0,
                hand: Hand::default(),
            }),
            round: RoundState::new(mano),
            rounds_log: Vec::new(),
            is_ended: false,
            winner: None,
            possible_actions: [Vec::new(), Vec::new()],
            pending_deals,
        };
        g.start_round(1)?;
        g.refresh_possible_actions();
        Ok(g)
    }

    fn start_round(&mut self, round_number: u32) -> Result<(), EngineError> {
        let deal = match self.pending_deals.pop_front() {
            Some(deal) => deal,
            None => deal_hands(derive_dealing_seed(self.seed, round_number))?,
        };
        let mano = mano_for_round(round_number);

        for player in &mut self.players {
            player.hand = Hand::new(deal[player.id as usize].clone());
        }
        self.round_number = round_number;
        self.round_turn_player_id = mano;
        self.turn_player_id = mano;
        self.round = RoundState::new(mano);
        self.rounds_log.push(RoundLog {
            round_number,
            mano,
            dealt: deal,
            actions: Vec::new(),
            result: None,
        });

        info!(round = round_number, mano, "Round started");
        Ok(())
    }

    pub fn mano(&self) -> PlayerId {
        self.round_turn_player_id
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id as usize]
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id as usize]
    }

    pub fn score(&self, id: PlayerId) -> u8 {
        self.player(id).score
    }

    /// Player the game is waiting on.
    ///
    /// A pending flor, envido or truco raise is answered by the opponent of
    /// whoever spoke last in it, in that order; otherwise face-off order
    /// decides. Unchanged once the round is over.
    pub fn expected_turn(&self) -> PlayerId {
        let round = &self.round;
        let responder = if round.flor.is_pending() {
            round.flor.last_player()
        } else if round.envido.is_pending() {
            round.envido.last_player()
        } else if round.truco.is_pending() {
            round.truco.last_player()
        } else {
            None
        };
        match responder {
            Some(last) => opponent_of(last),
            None => round
                .card_reveal
                .next_player()
                .unwrap_or(self.turn_player_id),
        }
    }

    /// The player plays flor in this game.
    pub fn plays_flor(&self, player: PlayerId) -> bool {
        self.config.flor_enabled && is_seated(player) && self.player(player).hand.has_flor()
    }

    /// Holds flor that has not been sung yet; blocks every other move but
    /// leaving the round.
    pub fn must_sing_flor(&self, player: PlayerId) -> bool {
        !self.round.is_finished
            && self.plays_flor(player)
            && self.player(player).hand.revealed.is_empty()
            && self.round.flor.is_empty()
    }

    /// Envido winner who still has to show the cards backing an accepted envido.
    pub fn envido_reveal_owed(&self) -> Option<PlayerId> {
        let round = &self.round;
        if !round.is_finished || !round.envido.is_accepted() {
            return None;
        }
        let winner = round.result.envido_winner?;
        let hand = &self.player(winner).hand;
        (hand.revealed_envido_score() < hand.envido_score()).then_some(winner)
    }

    /// Flor winner who still has to show their whole hand.
    pub fn flor_reveal_owed(&self) -> Option<PlayerId> {
        if !self.round.is_finished {
            return None;
        }
        let winner = self.round.result.flor_winner?;
        (!self.player(winner).hand.unrevealed.is_empty()).then_some(winner)
    }

    /// Points the truco is worth right now; an untouched truco is worth 1.
    pub fn truco_points(&self) -> Result<u8, EngineError> {
        if self.round.truco.is_empty() {
            return Ok(TRUCO_BASE_POINTS);
        }
        Ok(self.round.truco.cost(self.config.max_points, 0, 0, false)?)
    }

    pub(crate) fn award(&mut self, player: PlayerId, points: u8) {
        let p = self.player_mut(player);
        p.score = p.score.saturating_add(points);
    }

    pub(crate) fn settle_truco(&mut self, winner: PlayerId, points: u8) {
        self.round.result.truco_winner = Some(winner);
        self.round.result.truco_points = points;
        self.round.truco.mark_awarded();
        self.award(winner, points);
    }

    pub(crate) fn finish_round(&mut self) {
        self.round.is_finished = true;
        info!(
            round = self.round_number,
            truco_winner = ?self.round.result.truco_winner,
            truco_points = self.round.result.truco_points,
            "Round finished"
        );
    }

    /// Whether `action` may be applied now, including turn order.
    pub fn is_action_possible(&self, action: &Action) -> bool {
        let player = action.player_id();
        if self.is_ended || player as usize >= PLAYERS {
            return false;
        }
        if action.requires_turn() && player != self.expected_turn() {
            return false;
        }
        action.is_possible(self)
    }

    pub fn possible_actions_for(&self, player: PlayerId) -> &[Action] {
        self.possible_actions
            .get(player as usize)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Apply one action. On error the state is left exactly as it was.
    pub fn run_action(&mut self, mut action: Action) -> Result<(), EngineError> {
        if self.is_ended {
            warn!(action = action.name(), "Action rejected: game has ended");
            return Err(EngineError::GameEnded);
        }
        let player_id = action.player_id();
        if player_id as usize >= PLAYERS {
            return Err(EngineError::malformed(format!(
                "Unknown player {player_id}"
            )));
        }

        action.enrich(self);
        if !self.is_action_possible(&action) {
            warn!(
                round = self.round_number,
                player_id,
                action = action.name(),
                "Action rejected: not possible"
            );
            return Err(EngineError::illegal(format!(
                "{} by player {player_id} is not possible now",
                action.name()
            )));
        }

        let mut next = self.clone();
        action.run(&mut next)?;
        debug!(
            round = next.round_number,
            player_id,
            action = action.name(),
            "Action applied"
        );
        if let Some(log) = next.rounds_log.last_mut() {
            log.actions.push(ActionLogEntry {
                player_id,
                action: action.clone(),
            });
        }
        next.advance(&action)?;

        *self = next;
        Ok(())
    }

    /// Deserialize a tagged action and apply it.
    pub fn run_serialized_action(&mut self, raw: &str) -> Result<(), EngineError> {
        let action: Action = serde_json::from_str(raw)?;
        self.run_action(action)
    }

    fn advance(&mut self, action: &Action) -> Result<(), EngineError> {
        if self
            .players
            .iter()
            .any(|p| p.score >= self.config.max_points)
        {
            self.end_game();
            return Ok(());
        }

        if self.round.is_finished && self.round.confirmed.iter().all(|c| *c) {
            self.seal_round();
            self.start_round(self.round_number + 1)?;
        } else if action.yields_turn(self) {
            self.turn_player_id = opponent_of(self.turn_player_id);
        }
        self.refresh_possible_actions();
        Ok(())
    }

    fn seal_round(&mut self) {
        if let Some(log) = self.rounds_log.last_mut() {
            log.result = Some(self.round.result.clone());
        }
    }

    fn end_game(&mut self) {
        let [first, second] = [self.players[0].score, self.players[1].score];
        let winner: PlayerId = if first >= second { 0 } else { 1 };
        for player in &mut self.players {
            player.score = player.score.min(self.config.max_points);
        }
        self.round.is_finished = true;
        self.seal_round();
        self.is_ended = true;
        self.winner = Some(winner);
        self.possible_actions = [Vec::new(), Vec::new()];
        info!(
            round = self.round_number,
            winner,
            scores = ?[self.players[0].score, self.players[1].score],
            "Game ended"
        );
    }

    fn refresh_possible_actions(&mut self) {
        let lists = [0, 1].map(|player: PlayerId| {
            let mut legal: Vec<Action> = candidates(player, &self.player(player).hand)
                .into_iter()
                .filter_map(|mut action| {
                    action.enrich(self);
                    self.is_action_possible(&action).then_some(action)
                })
                .collect();
            legal.sort_by(|a, b| b.priority().cmp(&a.priority()));
            legal
        });
        self.possible_actions = lists;
    }
}
