//! Fixed rule constants and small seat helpers for a two-player game.

pub const PLAYERS: usize = 2;
pub const CARDS_PER_HAND: usize = 3;
pub const DECK_SIZE: usize = 40;

/// Face-offs per round and card reveals per round.
pub const FACE_OFFS: usize = 3;
pub const MAX_REVEALS: usize = FACE_OFFS * PLAYERS;

/// Points for a truco nobody escalated.
pub const TRUCO_BASE_POINTS: u8 = 1;
/// Points for a flor the opponent cannot answer.
pub const FLOR_SOLO_POINTS: u8 = 3;
/// Envido point conceded by leaving the round before envido was played.
pub const MAZO_ENVIDO_POINTS: u8 = 1;

pub type PlayerId = u8; // 0..=1

/// True for the two seats of the game.
#[inline]
pub fn is_seated(player: PlayerId) -> bool {
    (player as usize) < PLAYERS
}

#[inline]
pub fn opponent_of(player: PlayerId) -> PlayerId {
    1 - player
}

/// Mano (first to act) for a 1-based round number; player 0 opens the game.
#[inline]
pub fn mano_for_round(round_number: u32) -> PlayerId {
    debug_assert!(round_number >= 1, "round_number is 1-based and must be >= 1");
    ((round_number.saturating_sub(1)) % PLAYERS as u32) as PlayerId
}
