//! RNG seed derivation for deterministic dealing.
//!
//! Every round's shuffle is seeded from the game seed and the round number,
//! so storing the game seed is enough to replay all deals.

/// Derive a seed for dealing cards in a round.
///
/// Unique per (game, round) combination; `round_number` is 1-based.
pub fn derive_dealing_seed(game_seed: u64, round_number: u32) -> u64 {
    game_seed
        .wrapping_add((round_number as u64).wrapping_mul(1_000_000))
        .wrapping_add(2)
}
