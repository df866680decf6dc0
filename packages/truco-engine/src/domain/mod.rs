//! Domain layer: pure game logic types and helpers.

pub mod actions;
pub mod betting;
pub mod card_reveal;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod fixtures;
pub mod game;
pub mod hand;
pub mod rules;
pub mod seed_derivation;
pub mod snapshot;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_actions_envido;
#[cfg(test)]
mod tests_actions_flor;
#[cfg(test)]
mod tests_card_reveal;
#[cfg(test)]
mod tests_props_betting;

// Re-exports for ergonomics
pub use actions::{Action, ActionBehavior};
pub use betting::{BettingSequence, Cost, EnvidoStep, FlorStep, StepTable, TrucoStep};
pub use card_reveal::{CardRevealSequence, FaceOffResult};
pub use cards_logic::{compare_truco_score, envido_score, flor_score, has_flor, truco_rank};
pub use cards_types::{Card, Suit};
pub use dealing::{deal_hands, Deal};
pub use game::{GameState, Player, RoundLog, RoundResult};
pub use hand::Hand;
pub use rules::{opponent_of, PlayerId};
pub use seed_derivation::derive_dealing_seed;
pub use snapshot::ClientGameState;
