// Proptest generators for driving whole games through the public API.

use proptest::prelude::*;
use truco_engine::domain::dealing::full_deck;
use truco_engine::domain::Deal;
use truco_engine::GameConfig;

/// Two disjoint three-card hands.
pub fn deal() -> impl Strategy<Value = Deal> {
    Just(full_deck())
        .prop_shuffle()
        .prop_map(|deck| [deck[..3].to_vec(), deck[3..6].to_vec()])
}

/// Short games keep the walk within a few dozen rounds.
pub fn config() -> impl Strategy<Value = GameConfig> {
    (prop_oneof![Just(2u8), Just(5u8), Just(15u8), Just(30u8)], any::<bool>()).prop_map(
        |(max_points, flor_enabled)| GameConfig {
            max_points,
            flor_enabled,
        },
    )
}

/// Choices used to pick among the legal actions at each step.
pub fn choices(len: usize) -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(any::<usize>(), len)
}
