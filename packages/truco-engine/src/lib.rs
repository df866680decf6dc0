#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;

// Re-exports for public API
pub use config::GameConfig;
pub use domain::actions::{Action, ActionBehavior};
pub use domain::game::GameState;
pub use domain::snapshot::ClientGameState;
pub use error::EngineError;
pub use errors::ErrorCode;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
