//! Engine test support utilities
//!
//! Shared helpers for unit and integration tests of the truco engine.

pub mod logging;
