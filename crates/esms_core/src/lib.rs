//! # esms_core - Deterministic ESMS-Style Match Engine
//!
//! Minute-by-minute football match simulation in the Electronic Soccer
//! Management Simulator tradition: teamsheets in, a final result and an
//! ordered event log out.
//!
//! ## Features
//! - Fully deterministic (same seed and inputs = same match)
//! - Typed event log with cascading handler dispatch
//! - Configurable probability constants, league rules and bonus table
//! - Post-match ability point overlay

// Handlers and flows take many scalar inputs by design of the formulas
#![allow(clippy::too_many_arguments)]
// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]
#![allow(clippy::new_without_default)]

pub mod engine;
pub mod error;
pub mod models;

#[cfg(test)]
mod test_fixtures;

pub use engine::{
    simulate_match, BonusCalculator, EngineConfig, EventBus, EventData, EventHandler, EventKind,
    MatchEngine, MatchEvent, MatchOptions, MatchOutcome, MatchRng,
};
pub use error::{MatchError, Result, ValidationError};
pub use models::{MatchResult, Referee, TeamConfig, TeamSide};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
