use thiserror::Error;

use crate::models::player::Position;

/// Pre-match lineup, formation or tactic problems.
///
/// Any of these rejects the whole match before the first minute is played.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{team}: invalid starting lineup size: expected {expected}, found {found}")]
    InvalidLineupSize {
        team: String,
        expected: usize,
        found: usize,
    },
    #[error("{team}: first player in the starting lineup must be a GK, found {found}")]
    FirstPlayerNotGoalkeeper { team: String, found: Position },
    #[error("{team}: only one GK is allowed in the starting lineup, {player} is also a GK")]
    ExtraGoalkeeper { team: String, player: String },
    #[error("{team}: {player} is injured and cannot start")]
    PlayerInjured { team: String, player: String },
    #[error("{team}: {player} is suspended and cannot start")]
    PlayerSuspended { team: String, player: String },
    #[error("{team}: {found} substitutes named, expected between {min} and {max}")]
    InvalidSubsCount {
        team: String,
        found: usize,
        min: usize,
        max: usize,
    },
    #[error("{team}: {found} {position} players in the starting lineup, expected between {min} and {max}")]
    PositionOutOfBounds {
        team: String,
        position: Position,
        found: usize,
        min: usize,
        max: usize,
    },
    #[error("{team}: {found} midfielders (DM+MF+AM) in the starting lineup, expected between {min} and {max}")]
    MidfieldOutOfBounds {
        team: String,
        found: usize,
        min: usize,
        max: usize,
    },
    #[error("{team}: unrecognised tactic {tactic:?}")]
    InvalidTactic { team: String, tactic: String },
    #[error("{team}: {player} is not on the roster")]
    UnknownPlayer { team: String, player: String },
    #[error("{team}: {player} is named more than once on the teamsheet")]
    DuplicatePlayer { team: String, player: String },
}

/// Errors surfaced by the match engine.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A programming-contract failure. The match is aborted.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("commentary error: {0}")]
    Commentary(String),

    #[error("handler {handler} failed: {message}")]
    Handler { handler: String, message: String },

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl MatchError {
    pub fn invariant(msg: impl Into<String>) -> Self {
        MatchError::InvariantViolation(msg.into())
    }

    /// Fatal errors abort the match. Everything else is logged and skipped.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            MatchError::InvariantViolation(_) | MatchError::Validation(_)
        )
    }
}

impl From<serde_json::Error> for MatchError {
    fn from(err: serde_json::Error) -> Self {
        MatchError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for MatchError {
    fn from(err: serde_yaml::Error) -> Self {
        MatchError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
