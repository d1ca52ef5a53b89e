use thiserror::Error;
use tracing::warn;

use crate::engine::event_bus::EventHandler;
use crate::engine::events::MatchEvent;
use crate::engine::match_state::MatchState;
use crate::error::{MatchError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct CommentaryError(pub String);

impl From<CommentaryError> for MatchError {
    fn from(err: CommentaryError) -> Self {
        MatchError::Commentary(err.0)
    }
}

/// Receives every published event, after the stats have been applied.
///
/// Text generation belongs to the implementor. Failures are logged and never
/// affect the simulation.
pub trait CommentaryProvider: Send {
    fn write_commentary(
        &mut self,
        event: &MatchEvent,
        state: &MatchState,
    ) -> std::result::Result<(), CommentaryError>;
}

/// Bus adapter for a [`CommentaryProvider`].
pub struct CommentaryHandler {
    provider: Box<dyn CommentaryProvider>,
}

impl CommentaryHandler {
    pub fn new(provider: Box<dyn CommentaryProvider>) -> Self {
        Self { provider }
    }
}

impl EventHandler for CommentaryHandler {
    fn name(&self) -> &str {
        "commentary"
    }

    fn handle(&mut self, event: &MatchEvent, state: &mut MatchState) -> Result<Vec<MatchEvent>> {
        if let Err(err) = self.provider.write_commentary(event, state) {
            let err = MatchError::from(err);
            warn!(event = event.name(), minute = event.minute, "{}", err);
        }
        Ok(Vec::new())
    }
}
