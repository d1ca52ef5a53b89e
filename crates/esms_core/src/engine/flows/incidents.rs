//! Fouls and injuries. Both are hooks with no outcomes yet: they draw
//! nothing and emit nothing.

use super::FlowContext;
use crate::engine::events::MatchEvent;
use crate::error::Result;

pub fn foul_flow(_ctx: &mut FlowContext<'_>) -> Result<Vec<MatchEvent>> {
    Ok(Vec::new())
}

pub fn injury_flow(_ctx: &mut FlowContext<'_>) -> Result<Vec<MatchEvent>> {
    Ok(Vec::new())
}
