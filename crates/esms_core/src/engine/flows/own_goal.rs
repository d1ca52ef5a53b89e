use tracing::debug;

use super::{own_goal_weight, FlowContext};
use crate::engine::events::{EventData, MatchEvent};
use crate::engine::selection::pick_active_player;
use crate::error::Result;

/// Small fixed chance that an opposing defender turns the ball in.
pub fn own_goal_flow(ctx: &mut FlowContext<'_>) -> Result<Vec<MatchEvent>> {
    if !ctx.rng.randomp(ctx.config.own_goal) {
        return Ok(Vec::new());
    }

    let scorer = pick_active_player(ctx.rng, ctx.opponent, own_goal_weight)?;
    let opp_keeper = ctx.opp_keeper()?;
    debug!(team = %ctx.team.name, minute = ctx.minute, "own goal");

    Ok(vec![ctx.event(EventData::OwnGoalScored { scorer, opp_keeper })])
}
