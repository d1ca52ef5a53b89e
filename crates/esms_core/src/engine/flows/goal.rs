use tracing::debug;

use super::{corner_flow, FlowContext, Shot};
use crate::engine::events::{EventData, MatchEvent};
use crate::engine::formulas;
use crate::error::Result;
use crate::models::team::PlayerRef;

/// Resolves an on-target shot. Gates, first match wins:
/// goal (with cancellation roll), one-on-one save, one-on-one cleared,
/// save for a corner, plain save.
///
/// `goal_scored` skips the goal roll when the caller already made it.
pub fn goal_flow(
    ctx: &mut FlowContext<'_>,
    shot: &Shot,
    opp_keeper: PlayerRef,
    goal_scored: Option<bool>,
    one_on_one: bool,
) -> Result<Vec<MatchEvent>> {
    let attacker = shot.attacker;
    let goal = match goal_scored {
        Some(scored) => scored,
        None => {
            let shooting = ctx.player(attacker)?.ability.shooting;
            let keeping = ctx.player(opp_keeper)?.ability.goalkeeping;
            ctx.rng
                .randomp(formulas::goal_probability(ctx.config, shooting, keeping))
        }
    };

    let mut events = Vec::new();
    if goal {
        let goal_cancelled = ctx.rng.randomp(ctx.config.goal_cancelled);
        debug!(team = %ctx.team.name, minute = ctx.minute, goal_cancelled, "goal");
        events.push(ctx.event(EventData::GoalScored {
            scorer: attacker,
            assister: shot.assister,
            opp_keeper,
            one_on_one,
            goal_cancelled,
        }));
        if goal_cancelled {
            events.push(ctx.event(EventData::GoalScoredCancelled { scorer: attacker }));
        }
    } else if one_on_one && ctx.rng.randomp(ctx.config.one_on_one_saved) {
        events.push(ctx.event(EventData::ShotSaved {
            attacker,
            opp_keeper,
            one_on_one: true,
        }));
        if ctx.rng.randomp(ctx.config.corner_from_save) {
            events.extend(corner_flow(ctx)?);
        }
    } else if one_on_one {
        events.push(ctx.event(EventData::ShotCleared {
            attacker,
            opp_keeper,
        }));
    } else if ctx.rng.randomp(ctx.config.corner_from_save) {
        events.push(ctx.event(EventData::ShotSavedCorner {
            attacker,
            opp_keeper,
        }));
        events.extend(corner_flow(ctx)?);
    } else {
        events.push(ctx.event(EventData::ShotSaved {
            attacker,
            opp_keeper,
            one_on_one: false,
        }));
    }
    Ok(events)
}
