use tracing::debug;

use super::{corner_attacker_weight, corner_passing_weight, shot_flow, FlowContext, Shot};
use crate::engine::events::{EventData, MatchEvent};
use crate::engine::formulas;
use crate::engine::selection::pick_active_player;
use crate::error::Result;

/// Keeper catches, defender clears, or a shot from the corner.
pub fn corner_flow(ctx: &mut FlowContext<'_>) -> Result<Vec<MatchEvent>> {
    let corner_taker = pick_active_player(ctx.rng, ctx.team, corner_passing_weight)?;
    let opp_keeper = ctx.opp_keeper()?;

    let keeping = ctx.player(opp_keeper)?.base.goalkeeping;
    let taker_passing = ctx.player(corner_taker)?.base.passing;
    let catch = formulas::corner_keeper_catch_probability(ctx.config, keeping, taker_passing);
    let cleared = formulas::corner_cleared_probability(
        ctx.config,
        ctx.team.ability.shooting,
        ctx.team.ability.passing,
        ctx.opponent.ability.tackling,
    );

    if ctx.rng.randomp(catch) {
        return Ok(vec![ctx.event(EventData::CornerCaught {
            corner_taker,
            opp_keeper,
        })]);
    }

    if ctx.rng.randomp(cleared) {
        let corner_defender = pick_active_player(ctx.rng, ctx.opponent, corner_passing_weight)?;
        return Ok(vec![ctx.event(EventData::CornerCleared {
            corner_taker,
            corner_defender,
        })]);
    }

    let attacker = pick_active_player(ctx.rng, ctx.team, corner_attacker_weight)?;
    debug!(team = %ctx.team.name, minute = ctx.minute, "shot from corner");
    let mut events = vec![ctx.event(EventData::CornerShot {
        corner_taker,
        attacker,
    })];
    events.extend(shot_flow(ctx, &Shot::from_corner(attacker, corner_taker))?);
    Ok(events)
}
