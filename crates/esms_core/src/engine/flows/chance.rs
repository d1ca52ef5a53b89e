use tracing::debug;

use super::{
    assister_weight, attacker_weight, defender_weight, own_goal_flow, shot_flow, shot_tackle_flow,
    Attack, FlowContext, Shot,
};
use crate::engine::events::{EventData, MatchEvent};
use crate::engine::selection::pick_active_player;
use crate::error::Result;

/// Gate on the team's shot probability, then build up the chance.
///
/// Draw order: chance gate, own goal, attacker, assist gate, assister,
/// beats-defender gate, beaten defender, tackler.
pub fn chance_flow(ctx: &mut FlowContext<'_>) -> Result<Vec<MatchEvent>> {
    if !ctx.rng.randomp(ctx.team.shot_probability) {
        return Ok(Vec::new());
    }
    debug!(team = %ctx.team.name, minute = ctx.minute, "chance");

    let own_goal = own_goal_flow(ctx)?;
    if !own_goal.is_empty() {
        return Ok(own_goal);
    }

    let attacker = pick_active_player(ctx.rng, ctx.team, attacker_weight)?;

    let assister = if ctx.rng.randomp(ctx.config.assisted) {
        let picked = pick_active_player(ctx.rng, ctx.team, assister_weight)?;
        (picked != attacker).then_some(picked)
    } else {
        None
    };

    let beats_defender = if assister.is_some() {
        ctx.config.assisted_beats_defender
    } else {
        ctx.config.beats_defender
    };
    let got_past = if ctx.rng.randomp(beats_defender) {
        Some(pick_active_player(ctx.rng, ctx.opponent, defender_weight)?)
    } else {
        None
    };

    let opening = match (assister, got_past) {
        (Some(assister), Some(got_past_defender)) => EventData::AssistedChanceBeatsDefender {
            attacker,
            assister,
            got_past_defender,
        },
        (Some(assister), None) => EventData::AssistedChance { attacker, assister },
        (None, Some(got_past_defender)) => EventData::ChanceBeatsDefender {
            attacker,
            got_past_defender,
        },
        (None, None) => EventData::Chance { attacker },
    };
    let mut events = vec![ctx.event(opening)];

    let tackler = pick_active_player(ctx.rng, ctx.opponent, defender_weight)?;
    let attack = Attack {
        attacker,
        assister,
        got_past,
        tackler,
    };

    let corner_factor = ctx.config.corner_factor;
    let tackled = shot_tackle_flow(ctx, &attack, corner_factor)?;
    if tackled.is_empty() {
        events.extend(shot_flow(ctx, &Shot::open_play(attacker, assister))?);
    } else {
        events.extend(tackled);
    }
    Ok(events)
}
