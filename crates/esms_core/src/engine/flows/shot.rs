use tracing::debug;

use super::{corner_flow, goal_flow, FlowContext};
use crate::engine::events::{EventData, MatchEvent};
use crate::engine::formulas;
use crate::error::Result;
use crate::models::team::PlayerRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub attacker: PlayerRef,
    pub assister: Option<PlayerRef>,
    /// Shots from corners never roll one-on-one.
    pub set_piece: bool,
}

impl Shot {
    pub fn open_play(attacker: PlayerRef, assister: Option<PlayerRef>) -> Self {
        Self {
            attacker,
            assister,
            set_piece: false,
        }
    }

    pub fn from_corner(attacker: PlayerRef, corner_taker: PlayerRef) -> Self {
        Self {
            attacker,
            assister: (corner_taker != attacker).then_some(corner_taker),
            set_piece: true,
        }
    }
}

/// On-target and goal are both rolled up front; the goal outcome is handed
/// to [`goal_flow`].
pub fn shot_flow(ctx: &mut FlowContext<'_>, shot: &Shot) -> Result<Vec<MatchEvent>> {
    let opp_keeper = ctx.opp_keeper()?;
    let shooting = ctx.player(shot.attacker)?.ability.shooting;
    let keeping = ctx.player(opp_keeper)?.ability.goalkeeping;

    let on_target = ctx
        .rng
        .randomp(formulas::shot_on_target_probability(ctx.config, shooting));
    let goal_scored = on_target
        && ctx
            .rng
            .randomp(formulas::goal_probability(ctx.config, shooting, keeping));
    let one_on_one = shot.assister.is_some()
        && !shot.set_piece
        && ctx
            .rng
            .randomp(formulas::one_on_one_probability(ctx.config, goal_scored));

    let attacker = shot.attacker;
    let mut events = Vec::new();
    if on_target {
        debug!(team = %ctx.team.name, minute = ctx.minute, goal_scored, one_on_one, "shot on target");
        events.push(ctx.event(EventData::ShotOnTarget {
            attacker,
            assister: shot.assister,
            opp_keeper,
            one_on_one,
        }));
        events.extend(goal_flow(ctx, shot, opp_keeper, Some(goal_scored), one_on_one)?);
    } else if !one_on_one && ctx.rng.randomp(ctx.config.shot_off_target_deflection) {
        debug!(team = %ctx.team.name, minute = ctx.minute, "deflected for a corner");
        events.push(ctx.event(EventData::ShotOffTargetDeflection { attacker }));
        events.extend(corner_flow(ctx)?);
    } else {
        events.push(ctx.event(EventData::ShotOffTarget {
            attacker,
            one_on_one,
        }));
    }
    Ok(events)
}
