use tracing::debug;

use super::{corner_flow, FlowContext};
use crate::engine::events::{EventData, MatchEvent};
use crate::engine::formulas;
use crate::error::Result;
use crate::models::team::PlayerRef;

/// Who is involved in an open-play chance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attack {
    pub attacker: PlayerRef,
    pub assister: Option<PlayerRef>,
    /// Defender the attacker got past, if any.
    pub got_past: Option<PlayerRef>,
    /// Pre-selected defending tackler.
    pub tackler: PlayerRef,
}

/// Empty when the chance survives the tackle.
///
/// A tackle goes out for a corner, or is a clean tackle, or is a recovery by
/// the same defender the attacker had beaten.
pub fn shot_tackle_flow(
    ctx: &mut FlowContext<'_>,
    attack: &Attack,
    corner_factor: u32,
) -> Result<Vec<MatchEvent>> {
    let prob = formulas::shot_tackled_probability(
        ctx.config,
        ctx.team.ability.shooting,
        ctx.team.ability.passing,
        ctx.opponent.ability.tackling,
    );
    if !ctx.rng.randomp(prob) {
        return Ok(Vec::new());
    }

    let attacker = attack.attacker;
    let tackler = attack.tackler;
    let corner = ctx.config.shot_tackled_corner.saturating_mul(corner_factor);

    if ctx.rng.randomp(corner) {
        debug!(team = %ctx.team.name, minute = ctx.minute, "tackled for a corner");
        let mut events = vec![ctx.event(EventData::ShotTackledCorner { attacker, tackler })];
        events.extend(corner_flow(ctx)?);
        Ok(events)
    } else if attack.got_past != Some(tackler) {
        Ok(vec![ctx.event(EventData::ShotTackled { attacker, tackler })])
    } else {
        Ok(vec![ctx.event(EventData::ShotTackledRecovery { attacker, tackler })])
    }
}
