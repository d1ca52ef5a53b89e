//! Weighted random selection.

use super::rng::MatchRng;
use crate::error::{MatchError, Result};
use crate::models::team::{MatchTeam, PlayerRef};
use crate::models::player::MatchPlayer;

/// Picks an index with probability proportional to its weight.
///
/// Draws one threshold in `[0, total)` and returns the first candidate whose
/// running cumulative weight exceeds it. A zero total is an invariant
/// violation.
pub fn select_weighted<T, F>(rng: &mut MatchRng, candidates: &[T], weight: F) -> Result<usize>
where
    F: Fn(&T) -> u64,
{
    let weights: Vec<u64> = candidates.iter().map(&weight).collect();
    let total: u64 = weights.iter().sum();
    if total == 0 {
        return Err(MatchError::invariant(format!(
            "weighted selection over zero total weight ({} candidates)",
            candidates.len()
        )));
    }

    let threshold = rng.random(total);
    let mut cumulative = 0;
    for (idx, w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return Ok(idx);
        }
    }
    Err(MatchError::invariant("weighted selection ran past the last candidate"))
}

/// Weighted pick among a team's active players.
pub fn pick_active_player<F>(rng: &mut MatchRng, team: &MatchTeam, weight: F) -> Result<PlayerRef>
where
    F: Fn(&MatchPlayer) -> u64,
{
    let active: Vec<(usize, &MatchPlayer)> = team.active().collect();
    let picked = select_weighted(rng, &active, |(_, p)| weight(*p)).map_err(|err| match err {
        MatchError::InvariantViolation(msg) => {
            MatchError::InvariantViolation(format!("{} ({} team)", msg, team.name))
        }
        other => other,
    })?;
    Ok(team.player_ref(active[picked].0))
}
