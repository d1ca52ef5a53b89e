use tracing::debug;

use crate::engine::event_bus::EventHandler;
use crate::engine::events::{EventData, MatchEvent};
use crate::engine::match_state::MatchState;
use crate::error::{MatchError, Result};
use crate::models::team::{Goal, PlayerRef, TeamSide};

/// Applies flow events to player and team counters.
#[derive(Debug, Default, Clone)]
pub struct MatchStatsRecorder;

impl MatchStatsRecorder {
    pub fn new() -> Self {
        Self
    }

    fn record_goal(
        state: &mut MatchState,
        side: TeamSide,
        scorer: PlayerRef,
        minute: u32,
        own_goal: bool,
    ) -> Result<()> {
        let scorer_name = state.player(scorer)?.name.clone();
        state.team_mut(side).stats.goals.push(Goal {
            scorer,
            scorer_name,
            minute,
            own_goal,
        });
        Ok(())
    }
}

fn active_side(event: &MatchEvent) -> Result<TeamSide> {
    event.side.ok_or_else(|| {
        MatchError::invariant(format!("{} event without an active team", event.name()))
    })
}

impl EventHandler for MatchStatsRecorder {
    fn name(&self) -> &str {
        "match_stats"
    }

    fn handle(&mut self, event: &MatchEvent, state: &mut MatchState) -> Result<Vec<MatchEvent>> {
        let minute = event.minute;
        match &event.data {
            EventData::AssistedChance { assister, .. }
            | EventData::AssistedChanceBeatsDefender { assister, .. } => {
                let side = active_side(event)?;
                state.player_mut(*assister)?.stats.key_passes += 1;
                state.team_mut(side).stats.passes += 1;
            }
            EventData::ShotTackled { tackler, .. }
            | EventData::ShotTackledCorner { tackler, .. }
            | EventData::ShotTackledRecovery { tackler, .. } => {
                state.player_mut(*tackler)?.stats.key_tackles += 1;
                state.team_mut(tackler.side).stats.tackles += 1;
            }
            EventData::ShotOnTarget { attacker, .. } => {
                let side = active_side(event)?;
                state.player_mut(*attacker)?.stats.shots_on_target += 1;
                state.team_mut(side).stats.shots_on_target += 1;
            }
            EventData::ShotOffTarget { attacker, .. }
            | EventData::ShotOffTargetDeflection { attacker } => {
                let side = active_side(event)?;
                state.player_mut(*attacker)?.stats.shots_off_target += 1;
                state.team_mut(side).stats.shots_off_target += 1;
            }
            EventData::ShotSaved { opp_keeper, .. }
            | EventData::ShotSavedCorner { opp_keeper, .. }
            | EventData::ShotCleared { opp_keeper, .. } => {
                state.player_mut(*opp_keeper)?.stats.saves += 1;
            }
            EventData::GoalScored {
                scorer,
                assister,
                opp_keeper,
                goal_cancelled,
                ..
            } => {
                if *goal_cancelled {
                    debug!(minute, "goal cancelled, stats unchanged");
                    return Ok(Vec::new());
                }
                let side = active_side(event)?;
                Self::record_goal(state, side, *scorer, minute, false)?;
                state.player_mut(*scorer)?.stats.goals.push(minute);
                state.player_mut(*opp_keeper)?.stats.conceded += 1;
                if let Some(assister) = assister {
                    state.player_mut(*assister)?.stats.assists += 1;
                }
            }
            EventData::OwnGoalScored { scorer, opp_keeper } => {
                let side = active_side(event)?;
                Self::record_goal(state, side, *scorer, minute, true)?;
                state.player_mut(*scorer)?.stats.own_goals.push(minute);
                state.player_mut(*opp_keeper)?.stats.conceded += 1;
            }
            _ => {}
        }
        Ok(Vec::new())
    }
}
