//! Probabilistic decision tree run for each team every minute.
//!
//! A flow reads both teams, draws from the match RNG and returns the events
//! it produced, in order. Flows never touch match state; the stat effects are
//! applied by the handlers when the events are published.

mod chance;
mod corner;
mod goal;
mod incidents;
mod own_goal;
mod shot;
mod shot_tackle;

pub use chance::chance_flow;
pub use corner::corner_flow;
pub use goal::goal_flow;
pub use incidents::{foul_flow, injury_flow};
pub use own_goal::own_goal_flow;
pub use shot::{shot_flow, Shot};
pub use shot_tackle::{shot_tackle_flow, Attack};

use std::fmt;

use super::config::FlowConfig;
use super::events::{EventData, MatchEvent};
use super::rng::MatchRng;
use crate::error::{MatchError, Result};
use crate::models::player::MatchPlayer;
use crate::models::team::{MatchTeam, PlayerRef};

/// Inputs shared by every flow in one team-minute.
pub struct FlowContext<'a> {
    pub team: &'a MatchTeam,
    pub opponent: &'a MatchTeam,
    pub rng: &'a mut MatchRng,
    pub config: &'a FlowConfig,
    pub minute: u32,
}

impl<'a> FlowContext<'a> {
    pub fn new(
        team: &'a MatchTeam,
        opponent: &'a MatchTeam,
        rng: &'a mut MatchRng,
        config: &'a FlowConfig,
        minute: u32,
    ) -> Self {
        Self {
            team,
            opponent,
            rng,
            config,
            minute,
        }
    }

    /// Event on behalf of the team in possession.
    pub fn event(&self, data: EventData) -> MatchEvent {
        MatchEvent::team(self.minute, self.team.side, data)
    }

    pub fn player(&self, player: PlayerRef) -> Result<&'a MatchPlayer> {
        let team = if player.side == self.team.side {
            self.team
        } else {
            self.opponent
        };
        team.player(player.index).ok_or_else(|| {
            MatchError::invariant(format!("no player at index {} on {}", player.index, team.name))
        })
    }

    pub fn opp_keeper(&self) -> Result<PlayerRef> {
        self.opponent.goalkeeper().ok_or_else(|| {
            MatchError::invariant(format!(
                "no active goalkeeper found for {}",
                self.opponent.name
            ))
        })
    }
}

/// Flows run once per team per minute, in shuffled order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopLevelFlow {
    Chance,
    Foul,
    Injury,
}

impl TopLevelFlow {
    pub const ALL: [TopLevelFlow; 3] = [TopLevelFlow::Chance, TopLevelFlow::Foul, TopLevelFlow::Injury];

    pub fn run(self, ctx: &mut FlowContext<'_>) -> Result<Vec<MatchEvent>> {
        match self {
            TopLevelFlow::Chance => chance_flow(ctx),
            TopLevelFlow::Foul => foul_flow(ctx),
            TopLevelFlow::Injury => injury_flow(ctx),
        }
    }
}

impl fmt::Display for TopLevelFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopLevelFlow::Chance => f.write_str("chance"),
            TopLevelFlow::Foul => f.write_str("foul"),
            TopLevelFlow::Injury => f.write_str("injury"),
        }
    }
}

// ============================================================================
// Selection weights
// ============================================================================

pub(crate) fn attacker_weight(p: &MatchPlayer) -> u64 {
    u64::from(p.ability.shooting) * 25 + u64::from(p.base.shooting) * 10
}

pub(crate) fn assister_weight(p: &MatchPlayer) -> u64 {
    u64::from(p.ability.passing) * 240 + u64::from(p.base.passing) * 100
}

pub(crate) fn defender_weight(p: &MatchPlayer) -> u64 {
    u64::from(p.ability.tackling) * 25 + u64::from(p.base.tackling) * 10
}

pub(crate) fn own_goal_weight(p: &MatchPlayer) -> u64 {
    u64::from(p.base.tackling) * 100
}

/// Corner takers and corner defenders.
pub(crate) fn corner_passing_weight(p: &MatchPlayer) -> u64 {
    u64::from(p.ability.passing) * 100
}

pub(crate) fn corner_attacker_weight(p: &MatchPlayer) -> u64 {
    (u64::from(p.base.shooting) + 10) * 100
}
