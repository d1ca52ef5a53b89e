use serde::{Deserialize, Serialize};

use super::team::{MatchTeam, Referee, TeamSide};
use crate::error::Result;

/// Final snapshot of a simulated match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub home_team: MatchTeam,
    pub away_team: MatchTeam,
    pub referee: Option<Referee>,
    /// Seed actually used, for replay.
    pub rng_seed: u64,
}

impl MatchResult {
    pub fn team(&self, side: TeamSide) -> &MatchTeam {
        match side {
            TeamSide::Home => &self.home_team,
            TeamSide::Away => &self.away_team,
        }
    }

    pub fn team_mut(&mut self, side: TeamSide) -> &mut MatchTeam {
        match side {
            TeamSide::Home => &mut self.home_team,
            TeamSide::Away => &mut self.away_team,
        }
    }

    pub fn goals_for(&self, side: TeamSide) -> usize {
        self.team(side).goal_count()
    }

    /// (home, away)
    pub fn score(&self) -> (usize, usize) {
        (self.goals_for(TeamSide::Home), self.goals_for(TeamSide::Away))
    }

    /// `None` for a draw.
    pub fn winner(&self) -> Option<TeamSide> {
        let (home, away) = self.score();
        match home.cmp(&away) {
            std::cmp::Ordering::Greater => Some(TeamSide::Home),
            std::cmp::Ordering::Less => Some(TeamSide::Away),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn scorers(&self, side: TeamSide) -> Vec<(String, u32)> {
        self.team(side)
            .stats
            .goals
            .iter()
            .map(|g| (g.scorer_name.clone(), g.minute))
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
