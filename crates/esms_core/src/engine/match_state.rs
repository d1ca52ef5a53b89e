use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};
use crate::models::player::MatchPlayer;
use crate::models::team::{MatchTeam, PlayerRef, Referee, TeamSide};
use crate::models::MatchResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Half {
    First,
    Second,
    Finished,
}

/// The match aggregate: both teams, referee and the clock.
///
/// The minute counter runs across both halves, so the second half starts at
/// `45 + first-half injury time`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchState {
    pub home: MatchTeam,
    pub away: MatchTeam,
    pub referee: Option<Referee>,
    pub minute: u32,
    /// Injury time of the current half, fixed once computed.
    pub injury_time: u32,
    pub half: Half,
}

impl MatchState {
    pub fn new(home: MatchTeam, away: MatchTeam, referee: Option<Referee>) -> Self {
        Self {
            home,
            away,
            referee,
            minute: 0,
            injury_time: 0,
            half: Half::First,
        }
    }

    pub fn team(&self, side: TeamSide) -> &MatchTeam {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    pub fn team_mut(&mut self, side: TeamSide) -> &mut MatchTeam {
        match side {
            TeamSide::Home => &mut self.home,
            TeamSide::Away => &mut self.away,
        }
    }

    /// `(team, opponent)` for the given side.
    pub fn pair(&self, side: TeamSide) -> (&MatchTeam, &MatchTeam) {
        match side {
            TeamSide::Home => (&self.home, &self.away),
            TeamSide::Away => (&self.away, &self.home),
        }
    }

    /// Mutable `(team, opponent)` for the given side.
    pub fn pair_mut(&mut self, side: TeamSide) -> (&mut MatchTeam, &mut MatchTeam) {
        match side {
            TeamSide::Home => (&mut self.home, &mut self.away),
            TeamSide::Away => (&mut self.away, &mut self.home),
        }
    }

    pub fn teams_mut(&mut self) -> [&mut MatchTeam; 2] {
        [&mut self.home, &mut self.away]
    }

    pub fn player(&self, player: PlayerRef) -> Result<&MatchPlayer> {
        self.team(player.side).player(player.index).ok_or_else(|| {
            MatchError::invariant(format!(
                "no player at index {} on the {} team",
                player.index, player.side
            ))
        })
    }

    pub fn player_mut(&mut self, player: PlayerRef) -> Result<&mut MatchPlayer> {
        self.team_mut(player.side)
            .player_mut(player.index)
            .ok_or_else(|| {
                MatchError::invariant(format!(
                    "no player at index {} on the {} team",
                    player.index, player.side
                ))
            })
    }

    pub fn score(&self) -> (usize, usize) {
        (self.home.goal_count(), self.away.goal_count())
    }

    pub fn into_result(self, rng_seed: u64) -> MatchResult {
        MatchResult {
            home_team: self.home,
            away_team: self.away,
            referee: self.referee,
            rng_seed,
        }
    }
}
