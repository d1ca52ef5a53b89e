use serde::{Deserialize, Serialize};
use std::fmt;

use super::conditional::Conditional;
use super::player::{LineupEntry, MatchPlayer, Player, PlayerAbilities, Position};
use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub fn opponent(self) -> TeamSide {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamSide::Home => f.write_str("home"),
            TeamSide::Away => f.write_str("away"),
        }
    }
}

/// Stable reference to a player inside a match: side plus index into
/// [`MatchTeam::players`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PlayerRef {
    pub side: TeamSide,
    pub index: usize,
}

impl PlayerRef {
    pub fn new(side: TeamSide, index: usize) -> Self {
        Self { side, index }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Referee {
    pub name: String,
    #[serde(default)]
    pub nationality: String,
}

/// Team input for one match: roster plus teamsheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamConfig {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub manager: String,
    /// Tactic code, checked against the whitelist by the validator.
    pub tactic: String,
    pub roster: Vec<Player>,
    /// Starting eleven in slot order. Slot 0 is the goalkeeper.
    pub lineup: Vec<LineupEntry>,
    #[serde(default)]
    pub subs: Vec<LineupEntry>,
    #[serde(default)]
    pub conditionals: Vec<Conditional>,
}

impl TeamConfig {
    pub fn roster_index(&self, name: &str) -> Option<usize> {
        self.roster.iter().position(|p| p.name == name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub scorer: PlayerRef,
    pub scorer_name: String,
    pub minute: u32,
    pub own_goal: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TeamStats {
    pub goals: Vec<Goal>,
    pub tackles: u32,
    pub passes: u32,
    pub shots_on_target: u32,
    pub shots_off_target: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    /// Percentage, set at full time.
    pub possession: u32,
}

/// Match-scoped team state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchTeam {
    pub side: TeamSide,
    pub name: String,
    pub code: String,
    pub manager: String,
    pub tactic: String,
    pub conditionals: Vec<Conditional>,
    /// Starters in slot order followed by substitutes.
    pub players: Vec<MatchPlayer>,
    pub stats: TeamStats,
    /// Sum over active players, with the derived aggression value.
    pub ability: PlayerAbilities,
    /// Per-minute chance probability in basis points.
    pub shot_probability: u32,
    #[serde(skip)]
    pub(crate) possession_weight: f64,
}

impl MatchTeam {
    /// Copies the roster entries named on the teamsheet into match state.
    pub fn from_config(side: TeamSide, config: &TeamConfig) -> Result<Self, ValidationError> {
        let mut players = Vec::with_capacity(config.lineup.len() + config.subs.len());
        let entries = config
            .lineup
            .iter()
            .map(|e| (e, false))
            .chain(config.subs.iter().map(|e| (e, true)));

        for (entry, is_sub) in entries {
            let roster_index =
                config
                    .roster_index(&entry.name)
                    .ok_or_else(|| ValidationError::UnknownPlayer {
                        team: config.name.clone(),
                        player: entry.name.clone(),
                    })?;
            players.push(MatchPlayer::from_roster(
                roster_index,
                &config.roster[roster_index],
                entry.position,
                is_sub,
            ));
        }

        Ok(Self {
            side,
            name: config.name.clone(),
            code: config.code.clone(),
            manager: config.manager.clone(),
            tactic: config.tactic.clone(),
            conditionals: config.conditionals.clone(),
            players,
            stats: TeamStats::default(),
            ability: PlayerAbilities::default(),
            shot_probability: 0,
            possession_weight: 0.0,
        })
    }

    pub fn player(&self, index: usize) -> Option<&MatchPlayer> {
        self.players.get(index)
    }

    pub fn player_mut(&mut self, index: usize) -> Option<&mut MatchPlayer> {
        self.players.get_mut(index)
    }

    pub fn player_ref(&self, index: usize) -> PlayerRef {
        PlayerRef::new(self.side, index)
    }

    pub fn starters(&self) -> impl Iterator<Item = &MatchPlayer> {
        self.players.iter().filter(|p| !p.is_sub)
    }

    pub fn subs(&self) -> impl Iterator<Item = &MatchPlayer> {
        self.players.iter().filter(|p| p.is_sub)
    }

    /// Active players with their indices, in slot order.
    pub fn active(&self) -> impl Iterator<Item = (usize, &MatchPlayer)> {
        self.players.iter().enumerate().filter(|(_, p)| p.is_active)
    }

    pub fn active_mut(&mut self) -> impl Iterator<Item = &mut MatchPlayer> {
        self.players.iter_mut().filter(|p| p.is_active)
    }

    /// First active goalkeeper.
    pub fn goalkeeper(&self) -> Option<PlayerRef> {
        self.active()
            .find(|(_, p)| p.is_goalkeeper())
            .map(|(idx, _)| self.player_ref(idx))
    }

    pub fn count_starters(&self, position: Position) -> usize {
        self.starters().filter(|p| p.position == position).count()
    }

    pub fn goal_count(&self) -> usize {
        self.stats.goals.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::balanced_team;

    #[test]
    fn test_from_config_resolves_roster() {
        let config = balanced_team("Alpha", "ALP", 10);
        let team = MatchTeam::from_config(TeamSide::Home, &config).unwrap();

        assert_eq!(team.players.len(), config.lineup.len() + config.subs.len());
        assert_eq!(team.starters().count(), 11);
        assert_eq!(team.active().count(), 11);
        for p in &team.players {
            assert_eq!(config.roster[p.roster_index].name, p.name);
        }
    }

    #[test]
    fn test_unknown_player_rejected() {
        let mut config = balanced_team("Alpha", "ALP", 10);
        config.lineup[3].name = "Nobody".into();
        let err = MatchTeam::from_config(TeamSide::Home, &config).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownPlayer { .. }));
    }

    #[test]
    fn test_goalkeeper_lookup() {
        let config = balanced_team("Alpha", "ALP", 10);
        let mut team = MatchTeam::from_config(TeamSide::Away, &config).unwrap();
        assert_eq!(team.goalkeeper(), Some(PlayerRef::new(TeamSide::Away, 0)));

        team.players[0].is_active = false;
        assert_eq!(team.goalkeeper(), None);
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(TeamSide::Home.opponent(), TeamSide::Away);
        assert_eq!(TeamSide::Away.opponent(), TeamSide::Home);
    }
}
