//! Pre-match lineup gate.

use std::collections::HashSet;

use super::config::LeagueRules;
use crate::error::ValidationError;
use crate::models::player::Position;
use crate::models::tactics::Tactic;
use crate::models::team::MatchTeam;

pub trait Validator {
    fn validate(&self, team: &MatchTeam) -> Result<(), ValidationError>;
}

/// Checks tactic, starting lineup, bench size, repeated names and formation
/// bands, in that order, and reports the first violation.
#[derive(Debug, Clone, Default)]
pub struct TeamValidator {
    rules: LeagueRules,
}

impl TeamValidator {
    pub fn new(rules: LeagueRules) -> Self {
        Self { rules }
    }

    fn validate_tactic(&self, team: &MatchTeam) -> Result<(), ValidationError> {
        team.tactic
            .parse::<Tactic>()
            .map(|_| ())
            .map_err(|_| ValidationError::InvalidTactic {
                team: team.name.clone(),
                tactic: team.tactic.clone(),
            })
    }

    fn validate_starting_lineup(&self, team: &MatchTeam) -> Result<(), ValidationError> {
        let found = team.starters().count();
        if found != self.rules.starters {
            return Err(ValidationError::InvalidLineupSize {
                team: team.name.clone(),
                expected: self.rules.starters,
                found,
            });
        }

        for (slot, p) in team.starters().enumerate() {
            if slot == 0 && !p.is_goalkeeper() {
                return Err(ValidationError::FirstPlayerNotGoalkeeper {
                    team: team.name.clone(),
                    found: p.position,
                });
            }
            if slot > 0 && p.is_goalkeeper() {
                return Err(ValidationError::ExtraGoalkeeper {
                    team: team.name.clone(),
                    player: p.name.clone(),
                });
            }
            if p.is_injured() {
                return Err(ValidationError::PlayerInjured {
                    team: team.name.clone(),
                    player: p.name.clone(),
                });
            }
            if p.is_suspended() {
                return Err(ValidationError::PlayerSuspended {
                    team: team.name.clone(),
                    player: p.name.clone(),
                });
            }
        }
        Ok(())
    }

    fn validate_subs(&self, team: &MatchTeam) -> Result<(), ValidationError> {
        let found = team.subs().count();
        if found < self.rules.min_subs || found > self.rules.max_subs {
            return Err(ValidationError::InvalidSubsCount {
                team: team.name.clone(),
                found,
                min: self.rules.min_subs,
                max: self.rules.max_subs,
            });
        }
        Ok(())
    }

    /// A roster player may fill one teamsheet slot, starter or sub.
    fn validate_unique_players(&self, team: &MatchTeam) -> Result<(), ValidationError> {
        let mut seen = HashSet::with_capacity(team.players.len());
        for p in &team.players {
            if !seen.insert(p.name.as_str()) {
                return Err(ValidationError::DuplicatePlayer {
                    team: team.name.clone(),
                    player: p.name.clone(),
                });
            }
        }
        Ok(())
    }

    fn validate_formation(&self, team: &MatchTeam) -> Result<(), ValidationError> {
        let r = &self.rules;
        let bands = [
            (Position::DF, r.min_df, r.max_df),
            (Position::DM, r.min_dm, r.max_dm),
            (Position::MF, 0, r.max_mf),
            (Position::AM, r.min_am, r.max_am),
        ];
        for (position, min, max) in bands {
            self.check_band(team, position, min, max)?;
        }

        let midfield = team.starters().filter(|p| p.position.is_midfielder()).count();
        if midfield < r.min_mf || midfield > r.max_mf {
            return Err(ValidationError::MidfieldOutOfBounds {
                team: team.name.clone(),
                found: midfield,
                min: r.min_mf,
                max: r.max_mf,
            });
        }

        self.check_band(team, Position::FW, r.min_fw, r.max_fw)
    }

    fn check_band(
        &self,
        team: &MatchTeam,
        position: Position,
        min: usize,
        max: usize,
    ) -> Result<(), ValidationError> {
        let found = team.count_starters(position);
        if found < min || found > max {
            return Err(ValidationError::PositionOutOfBounds {
                team: team.name.clone(),
                position,
                found,
                min,
                max,
            });
        }
        Ok(())
    }
}

impl Validator for TeamValidator {
    fn validate(&self, team: &MatchTeam) -> Result<(), ValidationError> {
        self.validate_tactic(team)?;
        self.validate_starting_lineup(team)?;
        self.validate_subs(team)?;
        self.validate_unique_players(team)?;
        self.validate_formation(team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::{LineupEntry, Player, PlayerAbilities};
    use crate::models::team::{TeamConfig, TeamSide};
    use crate::test_fixtures::balanced_team;

    fn check(config: &TeamConfig) -> Result<(), ValidationError> {
        let team = MatchTeam::from_config(TeamSide::Home, config).unwrap();
        TeamValidator::default().validate(&team)
    }

    fn add_roster_player(config: &mut TeamConfig, name: &str, position: Position) {
        config
            .roster
            .push(Player::new(name, position, PlayerAbilities::new(1, 10, 10, 10, 10)));
    }

    #[test]
    fn test_balanced_team_passes() {
        assert_eq!(check(&balanced_team("Alpha", "ALP", 10)), Ok(()));
    }

    #[test]
    fn test_ten_starters_rejected() {
        let mut config = balanced_team("Alpha", "ALP", 10);
        config.lineup.pop();
        let err = check(&config).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"Alpha: invalid starting lineup size: expected 11, found 10");
    }

    #[test]
    fn test_twelve_starters_rejected() {
        let mut config = balanced_team("Alpha", "ALP", 10);
        let extra = config.subs.remove(1);
        config.lineup.push(extra);
        assert!(matches!(
            check(&config),
            Err(ValidationError::InvalidLineupSize { found: 12, .. })
        ));
    }

    #[test]
    fn test_second_goalkeeper_rejected() {
        let mut config = balanced_team("Alpha", "ALP", 10);
        add_roster_player(&mut config, "Spare Keeper", Position::GK);
        config.lineup[4] = LineupEntry::new("Spare Keeper", Position::GK);
        let err = check(&config).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"Alpha: only one GK is allowed in the starting lineup, Spare Keeper is also a GK");
    }

    #[test]
    fn test_first_slot_must_be_goalkeeper() {
        let mut config = balanced_team("Alpha", "ALP", 10);
        config.lineup.swap(0, 1);
        assert!(matches!(
            check(&config),
            Err(ValidationError::FirstPlayerNotGoalkeeper {
                found: Position::DF,
                ..
            })
        ));
    }

    #[test]
    fn test_eight_defenders_rejected() {
        let mut config = balanced_team("Alpha", "ALP", 10);
        for i in 0..4 {
            let name = format!("Extra DF{i}");
            add_roster_player(&mut config, &name, Position::DF);
            config.lineup[5 + i] = LineupEntry::new(name, Position::DF);
        }
        // 8 DF, 0 MF, 2 FW
        let err = check(&config).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"Alpha: 8 DF players in the starting lineup, expected between 3 and 5");
    }

    #[test]
    fn test_starter_named_again_on_bench_rejected() {
        let mut config = balanced_team("Alpha", "ALP", 10);
        config.subs[4] = LineupEntry::new("ALP FW1", Position::FW);
        let err = check(&config).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"Alpha: ALP FW1 is named more than once on the teamsheet");
    }

    #[test]
    fn test_starter_named_twice_rejected() {
        let mut config = balanced_team("Alpha", "ALP", 10);
        config.lineup[10] = LineupEntry::new("ALP FW1", Position::FW);
        assert!(matches!(
            check(&config),
            Err(ValidationError::DuplicatePlayer { ref player, .. }) if player == "ALP FW1"
        ));
    }

    #[test]
    fn test_unknown_tactic_rejected() {
        let mut config = balanced_team("Alpha", "ALP", 10);
        config.tactic = "X".into();
        let err = check(&config).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @r#"Alpha: unrecognised tactic "X""#);
    }

    #[test]
    fn test_injured_and_suspended_starters_rejected() {
        let mut config = balanced_team("Alpha", "ALP", 10);
        config.roster[3].weeks_injured = 2;
        assert!(matches!(check(&config), Err(ValidationError::PlayerInjured { .. })));

        let mut config = balanced_team("Alpha", "ALP", 10);
        config.roster[7].games_suspended = 1;
        assert!(matches!(check(&config), Err(ValidationError::PlayerSuspended { .. })));
    }

    #[test]
    fn test_injured_sub_allowed() {
        let mut config = balanced_team("Alpha", "ALP", 10);
        let idx = config.roster_index(&config.subs[0].name).unwrap();
        config.roster[idx].weeks_injured = 3;
        assert_eq!(check(&config), Ok(()));
    }

    #[test]
    fn test_sub_bounds() {
        let mut config = balanced_team("Alpha", "ALP", 10);
        config.subs.truncate(2);
        assert!(matches!(
            check(&config),
            Err(ValidationError::InvalidSubsCount { found: 2, .. })
        ));

        let mut config = balanced_team("Alpha", "ALP", 10);
        for i in 0..3 {
            let name = format!("Bench {i}");
            add_roster_player(&mut config, &name, Position::MF);
            config.subs.push(LineupEntry::new(name, Position::MF));
        }
        assert!(matches!(
            check(&config),
            Err(ValidationError::InvalidSubsCount { found: 8, .. })
        ));
    }

    #[test]
    fn test_midfield_band_counts_dm_and_am() {
        // GK, 3 DF, 2 DM, 3 MF, 2 AM = 7 midfielders
        let mut config = balanced_team("Alpha", "ALP", 10);
        config.lineup[4].position = Position::DM;
        config.lineup[5].position = Position::DM;
        config.lineup[9].position = Position::AM;
        config.lineup[10].position = Position::AM;
        let err = check(&config).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MidfieldOutOfBounds {
                team: "Alpha".into(),
                found: 7,
                min: 1,
                max: 6,
            }
        );
    }

    #[test]
    fn test_rules_are_configurable() {
        let mut config = balanced_team("Alpha", "ALP", 10);
        for i in 0..4 {
            let name = format!("Extra DF{i}");
            add_roster_player(&mut config, &name, Position::DF);
            config.lineup[5 + i] = LineupEntry::new(name, Position::DF);
        }
        let team = MatchTeam::from_config(TeamSide::Home, &config).unwrap();
        let lenient = TeamValidator::new(LeagueRules {
            max_df: 8,
            min_mf: 0,
            ..LeagueRules::default()
        });
        assert_eq!(lenient.validate(&team), Ok(()));
    }
}
