//! # Engine Configuration
//!
//! All tunable constants live here, grouped by concern. Every section has a
//! `Default` with the stock values and may be omitted from a YAML file.
//!
//! ```rust
//! use esms_core::engine::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! let yaml = config.to_yaml_string().unwrap();
//! assert_eq!(EngineConfig::from_yaml_str(&yaml).unwrap(), config);
//! ```

mod bonus_table;
mod flow_config;
mod league_rules;
mod match_config;

pub use bonus_table::*;
pub use flow_config::FlowConfig;
pub use league_rules::LeagueRules;
pub use match_config::{AggressionConfig, FatigueConfig, InjuryTimeConfig, PossessionConfig};

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub flow: FlowConfig,
    pub fatigue: FatigueConfig,
    pub aggression: AggressionConfig,
    pub possession: PossessionConfig,
    pub injury_time: InjuryTimeConfig,
    pub league: LeagueRules,
}

impl EngineConfig {
    /// Parses and validates a YAML config.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: EngineConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the match loop cannot run with.
    pub fn validate(&self) -> Result<()> {
        self.fatigue.validate()
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// No injury time in either half: exactly 90 minutes.
    pub fn regulation_only() -> Self {
        Self {
            injury_time: InjuryTimeConfig::fixed(0, 0),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchError;

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let yaml = "flow:\n  own_goal: 80\nleague:\n  max_df: 6\n";
        let cfg = EngineConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.flow.own_goal, 80);
        assert_eq!(cfg.flow.assisted, 7000);
        assert_eq!(cfg.league.max_df, 6);
        assert_eq!(cfg.league.min_df, 3);
        assert_eq!(cfg.fatigue.decay_per_minute, 0.996);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let cfg = EngineConfig::from_yaml_str("{}").unwrap();
        assert_eq!(cfg, EngineConfig::default());
    }

    #[test]
    fn test_bad_yaml_is_serialization_error() {
        let err = EngineConfig::from_yaml_str("flow: [1, 2").unwrap_err();
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_out_of_range_decay_rejected_on_load() {
        for yaml in ["fatigue:\n  decay_per_minute: 1.2\n", "fatigue:\n  decay_per_minute: 0.0\n"] {
            let err = EngineConfig::from_yaml_str(yaml).unwrap_err();
            assert!(matches!(err, MatchError::Configuration(_)), "{yaml}");
        }
        insta::assert_snapshot!(
            EngineConfig::from_yaml_str("fatigue:\n  decay_per_minute: 1.2\n").unwrap_err().to_string(),
            @"configuration error: fatigue.decay_per_minute must be in (0, 1], got 1.2"
        );
    }
}
