//! Per-minute recalculation and clock parameters.

use serde::{Deserialize, Serialize};

use crate::engine::rng::MatchRng;
use crate::error::{MatchError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FatigueConfig {
    /// Condition multiplier applied every minute (default: 0.996)
    pub decay_per_minute: f64,
}

impl Default for FatigueConfig {
    fn default() -> Self {
        Self {
            decay_per_minute: 0.996,
        }
    }
}

impl FatigueConfig {
    /// Decay must lie in `(0, 1]`.
    pub fn validate(&self) -> Result<()> {
        let decay = self.decay_per_minute;
        if !(decay > 0.0 && decay <= 1.0) {
            return Err(MatchError::Configuration(format!(
                "fatigue.decay_per_minute must be in (0, 1], got {}",
                decay
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AggressionConfig {
    /// Level used when the teamsheet has no AGG conditional (default: 10)
    pub default_level: u32,
    /// Weight of the level against the summed player aggression (default: 10)
    pub level_weight: u32,
}

impl Default for AggressionConfig {
    fn default() -> Self {
        Self {
            default_level: 10,
            level_weight: 10,
        }
    }
}

impl AggressionConfig {
    /// Team aggression from the level and the summed active-player aggression.
    pub fn team_aggression(&self, level: u32, player_sum: u32) -> u32 {
        level.saturating_mul(self.level_weight).saturating_add(player_sum)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PossessionConfig {
    /// (default: 0.3)
    pub tackling_weight: f64,
    /// (default: 0.55)
    pub passing_weight: f64,
    /// (default: 0.15)
    pub shooting_weight: f64,
}

impl Default for PossessionConfig {
    fn default() -> Self {
        Self {
            tackling_weight: 0.3,
            passing_weight: 0.55,
            shooting_weight: 0.15,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InjuryTimeConfig {
    /// Lower bound, inclusive (default: 1)
    pub min: u32,
    /// Upper bound, inclusive (default: 5)
    pub max: u32,
    /// Fixed `[first half, second half]` values; skips the random draw.
    pub fixed: Option<[u32; 2]>,
}

impl Default for InjuryTimeConfig {
    fn default() -> Self {
        Self {
            min: 1,
            max: 5,
            fixed: None,
        }
    }
}

impl InjuryTimeConfig {
    pub fn fixed(first: u32, second: u32) -> Self {
        Self {
            fixed: Some([first, second]),
            ..Self::default()
        }
    }

    /// Injury time for a half (0 = first, 1 = second).
    pub fn roll(&self, half: usize, rng: &mut MatchRng) -> u32 {
        if let Some(values) = self.fixed {
            return values[half.min(1)];
        }
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        rng.random_range(i64::from(lo), i64::from(hi) + 1) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatigue_decay_bounds() {
        for decay in [0.5, 0.996, 1.0] {
            assert!(FatigueConfig { decay_per_minute: decay }.validate().is_ok());
        }
        for decay in [0.0, -0.1, 1.2, f64::NAN] {
            let err = FatigueConfig { decay_per_minute: decay }.validate().unwrap_err();
            assert!(matches!(err, MatchError::Configuration(_)), "{decay}");
        }
    }

    #[test]
    fn test_injury_time_fixed() {
        let cfg = InjuryTimeConfig::fixed(2, 4);
        let mut rng = MatchRng::new(1);
        assert_eq!(cfg.roll(0, &mut rng), 2);
        assert_eq!(cfg.roll(1, &mut rng), 4);
    }

    #[test]
    fn test_injury_time_random_within_bounds() {
        let cfg = InjuryTimeConfig::default();
        let mut rng = MatchRng::new(3);
        for _ in 0..500 {
            let t = cfg.roll(0, &mut rng);
            assert!((1..=5).contains(&t));
        }
    }

    #[test]
    fn test_team_aggression_grows_with_level() {
        let cfg = AggressionConfig::default();
        assert_eq!(cfg.team_aggression(10, 110), 210);
        assert!(cfg.team_aggression(15, 110) > cfg.team_aggression(10, 110));
    }
}
