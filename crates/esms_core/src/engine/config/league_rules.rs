//! League-wide lineup bounds used by the pre-match validator.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LeagueRules {
    /// Starters per team (default: 11)
    pub starters: usize,
    pub min_subs: usize,
    pub max_subs: usize,
    pub min_df: usize,
    pub max_df: usize,
    pub min_dm: usize,
    pub max_dm: usize,
    /// Lower bound of the MF count and of the DM+MF+AM band
    pub min_mf: usize,
    /// Upper bound of the MF count and of the DM+MF+AM band
    pub max_mf: usize,
    pub min_am: usize,
    pub max_am: usize,
    pub min_fw: usize,
    pub max_fw: usize,
}

impl Default for LeagueRules {
    fn default() -> Self {
        Self {
            starters: 11,
            min_subs: 3,
            max_subs: 7,
            min_df: 3,
            max_df: 5,
            min_dm: 0,
            max_dm: 3,
            min_mf: 1,
            max_mf: 6,
            min_am: 0,
            max_am: 3,
            min_fw: 0,
            max_fw: 4,
        }
    }
}
