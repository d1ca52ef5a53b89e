//! Ability-point coefficients for the post-match bonus pass.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

pub const AB_SAVE: &str = "ab_sav";
pub const AB_CONCEDE: &str = "ab_concede";
pub const AB_KEY_TACKLE: &str = "ab_ktk";
pub const AB_OWN_GOAL: &str = "ab_og";
pub const AB_KEY_PASS: &str = "ab_kps";
pub const AB_ASSIST: &str = "ab_assist";
pub const AB_GOAL: &str = "ab_goal";
pub const AB_SHOT_ON: &str = "ab_sht_on";
pub const AB_SHOT_OFF: &str = "ab_sht_off";
pub const AB_YELLOW: &str = "ab_yellow";
pub const AB_RED: &str = "ab_red";
pub const AB_VICTORY: &str = "ab_victory_random";
pub const AB_DEFEAT: &str = "ab_defeat_random";
pub const AB_CLEAN_SHEET: &str = "ab_clean_sheet";

/// Key to coefficient map, loaded from league configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct BonusTable {
    values: BTreeMap<String, i32>,
}

impl BonusTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stock ESMS coefficients.
    pub fn legacy() -> Self {
        [
            (AB_SAVE, 1),
            (AB_CONCEDE, -1),
            (AB_KEY_TACKLE, 1),
            (AB_OWN_GOAL, -1),
            (AB_KEY_PASS, 1),
            (AB_ASSIST, 1),
            (AB_GOAL, 2),
            (AB_SHOT_ON, 1),
            (AB_SHOT_OFF, 0),
            (AB_YELLOW, -1),
            (AB_RED, -5),
            (AB_VICTORY, 5),
            (AB_DEFEAT, -5),
            (AB_CLEAN_SHEET, 3),
        ]
        .into_iter()
        .collect()
    }

    pub fn set(&mut self, key: &str, value: i32) {
        self.values.insert(key.to_string(), value);
    }

    /// Coefficient for `key`. Missing keys warn and read as 0.
    pub fn get(&self, key: &str) -> i32 {
        match self.values.get(key) {
            Some(v) => *v,
            None => {
                warn!(key, "bonus coefficient missing, using 0");
                0
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

impl<'a> FromIterator<(&'a str, i32)> for BonusTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, i32)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
        }
    }
}
