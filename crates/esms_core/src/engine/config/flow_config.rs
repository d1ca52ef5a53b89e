//! Flow gate constants and formula coefficients.
//!
//! Probabilities are basis points out of 10,000.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FlowConfig {
    // === Chance ===
    /// Own goal on a chance (default: 40)
    pub own_goal: u32,
    /// Chance is assisted (default: 7000)
    pub assisted: u32,
    /// Assisted chance beats a defender (default: 700)
    pub assisted_beats_defender: u32,
    /// Unassisted chance beats a defender (default: 4000)
    pub beats_defender: u32,

    // === Shot probability ===
    /// Overall scale (default: 1.65)
    pub shot_scale: f64,
    /// Aggression divisor (default: 50.0)
    pub shot_aggression_divisor: f64,
    /// Skill-ratio factor (default: 800.0)
    pub shot_skill_factor: f64,
    /// Divisor for the shooting/passing blend (default: 3.1)
    pub shot_skill_divisor: f64,

    // === Tackle ===
    /// Shot tackled base rate (default: 3200)
    pub shot_tackled_base: u32,
    /// Tackle goes out for a corner (default: 975)
    pub shot_tackled_corner: u32,
    /// Multiplier on `shot_tackled_corner` (default: 1)
    pub corner_factor: u32,

    // === Shot ===
    /// Shot on target base rate (default: 3000)
    pub shot_on_target_base: u32,
    /// Added per point of attacker shooting (default: 150)
    pub shot_on_target_per_shooting: u32,
    /// Off-target shot deflected for a corner (default: 975)
    pub shot_off_target_deflection: u32,
    /// One-on-one base rate on assisted shots (default: 1500)
    pub one_on_one_base: u32,
    /// Added when the shot is a goal (default: 3500)
    pub one_on_one_goal_bonus: u32,

    // === Goal ===
    /// Goal base rate (default: 2200)
    pub goal_base: i64,
    /// Added per point of attacker shooting (default: 240)
    pub goal_per_shooting: i64,
    /// Removed per point of keeper goalkeeping (default: 170)
    pub goal_per_keeping: i64,
    /// Goal cancelled after review (default: 350)
    pub goal_cancelled: u32,
    /// One-on-one saved by the keeper (default: 8400)
    pub one_on_one_saved: u32,
    /// Save parried for a corner (default: 1800)
    pub corner_from_save: u32,

    // === Corner ===
    /// Keeper catches the corner, base rate (default: 2250)
    pub corner_keeper_catch_base: i64,
    /// Added per point of keeper goalkeeping (default: 900)
    pub corner_keeper_catch_per_keeping: i64,
    /// Removed per point of taker passing (default: 1150)
    pub corner_keeper_catch_per_passing: i64,
    /// Defender clears the corner, base rate (default: 3740)
    pub corner_cleared_base: u32,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            own_goal: 40,
            assisted: 7000,
            assisted_beats_defender: 700,
            beats_defender: 4000,

            shot_scale: 1.65,
            shot_aggression_divisor: 50.0,
            shot_skill_factor: 800.0,
            shot_skill_divisor: 3.1,

            shot_tackled_base: 3200,
            shot_tackled_corner: 975,
            corner_factor: 1,

            shot_on_target_base: 3000,
            shot_on_target_per_shooting: 150,
            shot_off_target_deflection: 975,
            one_on_one_base: 1500,
            one_on_one_goal_bonus: 3500,

            goal_base: 2200,
            goal_per_shooting: 240,
            goal_per_keeping: 170,
            goal_cancelled: 350,
            one_on_one_saved: 8400,
            corner_from_save: 1800,

            corner_keeper_catch_base: 2250,
            corner_keeper_catch_per_keeping: 900,
            corner_keeper_catch_per_passing: 1150,
            corner_cleared_base: 3740,
        }
    }
}
