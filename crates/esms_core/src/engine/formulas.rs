//! Probability formulas for the flow engine.
//!
//! All functions are pure and return basis points clamped to `[0, 10000]`.

use super::config::FlowConfig;
use super::rng::BASIS_POINTS;

/// Clamps a raw probability to a basis-point threshold.
#[inline]
pub fn to_basis_points(raw: f64) -> u32 {
    if raw.is_nan() || raw <= 0.0 {
        0
    } else if raw >= BASIS_POINTS as f64 {
        BASIS_POINTS as u32
    } else {
        raw as u32
    }
}

/// Per-minute chance probability for a team.
///
/// `scale * (aggression / d + factor * ((sh/k + 2*ps/k) / (opp_tk + 1))^2)`
pub fn shot_probability(
    cfg: &FlowConfig,
    aggression: u32,
    shooting: u32,
    passing: u32,
    opp_tackling: u32,
) -> u32 {
    let blend = (f64::from(shooting) + 2.0 * f64::from(passing)) / cfg.shot_skill_divisor;
    let ratio = blend / (f64::from(opp_tackling) + 1.0);
    let raw = cfg.shot_scale
        * (f64::from(aggression) / cfg.shot_aggression_divisor
            + cfg.shot_skill_factor * ratio.powi(2));
    to_basis_points(raw)
}

pub fn shot_on_target_probability(cfg: &FlowConfig, shooting: u32) -> u32 {
    let raw = u64::from(cfg.shot_on_target_base)
        + u64::from(cfg.shot_on_target_per_shooting) * u64::from(shooting);
    to_basis_points(raw as f64)
}

/// Goes negative against a strong keeper, which clamps to 0.
pub fn goal_probability(cfg: &FlowConfig, shooting: u32, keeping: u32) -> u32 {
    let raw = cfg.goal_base + cfg.goal_per_shooting * i64::from(shooting)
        - cfg.goal_per_keeping * i64::from(keeping);
    to_basis_points(raw as f64)
}

/// `base * (opp_tk * 3) / (ps * 2 + sh)`
pub fn shot_tackled_probability(
    cfg: &FlowConfig,
    shooting: u32,
    passing: u32,
    opp_tackling: u32,
) -> u32 {
    ratio_scaled(cfg.shot_tackled_base, shooting, passing, opp_tackling)
}

pub fn one_on_one_probability(cfg: &FlowConfig, goal_scored: bool) -> u32 {
    let bonus = if goal_scored {
        cfg.one_on_one_goal_bonus
    } else {
        0
    };
    to_basis_points(f64::from(cfg.one_on_one_base) + f64::from(bonus))
}

pub fn corner_keeper_catch_probability(cfg: &FlowConfig, keeping: u32, taker_passing: u32) -> u32 {
    let raw = cfg.corner_keeper_catch_base
        + cfg.corner_keeper_catch_per_keeping * i64::from(keeping)
        - cfg.corner_keeper_catch_per_passing * i64::from(taker_passing);
    to_basis_points(raw as f64)
}

/// Same shape as the shot-tackled formula with the corner base rate.
pub fn corner_cleared_probability(
    cfg: &FlowConfig,
    shooting: u32,
    passing: u32,
    opp_tackling: u32,
) -> u32 {
    ratio_scaled(cfg.corner_cleared_base, shooting, passing, opp_tackling)
}

fn ratio_scaled(base: u32, shooting: u32, passing: u32, opp_tackling: u32) -> u32 {
    let attack = f64::from(passing) * 2.0 + f64::from(shooting);
    let defence = f64::from(opp_tackling) * 3.0;
    if attack <= 0.0 {
        return if defence > 0.0 { BASIS_POINTS as u32 } else { 0 };
    }
    to_basis_points(f64::from(base) * defence / attack)
}
