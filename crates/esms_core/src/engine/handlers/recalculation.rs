//! Per-minute recalculation handlers.
//!
//! Subscribed in this order: fatigue, ability, stats, probability. Ability
//! and probability also run on `KickOff` so the first minute has valid
//! numbers.

use crate::engine::config::{AggressionConfig, FatigueConfig, FlowConfig, PossessionConfig};
use crate::engine::event_bus::EventHandler;
use crate::engine::events::{EventKind, MatchEvent};
use crate::engine::formulas;
use crate::engine::match_state::MatchState;
use crate::error::Result;
use crate::models::conditional::aggression_override;
use crate::models::player::PlayerAbilities;
use crate::models::tactics::{TacticMultipliers, TacticsMatrix};
use crate::models::team::{MatchTeam, TeamSide};

// ============================================================================
// Fatigue
// ============================================================================

/// Decays every active player's condition once per minute.
#[derive(Debug, Clone)]
pub struct FatigueCalculator {
    config: FatigueConfig,
}

impl FatigueCalculator {
    pub fn new(config: FatigueConfig) -> Self {
        Self { config }
    }

    pub fn visit(&self, team: &mut MatchTeam) {
        for p in team.active_mut() {
            p.condition *= self.config.decay_per_minute;
        }
    }
}

impl EventHandler for FatigueCalculator {
    fn name(&self) -> &str {
        "fatigue"
    }

    fn handle(&mut self, event: &MatchEvent, state: &mut MatchState) -> Result<Vec<MatchEvent>> {
        if event.kind() == EventKind::MinuteElapsed {
            for team in state.teams_mut() {
                self.visit(team);
            }
        }
        Ok(Vec::new())
    }
}

// ============================================================================
// Ability
// ============================================================================

/// Rebuilds in-match ability snapshots and the team aggregate.
#[derive(Debug, Clone)]
pub struct AbilityCalculator {
    tactics: Option<TacticsMatrix>,
    aggression: AggressionConfig,
}

impl AbilityCalculator {
    pub fn new(tactics: Option<TacticsMatrix>, aggression: AggressionConfig) -> Self {
        Self {
            tactics,
            aggression,
        }
    }

    pub fn visit(&self, team: &mut MatchTeam) {
        let mut total = PlayerAbilities::default();
        let mut aggression_sum: u32 = 0;

        for p in team.players.iter_mut() {
            if !p.is_active {
                p.ability = p.ability.cleared();
                continue;
            }

            let mut ability = p.ability.cleared();
            if p.is_goalkeeper() {
                ability.goalkeeping = p.base.goalkeeping;
            } else {
                let m = self
                    .tactics
                    .as_ref()
                    .map(|t| t.multipliers(&team.tactic, p.position))
                    .unwrap_or(TacticMultipliers::IDENTITY);
                ability.tackling = scaled(m.tackling, p.base.tackling, p.condition);
                ability.passing = scaled(m.passing, p.base.passing, p.condition);
                ability.shooting = scaled(m.shooting, p.base.shooting, p.condition);
            }
            ability.aggression = p.base.aggression;

            total.goalkeeping += ability.goalkeeping;
            total.tackling += ability.tackling;
            total.passing += ability.passing;
            total.shooting += ability.shooting;
            aggression_sum += ability.aggression;

            p.ability = ability;
        }

        let level =
            aggression_override(&team.conditionals).unwrap_or(self.aggression.default_level);
        total.aggression = self.aggression.team_aggression(level, aggression_sum);
        team.ability = total;
    }
}

fn scaled(multiplier: f64, base: u32, condition: f64) -> u32 {
    (multiplier * f64::from(base) * condition).max(0.0) as u32
}

impl EventHandler for AbilityCalculator {
    fn name(&self) -> &str {
        "ability"
    }

    fn handle(&mut self, event: &MatchEvent, state: &mut MatchState) -> Result<Vec<MatchEvent>> {
        if matches!(event.kind(), EventKind::KickOff | EventKind::MinuteElapsed) {
            for team in state.teams_mut() {
                self.visit(team);
            }
        }
        Ok(Vec::new())
    }
}

// ============================================================================
// Stats
// ============================================================================

/// Counts minutes played and accumulates possession weight. Settles the
/// possession split on `FullTime`.
#[derive(Debug, Clone)]
pub struct StatsUpdater {
    possession: PossessionConfig,
}

impl StatsUpdater {
    pub fn new(possession: PossessionConfig) -> Self {
        Self { possession }
    }

    pub fn visit(&self, team: &mut MatchTeam) {
        for p in team.active_mut() {
            p.stats.minutes_played += 1;
        }
        let ab = team.ability;
        team.possession_weight += self.possession.tackling_weight * f64::from(ab.tackling)
            + self.possession.passing_weight * f64::from(ab.passing)
            + self.possession.shooting_weight * f64::from(ab.shooting);
    }

    /// Home share rounded to a whole percentage; away takes the rest.
    pub fn settle_possession(state: &mut MatchState) {
        let home = state.home.possession_weight;
        let total = home + state.away.possession_weight;
        let home_pct = if total > 0.0 {
            (100.0 * home / total).round() as u32
        } else {
            50
        };
        state.home.stats.possession = home_pct;
        state.away.stats.possession = 100 - home_pct;
    }
}

impl EventHandler for StatsUpdater {
    fn name(&self) -> &str {
        "stats"
    }

    fn handle(&mut self, event: &MatchEvent, state: &mut MatchState) -> Result<Vec<MatchEvent>> {
        match event.kind() {
            EventKind::MinuteElapsed => {
                for team in state.teams_mut() {
                    self.visit(team);
                }
            }
            EventKind::FullTime => Self::settle_possession(state),
            _ => {}
        }
        Ok(Vec::new())
    }
}

// ============================================================================
// Probability
// ============================================================================

/// Recomputes each team's per-minute chance probability.
#[derive(Debug, Clone)]
pub struct ProbabilityCalculator {
    flow: FlowConfig,
}

impl ProbabilityCalculator {
    pub fn new(flow: FlowConfig) -> Self {
        Self { flow }
    }

    pub fn shot_probability(&self, team: &MatchTeam, opponent: &MatchTeam) -> u32 {
        formulas::shot_probability(
            &self.flow,
            team.ability.aggression,
            team.ability.shooting,
            team.ability.passing,
            opponent.ability.tackling,
        )
    }
}

impl EventHandler for ProbabilityCalculator {
    fn name(&self) -> &str {
        "probability"
    }

    fn handle(&mut self, event: &MatchEvent, state: &mut MatchState) -> Result<Vec<MatchEvent>> {
        if matches!(event.kind(), EventKind::KickOff | EventKind::MinuteElapsed) {
            let home = self.shot_probability(&state.home, &state.away);
            let away = self.shot_probability(&state.away, &state.home);
            state.team_mut(TeamSide::Home).shot_probability = home;
            state.team_mut(TeamSide::Away).shot_probability = away;
        }
        Ok(Vec::new())
    }
}
