//! Post-match ability points.
//!
//! Runs over a finished [`MatchResult`] and never touches the event log.

use tracing::{debug, warn};

use super::config::{
    BonusTable, AB_ASSIST, AB_CLEAN_SHEET, AB_CONCEDE, AB_DEFEAT, AB_GOAL, AB_KEY_PASS, AB_KEY_TACKLE,
    AB_OWN_GOAL, AB_RED, AB_SAVE, AB_SHOT_OFF, AB_SHOT_ON, AB_VICTORY, AB_YELLOW,
};
use super::rng::MatchRng;
use crate::models::match_result::MatchResult;
use crate::models::player::{AbilityPoints, MatchPlayer, Position};
use crate::models::team::{MatchTeam, TeamSide};

#[derive(Debug, Clone, Default)]
pub struct BonusCalculator {
    table: BonusTable,
}

impl BonusCalculator {
    pub fn new(table: BonusTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &BonusTable {
        &self.table
    }

    /// Recomputes `ability.points` for every player on both teams, then adds
    /// the result and clean-sheet bonuses.
    pub fn apply(&self, result: &mut MatchResult, rng: &mut MatchRng) {
        for side in [TeamSide::Home, TeamSide::Away] {
            let scored = result.goals_for(side);
            let conceded = result.goals_for(side.opponent());
            let team = result.team_mut(side);

            for p in team.players.iter_mut() {
                p.ability.points = self.stat_points(p);
            }

            if scored > conceded {
                self.apply_result_bonus(team, AB_VICTORY, rng);
            } else if scored < conceded {
                self.apply_result_bonus(team, AB_DEFEAT, rng);
            }

            if conceded == 0 {
                self.apply_clean_sheet(team, rng);
            }
        }
    }

    fn stat_points(&self, p: &MatchPlayer) -> AbilityPoints {
        let s = &p.stats;
        let t = &self.table;
        let own_goals = s.own_goals.len() as i32;

        let mut points = AbilityPoints {
            goalkeeping: t.get(AB_SAVE) * s.saves as i32 + t.get(AB_CONCEDE) * s.conceded as i32,
            tackling: t.get(AB_KEY_TACKLE) * s.key_tackles as i32 + t.get(AB_OWN_GOAL) * own_goals,
            passing: t.get(AB_KEY_PASS) * s.key_passes as i32
                + t.get(AB_ASSIST) * s.assists as i32
                + t.get(AB_OWN_GOAL) * own_goals,
            shooting: t.get(AB_GOAL) * s.goals.len() as i32
                + t.get(AB_SHOT_ON) * s.shots_on_target as i32
                + t.get(AB_SHOT_OFF) * s.shots_off_target as i32,
        };

        if s.is_cautioned() {
            add_flat(&mut points, p.position, t.get(AB_YELLOW));
        }
        if s.is_sent_off() {
            add_flat(&mut points, p.position, t.get(AB_RED));
        }
        points
    }

    fn apply_result_bonus(&self, team: &mut MatchTeam, key: &str, rng: &mut MatchRng) {
        let bonus = self.table.get(key);
        if bonus == 0 {
            return;
        }
        debug!(team = %team.name, key, bonus, "applying result bonus");

        for idx in pick_distinct(rng, &team.players, 2, |p| p.stats.minutes_played > 0) {
            let p = &mut team.players[idx];
            add_flat(&mut p.ability.points, p.position, bonus);
        }
    }

    fn apply_clean_sheet(&self, team: &mut MatchTeam, rng: &mut MatchRng) {
        let bonus = self.table.get(AB_CLEAN_SHEET);
        if bonus == 0 {
            return;
        }
        debug!(team = %team.name, bonus, "applying clean sheet bonus");

        let Some(keeper) = team
            .players
            .iter_mut()
            .find(|p| p.is_goalkeeper() && p.stats.minutes_played > 45)
        else {
            warn!(team = %team.name, "no keeper with more than 45 minutes, clean sheet skipped");
            return;
        };
        keeper.ability.points.goalkeeping += bonus;

        let defenders = pick_distinct(rng, &team.players, 1, |p| {
            p.position == Position::DF && p.stats.minutes_played > 0
        });
        for idx in defenders {
            team.players[idx].ability.points.tackling += bonus;
        }
    }
}

/// Keepers take flat bonuses on goalkeeping only, everyone else on the
/// three outfield categories.
fn add_flat(points: &mut AbilityPoints, position: Position, bonus: i32) {
    if position == Position::GK {
        points.goalkeeping += bonus;
    } else {
        points.tackling += bonus;
        points.passing += bonus;
        points.shooting += bonus;
    }
}

/// Draws `count` distinct indices whose players satisfy `eligible`, retrying
/// rejected draws. With fewer eligible players than `count`, all of them are
/// returned.
fn pick_distinct<F>(rng: &mut MatchRng, players: &[MatchPlayer], count: usize, eligible: F) -> Vec<usize>
where
    F: Fn(&MatchPlayer) -> bool,
{
    let available = players.iter().filter(|p| eligible(p)).count();
    if available <= count {
        if available < count {
            warn!(wanted = count, available, "not enough eligible players for bonus");
        }
        return (0..players.len()).filter(|&i| eligible(&players[i])).collect();
    }

    let mut picked = Vec::with_capacity(count);
    while picked.len() < count {
        let i = rng.random(players.len() as u64) as usize;
        if eligible(&players[i]) && !picked.contains(&i) {
            picked.push(i);
        }
    }
    picked
}
