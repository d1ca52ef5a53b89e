//! Shared builders for unit tests.

use crate::engine::config::{AggressionConfig, FlowConfig};
use crate::engine::handlers::{AbilityCalculator, ProbabilityCalculator};
use crate::engine::match_state::MatchState;
use crate::models::player::{LineupEntry, Player, PlayerAbilities, Position};
use crate::models::tactics::TacticsMatrix;
use crate::models::team::{MatchTeam, Referee, TeamConfig, TeamSide};

fn player(name: String, position: Position, abilities: PlayerAbilities) -> Player {
    let mut p = Player::new(name, position, abilities);
    p.nationality = "eng".into();
    p.age = 25;
    p
}

/// 4-4-2 with five subs. The starting goalkeeper has `skill + 5` goalkeeping.
///
/// Slots: 0 GK, 1-4 DF, 5-8 MF, 9-10 FW, then subs GK, DF, MF, MF, FW.
pub fn balanced_team(name: &str, code: &str, skill: u32) -> TeamConfig {
    let mut roster = Vec::new();
    let mut lineup = Vec::new();
    let mut subs = Vec::new();

    let mut add = |label: String, pos: Position, ab: PlayerAbilities, bench: bool| {
        roster.push(player(label.clone(), pos, ab));
        let entry = LineupEntry::new(label, pos);
        if bench {
            subs.push(entry);
        } else {
            lineup.push(entry);
        }
    };

    add(format!("{code} GK"), Position::GK, PlayerAbilities::new(skill + 5, 3, 3, 1, 5), false);
    for i in 1..=4 {
        add(
            format!("{code} DF{i}"),
            Position::DF,
            PlayerAbilities::new(1, skill + 4, skill, skill / 2, 10),
            false,
        );
    }
    for i in 1..=4 {
        add(
            format!("{code} MF{i}"),
            Position::MF,
            PlayerAbilities::new(1, skill, skill + 4, skill / 2 + 2, 8),
            false,
        );
    }
    for i in 1..=2 {
        add(
            format!("{code} FW{i}"),
            Position::FW,
            PlayerAbilities::new(1, skill / 2, skill, skill + 5, 7),
            false,
        );
    }

    add(format!("{code} GK2"), Position::GK, PlayerAbilities::new(skill, 2, 2, 1, 5), true);
    add(format!("{code} DF5"), Position::DF, PlayerAbilities::new(1, skill + 2, skill, skill / 2, 10), true);
    add(format!("{code} MF5"), Position::MF, PlayerAbilities::new(1, skill, skill + 2, skill / 2, 8), true);
    add(format!("{code} MF6"), Position::MF, PlayerAbilities::new(1, skill, skill + 2, skill / 2, 8), true);
    add(format!("{code} FW3"), Position::FW, PlayerAbilities::new(1, skill / 2, skill, skill + 3, 7), true);

    TeamConfig {
        name: name.to_string(),
        code: code.to_string(),
        manager: format!("{name} Manager"),
        tactic: "N".to_string(),
        roster,
        lineup,
        subs,
        conditionals: Vec::new(),
    }
}

pub fn stock_tactics() -> TacticsMatrix {
    let mut m = TacticsMatrix::new();
    for tactic in ["N", "A", "D", "P", "C", "L", "E"] {
        m.insert(tactic, Position::DF, vec![1.0, 0.5, 0.25]);
        m.insert(tactic, Position::DM, vec![0.8, 0.8, 0.3]);
        m.insert(tactic, Position::MF, vec![0.5, 1.0, 0.5]);
        m.insert(tactic, Position::AM, vec![0.3, 0.8, 0.8]);
        m.insert(tactic, Position::FW, vec![0.25, 0.5, 1.0]);
    }
    m.insert("A", Position::FW, vec![0.2, 0.5, 1.25]);
    m.insert("D", Position::DF, vec![1.25, 0.5, 0.2]);
    m
}

pub fn referee() -> Referee {
    Referee {
        name: "R. Whistle".into(),
        nationality: "eng".into(),
    }
}

pub fn sample_state() -> MatchState {
    let home = MatchTeam::from_config(TeamSide::Home, &balanced_team("Alpha", "ALP", 10))
        .expect("home fixture");
    let away = MatchTeam::from_config(TeamSide::Away, &balanced_team("Bravo", "BRV", 10))
        .expect("away fixture");
    MatchState::new(home, away, Some(referee()))
}

/// Sample state with kickoff abilities and probabilities in place.
pub fn prepared_state() -> MatchState {
    let mut state = sample_state();
    let ability = AbilityCalculator::new(Some(stock_tactics()), AggressionConfig::default());
    ability.visit(&mut state.home);
    ability.visit(&mut state.away);

    let prob = ProbabilityCalculator::new(FlowConfig::default());
    state.home.shot_probability = prob.shot_probability(&state.home, &state.away);
    state.away.shot_probability = prob.shot_probability(&state.away, &state.home);
    state
}
