use std::sync::{Arc, Mutex};

use super::handlers::{CommentaryError, CommentaryProvider};
use super::*;
use crate::error::{MatchError, ValidationError};
use crate::models::team::TeamSide;
use crate::test_fixtures::{balanced_team, referee, stock_tactics};

fn options(seed: u64) -> MatchOptions {
    MatchOptions {
        rng_seed: seed,
        tactics: Some(stock_tactics()),
        config: EngineConfig::default(),
    }
}

fn play(seed: u64) -> MatchOutcome {
    simulate_match(
        &balanced_team("Alpha", "ALP", 12),
        &balanced_team("Bravo", "BRV", 10),
        Some(referee()),
        options(seed),
    )
    .unwrap()
}

fn count(events: &[MatchEvent], kind: EventKind) -> usize {
    events.iter().filter(|e| e.kind() == kind).count()
}

#[test]
fn test_same_seed_same_match() {
    let a = play(1234);
    let b = play(1234);
    assert_eq!(a.result.to_json().unwrap(), b.result.to_json().unwrap());
    assert_eq!(a.events_json().unwrap(), b.events_json().unwrap());
}

#[test]
fn test_zero_seed_reports_replayable_seed() {
    let first = play(0);
    assert_ne!(first.result.rng_seed, 0);

    let replay = play(first.result.rng_seed);
    assert_eq!(first.events, replay.events);
    assert_eq!(first.result, replay.result);
}

#[test]
fn test_clock_with_fixed_injury_time() {
    let mut opts = options(5);
    opts.config.injury_time = config::InjuryTimeConfig::fixed(2, 3);
    let outcome = simulate_match(
        &balanced_team("Alpha", "ALP", 10),
        &balanced_team("Bravo", "BRV", 10),
        None,
        opts,
    )
    .unwrap();
    let events = &outcome.events;

    assert_eq!(events[0].kind(), EventKind::KickOff);
    assert_eq!(count(events, EventKind::KickOff), 1);
    assert_eq!(count(events, EventKind::HalfTime), 1);
    assert_eq!(count(events, EventKind::FullTime), 1);
    assert_eq!(count(events, EventKind::MinuteElapsed), 95);

    let half_time = events.iter().find(|e| e.kind() == EventKind::HalfTime).unwrap();
    assert_eq!(half_time.minute, 47);
    let last = events.last().unwrap();
    assert_eq!(last.kind(), EventKind::FullTime);
    assert_eq!(last.minute, 95);

    let added: Vec<_> = events
        .iter()
        .filter_map(|e| match e.data {
            EventData::InjuryTimeAdded { injury_time } => Some((e.minute, injury_time)),
            _ => None,
        })
        .collect();
    assert_eq!(added, vec![(45, 2), (92, 3)]);
}

#[test]
fn test_regulation_only_is_ninety_minutes() {
    let mut opts = options(8);
    opts.config = EngineConfig::regulation_only();
    let outcome = simulate_match(
        &balanced_team("Alpha", "ALP", 10),
        &balanced_team("Bravo", "BRV", 10),
        None,
        opts,
    )
    .unwrap();

    assert_eq!(count(&outcome.events, EventKind::MinuteElapsed), 90);
    assert_eq!(count(&outcome.events, EventKind::InjuryTimeAdded), 0);
    let half_time = outcome
        .events
        .iter()
        .find(|e| e.kind() == EventKind::HalfTime)
        .unwrap();
    assert_eq!(half_time.minute, 45);
    assert_eq!(outcome.events.last().unwrap().minute, 90);

    let keeper = &outcome.result.home_team.players[0];
    assert_eq!(keeper.stats.minutes_played, 90);
    assert!(outcome
        .result
        .away_team
        .subs()
        .all(|p| p.stats.minutes_played == 0));
}

#[test]
fn test_invalid_lineup_rejected_before_kickoff() {
    let mut home = balanced_team("Alpha", "ALP", 10);
    home.lineup.pop();

    let engine = MatchEngine::new(&home, &balanced_team("Bravo", "BRV", 10), None, options(3))
        .unwrap();
    let err = engine.run().unwrap_err();
    assert!(matches!(
        err,
        MatchError::Validation(ValidationError::InvalidLineupSize { found: 10, .. })
    ));
}

#[test]
fn test_unknown_player_rejected_at_construction() {
    let mut away = balanced_team("Bravo", "BRV", 10);
    away.lineup[6].name = "Ghost".into();
    let err = MatchEngine::new(&balanced_team("Alpha", "ALP", 10), &away, None, options(3))
        .unwrap_err();
    assert!(err.is_fatal());
}

#[test]
fn test_invalid_config_rejected_at_construction() {
    let mut opts = options(3);
    opts.config.fatigue.decay_per_minute = 1.5;
    let err = MatchEngine::new(
        &balanced_team("Alpha", "ALP", 10),
        &balanced_team("Bravo", "BRV", 10),
        None,
        opts,
    )
    .unwrap_err();
    assert!(matches!(err, MatchError::Configuration(_)));
}

#[test]
fn test_score_matches_goal_events() {
    for seed in [3, 17, 42, 99, 2024] {
        let outcome = play(seed);
        for side in [TeamSide::Home, TeamSide::Away] {
            let from_events = outcome
                .events
                .iter()
                .filter(|e| e.side == Some(side))
                .filter(|e| match e.data {
                    EventData::GoalScored { goal_cancelled, .. } => !goal_cancelled,
                    EventData::OwnGoalScored { .. } => true,
                    _ => false,
                })
                .count();
            assert_eq!(outcome.result.goals_for(side), from_events, "seed {seed}");

            let team = outcome.result.team(side);
            let scored: usize = team.players.iter().map(|p| p.stats.goals.len()).sum();
            let own_goals = team.stats.goals.iter().filter(|g| g.own_goal).count();
            assert_eq!(scored + own_goals, team.goal_count());
        }
    }
}

#[test]
fn test_possession_sums_to_hundred() {
    let outcome = play(77);
    let home = outcome.result.home_team.stats.possession;
    let away = outcome.result.away_team.stats.possession;
    assert_eq!(home + away, 100);
    assert!(home > 0 && away > 0);
}

#[test]
fn test_event_seq_is_dense() {
    let outcome = play(11);
    for (i, e) in outcome.events.iter().enumerate() {
        assert_eq!(e.seq, i as u64);
    }
}

#[test]
fn test_stronger_team_scores_more_over_many_matches() {
    let strong = balanced_team("Alpha", "ALP", 18);
    let weak = balanced_team("Bravo", "BRV", 6);
    let (mut strong_goals, mut weak_goals) = (0, 0);
    for seed in 1..=30 {
        let outcome = simulate_match(&strong, &weak, None, options(seed)).unwrap();
        let (h, a) = outcome.result.score();
        strong_goals += h;
        weak_goals += a;
    }
    assert!(strong_goals > weak_goals, "{strong_goals} vs {weak_goals}");
}

/// Equal 4-4-2 sides (keepers on 15 goalkeeping), stock tactics, default
/// config. Any change to draw order or formulas moves this line.
#[test]
fn test_seed_42_golden_match() {
    let outcome = simulate_match(
        &balanced_team("Alpha", "ALP", 10),
        &balanced_team("Bravo", "BRV", 10),
        Some(referee()),
        options(42),
    )
    .unwrap();
    let result = &outcome.result;
    assert_eq!(result.home_team.players[0].base.goalkeeping, 15);

    let (home, away) = result.score();
    let (h, a) = (&result.home_team.stats, &result.away_team.stats);
    let summary = format!(
        "{home}-{away} | home {:?} | away {:?} | possession {}-{} | shots {}/{} vs {}/{} | full time {}",
        result.scorers(TeamSide::Home),
        result.scorers(TeamSide::Away),
        h.possession,
        a.possession,
        h.shots_on_target,
        h.shots_off_target,
        a.shots_on_target,
        a.shots_off_target,
        outcome.events.last().map(|e| e.minute).unwrap_or_default(),
    );
    insta::assert_snapshot!(summary, @"0-0 | home [] | away [] | possession 50-50 | shots 3/7 vs 3/2 | full time 98");

    let again = simulate_match(
        &balanced_team("Alpha", "ALP", 10),
        &balanced_team("Bravo", "BRV", 10),
        Some(referee()),
        options(42),
    )
    .unwrap();
    assert_eq!(again.events, outcome.events);
}

struct Recorder {
    seen: Arc<Mutex<Vec<u64>>>,
}

impl CommentaryProvider for Recorder {
    fn write_commentary(
        &mut self,
        event: &MatchEvent,
        _: &MatchState,
    ) -> std::result::Result<(), CommentaryError> {
        self.seen.lock().unwrap().push(event.seq);
        if event.kind() == EventKind::HalfTime {
            return Err(CommentaryError("no half-time template".into()));
        }
        Ok(())
    }
}

#[test]
fn test_commentary_sees_every_event_and_cannot_break_the_match() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let engine = MatchEngine::new(
        &balanced_team("Alpha", "ALP", 10),
        &balanced_team("Bravo", "BRV", 10),
        None,
        options(21),
    )
    .unwrap()
    .with_commentary(Box::new(Recorder { seen: seen.clone() }));

    let outcome = engine.run().unwrap();
    let seen = seen.lock().unwrap();
    let logged: Vec<u64> = outcome.events.iter().map(|e| e.seq).collect();
    assert_eq!(*seen, logged);
}

struct KickOffCounter {
    calls: Arc<Mutex<u32>>,
}

impl EventHandler for KickOffCounter {
    fn name(&self) -> &str {
        "kickoff_counter"
    }

    fn handle(&mut self, event: &MatchEvent, state: &mut MatchState) -> crate::Result<Vec<MatchEvent>> {
        if event.kind() == EventKind::KickOff {
            *self.calls.lock().unwrap() += 1;
            // recalculation handlers have already run
            assert!(state.home.shot_probability > 0);
        }
        Ok(Vec::new())
    }
}

#[test]
fn test_user_handler_runs_after_builtins() {
    let calls = Arc::new(Mutex::new(0));
    let mut engine = MatchEngine::new(
        &balanced_team("Alpha", "ALP", 10),
        &balanced_team("Bravo", "BRV", 10),
        None,
        options(4),
    )
    .unwrap();
    engine.subscribe(Box::new(KickOffCounter {
        calls: calls.clone(),
    }));
    assert_eq!(engine.rng_seed(), 4);

    engine.run().unwrap();
    assert_eq!(*calls.lock().unwrap(), 1);
}

#[test]
fn test_engine_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<MatchEngine>();
    assert_send::<MatchOutcome>();
}
