//! # Match Engine
//!
//! Minute-by-minute simulation driven by a single seeded RNG.
//!
//! [`MatchEngine::run`] validates both teamsheets, subscribes the stat and
//! recalculation handlers to a fresh [`EventBus`], then plays the clock:
//! every minute the team order and the flow order are shuffled, each flow
//! runs for each team, and the events it returns are published. Injury time
//! is fixed at the end of each regulation half.
//!
//! ```rust
//! use esms_core::engine::{simulate_match, MatchOptions};
//! # use esms_core::models::{LineupEntry, Player, PlayerAbilities, Position, TeamConfig};
//! # fn team(name: &str) -> TeamConfig {
//! #     let slots = [
//! #         Position::GK, Position::DF, Position::DF, Position::DF, Position::DF,
//! #         Position::MF, Position::MF, Position::MF, Position::MF, Position::FW, Position::FW,
//! #         Position::GK, Position::DF, Position::MF,
//! #     ];
//! #     let mut config = TeamConfig {
//! #         name: name.into(), code: name[..3].to_uppercase(), manager: String::new(),
//! #         tactic: "N".into(), roster: vec![], lineup: vec![], subs: vec![], conditionals: vec![],
//! #     };
//! #     for (i, pos) in slots.into_iter().enumerate() {
//! #         let player_name = format!("{name} {i}");
//! #         config.roster.push(Player::new(&player_name, pos, PlayerAbilities::new(12, 10, 10, 10, 10)));
//! #         let entry = LineupEntry::new(player_name, pos);
//! #         if i < 11 { config.lineup.push(entry) } else { config.subs.push(entry) }
//! #     }
//! #     config
//! # }
//! let options = MatchOptions {
//!     rng_seed: 42,
//!     ..MatchOptions::default()
//! };
//! let outcome = simulate_match(&team("Alpha"), &team("Bravo"), None, options).unwrap();
//! let (home, away) = outcome.result.score();
//! println!("{home}-{away} in {} events", outcome.events.len());
//! ```

pub mod bonus;
pub mod config;
pub mod event_bus;
pub mod events;
pub mod flows;
pub mod formulas;
pub mod handlers;
pub mod match_state;
pub mod rng;
pub mod selection;
pub mod validators;

#[cfg(test)]
mod tests;

pub use bonus::BonusCalculator;
pub use config::EngineConfig;
pub use event_bus::{EventBus, EventHandler, HandlerId};
pub use events::{EventData, EventKind, MatchEvent};
pub use match_state::{Half, MatchState};
pub use rng::MatchRng;
pub use validators::{TeamValidator, Validator};

use tracing::{debug, info};

use self::flows::{FlowContext, TopLevelFlow};
use self::handlers::{
    AbilityCalculator, CommentaryHandler, CommentaryProvider, FatigueCalculator,
    MatchStatsRecorder, ProbabilityCalculator, StatsUpdater,
};
use crate::error::Result;
use crate::models::match_result::MatchResult;
use crate::models::tactics::TacticsMatrix;
use crate::models::team::{MatchTeam, Referee, TeamConfig, TeamSide};

/// Regulation minutes per half.
pub const HALF_LENGTH: u32 = 45;

/// Per-match knobs.
#[derive(Debug, Clone, Default)]
pub struct MatchOptions {
    /// 0 picks a fresh seed; the one used is reported in the result.
    pub rng_seed: u64,
    /// Per tactic and position multipliers. `None` plays everyone at 1.0.
    pub tactics: Option<TacticsMatrix>,
    pub config: EngineConfig,
}

/// Final result plus the full event log in dispatch order.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub result: MatchResult,
    pub events: Vec<MatchEvent>,
}

impl MatchOutcome {
    pub fn events_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.events)?)
    }
}

pub struct MatchEngine {
    state: MatchState,
    bus: EventBus,
    rng: MatchRng,
    tactics: Option<TacticsMatrix>,
    config: EngineConfig,
    extra_handlers: Vec<Box<dyn EventHandler>>,
    commentary: Option<Box<dyn CommentaryProvider>>,
}

impl std::fmt::Debug for MatchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchEngine")
            .field("home", &self.state.home.name)
            .field("away", &self.state.away.name)
            .field("seed", &self.rng.seed())
            .field("extra_handlers", &self.extra_handlers.len())
            .field("commentary", &self.commentary.is_some())
            .finish()
    }
}

impl MatchEngine {
    /// Builds match state from both teamsheets. An invalid config and names
    /// missing from a roster are rejected here; the lineup rules are checked
    /// by [`MatchEngine::run`].
    pub fn new(
        home: &TeamConfig,
        away: &TeamConfig,
        referee: Option<Referee>,
        options: MatchOptions,
    ) -> Result<Self> {
        options.config.validate()?;
        let home = MatchTeam::from_config(TeamSide::Home, home)?;
        let away = MatchTeam::from_config(TeamSide::Away, away)?;

        Ok(Self {
            state: MatchState::new(home, away, referee),
            bus: EventBus::new(),
            rng: MatchRng::new(options.rng_seed),
            tactics: options.tactics,
            config: options.config,
            extra_handlers: Vec::new(),
            commentary: None,
        })
    }

    /// Commentary runs after every other handler.
    pub fn with_commentary(mut self, provider: Box<dyn CommentaryProvider>) -> Self {
        self.commentary = Some(provider);
        self
    }

    /// Adds a handler behind the built-in ones.
    pub fn subscribe(&mut self, handler: Box<dyn EventHandler>) {
        self.extra_handlers.push(handler);
    }

    pub fn rng_seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn run(mut self) -> Result<MatchOutcome> {
        let validator = TeamValidator::new(self.config.league.clone());
        validator.validate(&self.state.home)?;
        validator.validate(&self.state.away)?;

        self.register_handlers();

        info!(
            home = %self.state.home.name,
            away = %self.state.away.name,
            seed = self.rng.seed(),
            "kick off"
        );
        self.publish(EventData::KickOff)?;

        let mut regulation_end = HALF_LENGTH;
        let mut half_end: Option<u32> = None;

        loop {
            self.play_minute()?;

            self.state.minute += 1;
            let minute = self.state.minute;
            self.publish(EventData::MinuteElapsed { minute })?;

            if half_end.is_none() && minute == regulation_end {
                let half_idx = if self.state.half == Half::First { 0 } else { 1 };
                let injury_time = self.config.injury_time.roll(half_idx, &mut self.rng);
                self.state.injury_time = injury_time;
                if injury_time > 0 {
                    debug!(minute, injury_time, "injury time added");
                    self.publish(EventData::InjuryTimeAdded { injury_time })?;
                }
                half_end = Some(minute + injury_time);
            }

            if half_end == Some(minute) {
                half_end = None;
                match self.state.half {
                    Half::First => {
                        let (home, away) = self.state.score();
                        info!(minute, home, away, "half time");
                        self.publish(EventData::HalfTime)?;
                        self.state.half = Half::Second;
                        self.state.injury_time = 0;
                        regulation_end = minute + HALF_LENGTH;
                    }
                    Half::Second | Half::Finished => {
                        self.publish(EventData::FullTime)?;
                        self.state.half = Half::Finished;
                        let (home, away) = self.state.score();
                        info!(minute, home, away, "full time");
                        break;
                    }
                }
            }
        }

        let seed = self.rng.seed();
        let events = self.bus.take_event_log();
        Ok(MatchOutcome {
            result: self.state.into_result(seed),
            events,
        })
    }

    fn register_handlers(&mut self) {
        let cfg = &self.config;
        self.bus.subscribe(Box::new(MatchStatsRecorder::new()));
        self.bus
            .subscribe(Box::new(FatigueCalculator::new(cfg.fatigue.clone())));
        self.bus.subscribe(Box::new(AbilityCalculator::new(
            self.tactics.clone(),
            cfg.aggression.clone(),
        )));
        self.bus
            .subscribe(Box::new(StatsUpdater::new(cfg.possession.clone())));
        self.bus
            .subscribe(Box::new(ProbabilityCalculator::new(cfg.flow.clone())));

        for handler in self.extra_handlers.drain(..) {
            self.bus.subscribe(handler);
        }
        if let Some(provider) = self.commentary.take() {
            self.bus.subscribe(Box::new(CommentaryHandler::new(provider)));
        }
    }

    fn publish(&mut self, data: EventData) -> Result<()> {
        let event = MatchEvent::clock(self.state.minute, data);
        self.bus.publish(event, &mut self.state)
    }

    /// One minute of play. Events carry the minute being played.
    fn play_minute(&mut self) -> Result<()> {
        let minute = self.state.minute + 1;
        let mut sides = [TeamSide::Home, TeamSide::Away];
        self.rng.shuffle(&mut sides);

        for side in sides {
            let mut order = TopLevelFlow::ALL;
            self.rng.shuffle(&mut order);

            for flow in order {
                let events = {
                    let (team, opponent) = self.state.pair(side);
                    let mut ctx =
                        FlowContext::new(team, opponent, &mut self.rng, &self.config.flow, minute);
                    flow.run(&mut ctx)?
                };
                if !events.is_empty() {
                    debug!(minute, %side, %flow, count = events.len(), "flow events");
                }
                self.bus.publish_all(events, &mut self.state)?;
            }
        }
        Ok(())
    }
}

/// Builds, validates and plays one match.
pub fn simulate_match(
    home: &TeamConfig,
    away: &TeamConfig,
    referee: Option<Referee>,
    options: MatchOptions,
) -> Result<MatchOutcome> {
    MatchEngine::new(home, away, referee, options)?.run()
}
