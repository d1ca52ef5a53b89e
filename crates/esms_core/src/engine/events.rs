//! Typed match events.
//!
//! Each taxonomy name is one [`EventData`] variant carrying only the fields
//! that event needs. Player references are [`PlayerRef`] values, so an event
//! never aliases match state.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::team::{PlayerRef, TeamSide};

// ---------------------------------------------------------------------------
// Event payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum EventData {
    // -- Clock --
    KickOff,
    MinuteElapsed {
        minute: u32,
    },
    InjuryTimeAdded {
        injury_time: u32,
    },
    HalfTime,
    FullTime,

    // -- Chances --
    Chance {
        attacker: PlayerRef,
    },
    ChanceBeatsDefender {
        attacker: PlayerRef,
        got_past_defender: PlayerRef,
    },
    AssistedChance {
        attacker: PlayerRef,
        assister: PlayerRef,
    },
    AssistedChanceBeatsDefender {
        attacker: PlayerRef,
        assister: PlayerRef,
        got_past_defender: PlayerRef,
    },

    // -- Shots --
    ShotOnTarget {
        attacker: PlayerRef,
        assister: Option<PlayerRef>,
        opp_keeper: PlayerRef,
        one_on_one: bool,
    },
    ShotOffTarget {
        attacker: PlayerRef,
        one_on_one: bool,
    },
    ShotOffTargetDeflection {
        attacker: PlayerRef,
    },
    ShotTackled {
        attacker: PlayerRef,
        tackler: PlayerRef,
    },
    ShotTackledCorner {
        attacker: PlayerRef,
        tackler: PlayerRef,
    },
    ShotTackledRecovery {
        attacker: PlayerRef,
        tackler: PlayerRef,
    },
    ShotSaved {
        attacker: PlayerRef,
        opp_keeper: PlayerRef,
        one_on_one: bool,
    },
    ShotSavedCorner {
        attacker: PlayerRef,
        opp_keeper: PlayerRef,
    },
    ShotCleared {
        attacker: PlayerRef,
        opp_keeper: PlayerRef,
    },

    // -- Goals --
    GoalScored {
        scorer: PlayerRef,
        assister: Option<PlayerRef>,
        opp_keeper: PlayerRef,
        one_on_one: bool,
        goal_cancelled: bool,
    },
    GoalScoredCancelled {
        scorer: PlayerRef,
    },
    OwnGoalScored {
        scorer: PlayerRef,
        opp_keeper: PlayerRef,
    },

    // -- Corners --
    CornerCaught {
        corner_taker: PlayerRef,
        opp_keeper: PlayerRef,
    },
    CornerCleared {
        corner_taker: PlayerRef,
        corner_defender: PlayerRef,
    },
    CornerShot {
        corner_taker: PlayerRef,
        attacker: PlayerRef,
    },
}

/// Discriminant tag for event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    KickOff,
    MinuteElapsed,
    InjuryTimeAdded,
    HalfTime,
    FullTime,
    Chance,
    ChanceBeatsDefender,
    AssistedChance,
    AssistedChanceBeatsDefender,
    ShotOnTarget,
    ShotOffTarget,
    ShotOffTargetDeflection,
    ShotTackled,
    ShotTackledCorner,
    ShotTackledRecovery,
    ShotSaved,
    ShotSavedCorner,
    ShotCleared,
    GoalScored,
    GoalScoredCancelled,
    OwnGoalScored,
    CornerCaught,
    CornerCleared,
    CornerShot,
}

impl EventKind {
    pub const ALL: [EventKind; 24] = [
        EventKind::KickOff,
        EventKind::MinuteElapsed,
        EventKind::InjuryTimeAdded,
        EventKind::HalfTime,
        EventKind::FullTime,
        EventKind::Chance,
        EventKind::ChanceBeatsDefender,
        EventKind::AssistedChance,
        EventKind::AssistedChanceBeatsDefender,
        EventKind::ShotOnTarget,
        EventKind::ShotOffTarget,
        EventKind::ShotOffTargetDeflection,
        EventKind::ShotTackled,
        EventKind::ShotTackledCorner,
        EventKind::ShotTackledRecovery,
        EventKind::ShotSaved,
        EventKind::ShotSavedCorner,
        EventKind::ShotCleared,
        EventKind::GoalScored,
        EventKind::GoalScoredCancelled,
        EventKind::OwnGoalScored,
        EventKind::CornerCaught,
        EventKind::CornerCleared,
        EventKind::CornerShot,
    ];

    /// Wire name of the event.
    pub fn name(self) -> &'static str {
        match self {
            EventKind::KickOff => "KickOff",
            EventKind::MinuteElapsed => "MinuteElapsed",
            EventKind::InjuryTimeAdded => "InjuryTimeAdded",
            EventKind::HalfTime => "HalfTime",
            EventKind::FullTime => "FullTime",
            EventKind::Chance => "Chance",
            EventKind::ChanceBeatsDefender => "ChanceBeatsDefender",
            EventKind::AssistedChance => "AssistedChance",
            EventKind::AssistedChanceBeatsDefender => "AssistedChanceBeatsDefender",
            EventKind::ShotOnTarget => "ShotOnTarget",
            EventKind::ShotOffTarget => "ShotOffTarget",
            EventKind::ShotOffTargetDeflection => "ShotOffTargetDeflection",
            EventKind::ShotTackled => "ShotTackled",
            EventKind::ShotTackledCorner => "ShotTackledCorner",
            EventKind::ShotTackledRecovery => "ShotTackledRecovery",
            EventKind::ShotSaved => "ShotSaved",
            EventKind::ShotSavedCorner => "ShotSavedCorner",
            EventKind::ShotCleared => "ShotCleared",
            EventKind::GoalScored => "GoalScored",
            EventKind::GoalScoredCancelled => "GoalScoredCancelled",
            EventKind::OwnGoalScored => "OwnGoalScored",
            EventKind::CornerCaught => "CornerCaught",
            EventKind::CornerCleared => "CornerCleared",
            EventKind::CornerShot => "CornerShot",
        }
    }

    /// Events that open a chance in a minute.
    pub fn is_chance(self) -> bool {
        matches!(
            self,
            EventKind::Chance
                | EventKind::ChanceBeatsDefender
                | EventKind::AssistedChance
                | EventKind::AssistedChanceBeatsDefender
        )
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl EventData {
    pub fn kind(&self) -> EventKind {
        match self {
            EventData::KickOff => EventKind::KickOff,
            EventData::MinuteElapsed { .. } => EventKind::MinuteElapsed,
            EventData::InjuryTimeAdded { .. } => EventKind::InjuryTimeAdded,
            EventData::HalfTime => EventKind::HalfTime,
            EventData::FullTime => EventKind::FullTime,
            EventData::Chance { .. } => EventKind::Chance,
            EventData::ChanceBeatsDefender { .. } => EventKind::ChanceBeatsDefender,
            EventData::AssistedChance { .. } => EventKind::AssistedChance,
            EventData::AssistedChanceBeatsDefender { .. } => {
                EventKind::AssistedChanceBeatsDefender
            }
            EventData::ShotOnTarget { .. } => EventKind::ShotOnTarget,
            EventData::ShotOffTarget { .. } => EventKind::ShotOffTarget,
            EventData::ShotOffTargetDeflection { .. } => EventKind::ShotOffTargetDeflection,
            EventData::ShotTackled { .. } => EventKind::ShotTackled,
            EventData::ShotTackledCorner { .. } => EventKind::ShotTackledCorner,
            EventData::ShotTackledRecovery { .. } => EventKind::ShotTackledRecovery,
            EventData::ShotSaved { .. } => EventKind::ShotSaved,
            EventData::ShotSavedCorner { .. } => EventKind::ShotSavedCorner,
            EventData::ShotCleared { .. } => EventKind::ShotCleared,
            EventData::GoalScored { .. } => EventKind::GoalScored,
            EventData::GoalScoredCancelled { .. } => EventKind::GoalScoredCancelled,
            EventData::OwnGoalScored { .. } => EventKind::OwnGoalScored,
            EventData::CornerCaught { .. } => EventKind::CornerCaught,
            EventData::CornerCleared { .. } => EventKind::CornerCleared,
            EventData::CornerShot { .. } => EventKind::CornerShot,
        }
    }
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// One published happening.
///
/// `minute` is match time. `seq` is assigned by the bus when the event is
/// dequeued and logged; it is 0 until then.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub seq: u64,
    pub minute: u32,
    /// Team in possession, for events that have one.
    pub side: Option<TeamSide>,
    pub data: EventData,
}

impl MatchEvent {
    pub fn new(minute: u32, side: Option<TeamSide>, data: EventData) -> Self {
        Self {
            seq: 0,
            minute,
            side,
            data,
        }
    }

    /// Event raised on behalf of a team.
    pub fn team(minute: u32, side: TeamSide, data: EventData) -> Self {
        Self::new(minute, Some(side), data)
    }

    /// Clock event with no team.
    pub fn clock(minute: u32, data: EventData) -> Self {
        Self::new(minute, None, data)
    }

    pub fn kind(&self) -> EventKind {
        self.data.kind()
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }
}
