use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Teamsheet position codes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    GK,
    DF,
    DM,
    MF,
    AM,
    FW,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::GK,
        Position::DF,
        Position::DM,
        Position::MF,
        Position::AM,
        Position::FW,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::DF => "DF",
            Position::DM => "DM",
            Position::MF => "MF",
            Position::AM => "AM",
            Position::FW => "FW",
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::GK)
    }

    pub fn is_defender(&self) -> bool {
        matches!(self, Position::DF)
    }

    /// DM, MF and AM all count towards the midfield band.
    pub fn is_midfielder(&self) -> bool {
        matches!(self, Position::DM | Position::MF | Position::AM)
    }

    pub fn is_forward(&self) -> bool {
        matches!(self, Position::FW)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Position::ALL
            .iter()
            .copied()
            .find(|p| p.code() == code)
            .ok_or_else(|| format!("unrecognised position: {:?}", s))
    }
}

/// Ability points earned through the post-match bonus overlay.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbilityPoints {
    pub goalkeeping: i32,
    pub tackling: i32,
    pub passing: i32,
    pub shooting: i32,
}

impl AbilityPoints {
    pub fn is_zero(&self) -> bool {
        *self == AbilityPoints::default()
    }
}

/// Five skill scalars plus the bonus ability points.
///
/// Used both for a player's base skills and for the per-minute in-match
/// snapshot, which is always an owned copy.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAbilities {
    pub goalkeeping: u32,
    pub tackling: u32,
    pub passing: u32,
    pub shooting: u32,
    pub aggression: u32,
    #[serde(default)]
    pub points: AbilityPoints,
}

impl PlayerAbilities {
    pub fn new(goalkeeping: u32, tackling: u32, passing: u32, shooting: u32, aggression: u32) -> Self {
        Self {
            goalkeeping,
            tackling,
            passing,
            shooting,
            aggression,
            points: AbilityPoints::default(),
        }
    }

    /// Skills zeroed, points kept.
    pub fn cleared(&self) -> Self {
        Self {
            points: self.points,
            ..Self::default()
        }
    }
}

/// Static roster entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub name: String,
    /// Natural position on the roster. The teamsheet may field the player elsewhere.
    pub position: Position,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub nationality: String,
    pub abilities: PlayerAbilities,
    #[serde(default)]
    pub weeks_injured: u32,
    #[serde(default)]
    pub games_suspended: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, position: Position, abilities: PlayerAbilities) -> Self {
        Self {
            name: name.into(),
            position,
            age: 0,
            nationality: String::new(),
            abilities,
            weeks_injured: 0,
            games_suspended: 0,
        }
    }

    pub fn is_injured(&self) -> bool {
        self.weeks_injured > 0
    }

    pub fn is_suspended(&self) -> bool {
        self.games_suspended > 0
    }
}

/// One teamsheet slot: who plays and where.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineupEntry {
    pub name: String,
    pub position: Position,
}

impl LineupEntry {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// Per-match counters for one player.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlayerGameStats {
    pub minutes_played: u32,
    pub saves: u32,
    pub key_tackles: u32,
    pub key_passes: u32,
    pub assists: u32,
    pub shots_on_target: u32,
    pub shots_off_target: u32,
    /// Minute of every goal scored.
    pub goals: Vec<u32>,
    pub conceded: u32,
    /// Minute of every own goal.
    pub own_goals: Vec<u32>,
    pub fouls: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub is_injured: bool,
    pub is_subbed: bool,
}

impl PlayerGameStats {
    pub fn is_cautioned(&self) -> bool {
        self.yellow_cards > 0
    }

    pub fn is_sent_off(&self) -> bool {
        self.red_cards > 0
    }
}

/// Match-scoped state of one player.
///
/// `roster_index` is the stable identifier of the static [`Player`] this
/// snapshot was copied from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchPlayer {
    pub roster_index: usize,
    pub name: String,
    pub nationality: String,
    /// Position on the teamsheet.
    pub position: Position,
    pub base: PlayerAbilities,
    pub ability: PlayerAbilities,
    /// Fatigue multiplier in (0, 1].
    pub condition: f64,
    pub is_active: bool,
    pub is_sub: bool,
    pub weeks_injured: u32,
    pub games_suspended: u32,
    pub stats: PlayerGameStats,
}

impl MatchPlayer {
    pub fn from_roster(roster_index: usize, player: &Player, position: Position, is_sub: bool) -> Self {
        Self {
            roster_index,
            name: player.name.clone(),
            nationality: player.nationality.clone(),
            position,
            base: player.abilities,
            ability: PlayerAbilities::default(),
            condition: 1.0,
            is_active: !is_sub,
            is_sub,
            weeks_injured: player.weeks_injured,
            games_suspended: player.games_suspended,
            stats: PlayerGameStats::default(),
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.position.is_goalkeeper()
    }

    pub fn is_injured(&self) -> bool {
        self.weeks_injured > 0 || self.stats.is_injured
    }

    pub fn is_suspended(&self) -> bool {
        self.games_suspended > 0
    }
}
