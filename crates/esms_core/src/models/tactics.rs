use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::player::Position;

/// Whitelisted team tactics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Tactic {
    #[serde(rename = "C")]
    Counter,
    #[serde(rename = "A")]
    Attacking,
    #[serde(rename = "E")]
    European,
    #[serde(rename = "D")]
    Defensive,
    #[serde(rename = "N")]
    Normal,
    #[serde(rename = "L")]
    LongBall,
    #[serde(rename = "P")]
    Passing,
}

impl Tactic {
    pub const ALL: [Tactic; 7] = [
        Tactic::Counter,
        Tactic::Attacking,
        Tactic::European,
        Tactic::Defensive,
        Tactic::Normal,
        Tactic::LongBall,
        Tactic::Passing,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Tactic::Counter => "C",
            Tactic::Attacking => "A",
            Tactic::European => "E",
            Tactic::Defensive => "D",
            Tactic::Normal => "N",
            Tactic::LongBall => "L",
            Tactic::Passing => "P",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Tactic::Counter => "Counter Attack",
            Tactic::Attacking => "Attacking",
            Tactic::European => "European",
            Tactic::Defensive => "Defensive",
            Tactic::Normal => "Normal",
            Tactic::LongBall => "Long Ball",
            Tactic::Passing => "Passing",
        }
    }
}

impl fmt::Display for Tactic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Tactic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Tactic::ALL
            .iter()
            .copied()
            .find(|t| t.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| format!("unrecognised tactic: {:?}", s))
    }
}

/// Ability multipliers for one tactic and position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TacticMultipliers {
    pub tackling: f64,
    pub passing: f64,
    pub shooting: f64,
}

impl TacticMultipliers {
    pub const IDENTITY: TacticMultipliers = TacticMultipliers {
        tackling: 1.0,
        passing: 1.0,
        shooting: 1.0,
    };
}

/// Lookup from `"<tactic>_<position>"` to `[tackling, passing, shooting]`.
///
/// Entries are kept as raw vectors so malformed rows can be loaded and then
/// ignored at lookup time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct TacticsMatrix {
    entries: BTreeMap<String, Vec<f64>>,
}

impl TacticsMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(tactic: &str, position: Position) -> String {
        format!("{}_{}", tactic, position)
    }

    pub fn insert(&mut self, tactic: &str, position: Position, values: Vec<f64>) {
        self.entries.insert(Self::key(tactic, position), values);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Multipliers for a tactic/position pair. Missing or malformed entries
    /// resolve to identity.
    pub fn multipliers(&self, tactic: &str, position: Position) -> TacticMultipliers {
        match self.entries.get(&Self::key(tactic, position)) {
            Some(v) if v.len() == 3 => TacticMultipliers {
                tackling: v[0],
                passing: v[1],
                shooting: v[2],
            },
            _ => TacticMultipliers::IDENTITY,
        }
    }

    /// Parses the legacy text format, one row per line:
    ///
    /// ```text
    /// N:DF [1.0, 0.5, 0.25]
    /// AvsD:FW [1.0, 1.0, 1.25]
    /// ```
    ///
    /// Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Result<Self, String> {
        let mut matrix = TacticsMatrix::new();
        for (idx, raw) in text.lines().enumerate() {
            let row = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (head, body) = line
                .split_once(char::is_whitespace)
                .ok_or_else(|| format!("invalid format on row {}: {:?}", row, line))?;
            let (tactic, position) = head
                .split_once(':')
                .ok_or_else(|| format!("invalid format on row {}: {:?}", row, line))?;

            let tactic = tactic.trim();
            let valid_tactic = match tactic.split_once("vs") {
                Some((a, b)) => a.parse::<Tactic>().is_ok() && b.parse::<Tactic>().is_ok(),
                None => tactic.parse::<Tactic>().is_ok(),
            };
            if !valid_tactic {
                return Err(format!("unrecognised tactic on row {}: {:?}", row, tactic));
            }
            let position: Position = position
                .parse()
                .map_err(|_| format!("unrecognised position on row {}: {:?}", row, position))?;

            let inner = body
                .trim()
                .strip_prefix('[')
                .and_then(|s| s.strip_suffix(']'))
                .ok_or_else(|| format!("invalid value matrix on row {}: {:?}", row, body))?;
            let values = inner
                .split(',')
                .map(|v| v.trim().parse::<f64>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| format!("invalid value on row {}: {}", row, e))?;
            if values.len() != 3 {
                return Err(format!("invalid value matrix on row {}: {:?}", row, body));
            }

            matrix.insert(tactic, position, values);
        }
        Ok(matrix)
    }
}
