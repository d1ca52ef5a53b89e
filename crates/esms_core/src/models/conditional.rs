//! Teamsheet conditionals.
//!
//! Only the static `AGG` action is consumed by the match loop. The other
//! actions are carried as parsed data; they have no trigger points yet.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConditionalAction {
    Agg,
    ChangeAgg,
    ChangePos,
    Sub,
    Tactic,
}

/// `<event> <operator> <value>`, e.g. `MIN >= 60` or `SCORE < 0`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Condition {
    pub event: String,
    pub operator: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conditional {
    pub action: ConditionalAction,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

impl Conditional {
    /// Static aggression level for the whole match.
    pub fn aggression(level: u32) -> Self {
        Self {
            action: ConditionalAction::Agg,
            values: vec![level.to_string()],
            conditions: Vec::new(),
        }
    }

    /// The level carried by an `AGG` conditional.
    pub fn aggression_level(&self) -> Option<u32> {
        if self.action != ConditionalAction::Agg {
            return None;
        }
        self.values.first().and_then(|v| v.trim().parse().ok())
    }
}

/// Level of the first `AGG` conditional. An unreadable level on that entry
/// yields `None`; later `AGG` entries are not consulted.
pub fn aggression_override(conditionals: &[Conditional]) -> Option<u32> {
    conditionals
        .iter()
        .find(|c| c.action == ConditionalAction::Agg)
        .and_then(Conditional::aggression_level)
}
