pub mod conditional;
pub mod match_result;
pub mod player;
pub mod tactics;
pub mod team;

pub use conditional::{aggression_override, Condition, Conditional, ConditionalAction};
pub use match_result::MatchResult;
pub use player::{
    AbilityPoints, LineupEntry, MatchPlayer, Player, PlayerAbilities, PlayerGameStats, Position,
};
pub use tactics::{Tactic, TacticMultipliers, TacticsMatrix};
pub use team::{Goal, MatchTeam, PlayerRef, Referee, TeamConfig, TeamSide, TeamStats};
