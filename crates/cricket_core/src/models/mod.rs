pub mod ball;
pub mod match_state;
pub mod player;
pub mod team;

pub use ball::{Ball, DismissalKind, Extra, WicketDetails};
pub use match_state::{MatchState, TeamRef, Toss, TossDecision};
pub use player::{BowlingBest, Player, PlayerStats};
pub use team::{ExtrasBreakdown, FallOfWicket, TeamInnings};
