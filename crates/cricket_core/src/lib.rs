//! # cricket_core - Ball-by-Ball Cricket Scoring Engine
//!
//! This library scores a limited-overs cricket match delivery by delivery
//! and derives everything downstream — innings completion, the match
//! result, and the man of the match — from an append-only ball ledger.
//!
//! ## Features
//! - Pure, caller-owned state: every operation takes the match value
//!   explicitly; the engine keeps no globals and no copies
//! - Full procedural rules: 6-ball overs, bowler rotation restriction,
//!   strike rotation, innings-ending conditions
//! - Exact undo/redo of the most recent delivery
//! - Weighted batting/bowling/fielding performance ranking

pub mod analysis;
pub mod engine;
pub mod error;
pub mod models;

pub use analysis::{
    innings_scorecard, result_text, select_man_of_the_match, InningsScorecard,
    PerformanceBreakdown, PlayerMatchFigures,
};
pub use engine::{
    apply, can_bowl_next_over, eligible_bowlers, is_innings_complete, is_over_complete, redo,
    set_next_bowler, should_rotate, undo, DeliveryOutcome, UndoRedo,
};
pub use error::{Result, ScoringError};
pub use models::{
    Ball, BowlingBest, DismissalKind, Extra, ExtrasBreakdown, FallOfWicket, MatchState, Player,
    PlayerStats, TeamInnings, TeamRef, Toss, TossDecision, WicketDetails,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
