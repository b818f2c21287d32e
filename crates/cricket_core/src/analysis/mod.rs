//! Post-hoc derivation: match figures, performance scoring, result text,
//! career folding, and scorecards. Everything here reads the ledger and the
//! innings aggregates; only the career fold writes anything back.

pub mod career;
pub mod figures;
pub mod performance;
pub mod result;
pub mod scorecard;

pub use figures::{
    BattingFigures, BowlingFigures, FieldingFigures, PlayerMatchFigures,
};
pub use performance::{breakdown, select_man_of_the_match, PerformanceBreakdown};
pub use result::result_text;
pub use scorecard::{innings_scorecard, BattingLine, BowlingLine, InningsScorecard};
