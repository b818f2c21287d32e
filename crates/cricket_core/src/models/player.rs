//! Player identity and career statistics.
//!
//! The engine never owns players: rosters come in with the match and go back
//! out with it. Career stats (`PlayerStats`) are only touched once a match
//! completes, when the per-match figures are folded in.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub stats: PlayerStats,
}

impl Player {
    /// Create a new player with a generated id and an empty career record.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            stats: PlayerStats::default(),
        }
    }
}

/// Career aggregate, accumulated across completed matches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PlayerStats {
    pub matches: u32,
    // Batting
    pub runs: u32,
    pub balls_faced: u32,
    pub fours: u32,
    pub sixes: u32,
    pub not_outs: u32,
    pub highest_score: u32,
    pub fifties: u32,
    pub hundreds: u32,
    // Bowling
    pub wickets: u32,
    pub balls_bowled: u32,
    pub runs_conceded: u32,
    pub five_wicket_hauls: u32,
    pub best_bowling: Option<BowlingBest>,
    // Fielding
    pub catches: u32,
    pub run_outs: u32,
    pub stumpings: u32,
    // Awards
    pub man_of_the_match_awards: u32,
}

impl PlayerStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Career batting average. `None` until at least one dismissal exists,
    /// since an average over zero dismissals is undefined.
    pub fn batting_average(&self) -> Option<f64> {
        let dismissals = self.matches.saturating_sub(self.not_outs);
        if dismissals == 0 {
            return None;
        }
        Some(self.runs as f64 / dismissals as f64)
    }

    /// Career bowling economy in runs per over, `None` before any ball bowled.
    pub fn bowling_economy(&self) -> Option<f64> {
        if self.balls_bowled == 0 {
            return None;
        }
        Some(self.runs_conceded as f64 * 6.0 / self.balls_bowled as f64)
    }

    /// Fold a match bowling return into the career best if it beats it.
    pub fn update_best_bowling(&mut self, wickets: u32, runs: u32) {
        if wickets == 0 {
            return;
        }
        let candidate = BowlingBest { wickets, runs };
        match &self.best_bowling {
            Some(best) if !candidate.is_better_than(best) => {}
            _ => self.best_bowling = Some(candidate),
        }
    }
}

/// Best bowling figures in a single match, e.g. "5/23".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BowlingBest {
    pub wickets: u32,
    pub runs: u32,
}

impl BowlingBest {
    /// More wickets wins; equal wickets for fewer runs wins.
    pub fn is_better_than(&self, other: &BowlingBest) -> bool {
        self.wickets > other.wickets || (self.wickets == other.wickets && self.runs < other.runs)
    }
}

impl fmt::Display for BowlingBest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.wickets, self.runs)
    }
}
