//! Team innings aggregate: the running score, wickets, overs, extras and the
//! fall-of-wickets log for one side.

use serde::{Deserialize, Serialize};

use super::ball::DismissalKind;
use super::player::Player;

/// Extras conceded to the batting side, by kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ExtrasBreakdown {
    pub byes: u16,
    pub leg_byes: u16,
    pub wides: u16,
    pub no_balls: u16,
}

impl ExtrasBreakdown {
    pub fn total(&self) -> u16 {
        self.byes + self.leg_byes + self.wides + self.no_balls
    }
}

/// One entry in the fall-of-wickets log. Append-only; the undo controller
/// may pop the most recent entry and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FallOfWicket {
    /// 1-based wicket number.
    pub wicket_number: u8,
    /// Team score including the dismissal delivery's runs.
    pub score: u16,
    /// Display name captured at the time of the dismissal.
    pub batter_name: String,
    /// "O.B" position, e.g. "14.3".
    pub over: String,
    pub bowler_name: String,
    pub kind: DismissalKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamInnings {
    pub name: String,
    pub players: Vec<Player>,
    pub score: u16,
    pub wickets: u8,
    pub overs_completed: u16,
    /// Legal balls bowled in the over in progress, always in 0..=5.
    pub balls_in_over: u8,
    pub extras: ExtrasBreakdown,
    pub fall_of_wickets: Vec<FallOfWicket>,
}

impl TeamInnings {
    pub fn new(name: impl Into<String>, players: Vec<Player>) -> Self {
        Self {
            name: name.into(),
            players,
            score: 0,
            wickets: 0,
            overs_completed: 0,
            balls_in_over: 0,
            extras: ExtrasBreakdown::default(),
            fall_of_wickets: Vec::new(),
        }
    }

    /// Zero every innings aggregate, keeping name and roster.
    pub fn reset_innings(&mut self) {
        self.score = 0;
        self.wickets = 0;
        self.overs_completed = 0;
        self.balls_in_over = 0;
        self.extras = ExtrasBreakdown::default();
        self.fall_of_wickets.clear();
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn player_name(&self, id: &str) -> Option<&str> {
        self.player(id).map(|p| p.name.as_str())
    }

    /// Legal deliveries faced so far this innings.
    pub fn legal_balls(&self) -> u32 {
        self.overs_completed as u32 * 6 + self.balls_in_over as u32
    }

    /// "O.B" display of the innings progress, e.g. "19.3".
    pub fn overs_display(&self) -> String {
        format!("{}.{}", self.overs_completed, self.balls_in_over)
    }

    /// Runs per over so far, 0.0 before the first legal ball.
    pub fn run_rate(&self) -> f64 {
        let balls = self.legal_balls();
        if balls == 0 {
            return 0.0;
        }
        self.score as f64 * 6.0 / balls as f64
    }

    /// "152/4" style score line.
    pub fn score_display(&self) -> String {
        format!("{}/{}", self.score, self.wickets)
    }
}
