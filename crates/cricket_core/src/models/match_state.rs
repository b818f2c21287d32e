//! The caller-owned match value.
//!
//! Every engine operation takes a `&mut MatchState` (or `&MatchState` for
//! queries) — the engine keeps no copy and no global. The state carries both
//! team aggregates, the flattened ball ledger across innings, and the live
//! scoring slots (striker / non-striker / bowler plus the two-slot bowler
//! history that makes undo across an over boundary exact).

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError};

use super::ball::Ball;
use super::team::TeamInnings;

/// Which of the two sides a reference points at. The batting alias is a
/// `TeamRef`, swapped at the innings break.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TeamRef {
    A,
    B,
}

impl TeamRef {
    pub fn other(&self) -> TeamRef {
        match self {
            TeamRef::A => TeamRef::B,
            TeamRef::B => TeamRef::A,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TossDecision {
    Bat,
    Bowl,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Toss {
    pub winner: TeamRef,
    pub decision: TossDecision,
}

impl Toss {
    /// The side batting first under this toss outcome.
    pub fn batting_first(&self) -> TeamRef {
        match self.decision {
            TossDecision::Bat => self.winner,
            TossDecision::Bowl => self.winner.other(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchState {
    pub team_a: TeamInnings,
    pub team_b: TeamInnings,
    pub toss: Toss,
    /// Overs allowed per innings.
    pub overs_limit: u16,
    /// Flattened ball ledger across both innings, append-only except for
    /// the undo controller.
    pub balls: Vec<Ball>,
    /// Currently batting side; the bowling side is the other one.
    pub batting: TeamRef,
    /// 1 or 2.
    pub innings: u8,
    pub striker: Option<String>,
    pub non_striker: Option<String>,
    pub bowler: Option<String>,
    /// Bowler of the over just completed. Held only until the next bowler
    /// is confirmed so that undoing the over's last ball can restore them.
    pub previous_bowler: Option<String>,
    /// Final score of the first innings, set at the innings break.
    pub first_innings_score: Option<u16>,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    /// Player id of the standout performer, set at match completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub man_of_the_match: Option<String>,
}

impl MatchState {
    /// Set up a fresh match. The side batting first follows from the toss.
    pub fn new(team_a: TeamInnings, team_b: TeamInnings, toss: Toss, overs_limit: u16) -> Self {
        let batting = toss.batting_first();
        Self {
            team_a,
            team_b,
            toss,
            overs_limit,
            balls: Vec::new(),
            batting,
            innings: 1,
            striker: None,
            non_striker: None,
            bowler: None,
            previous_bowler: None,
            first_innings_score: None,
            completed: false,
            result: None,
            man_of_the_match: None,
        }
    }

    // ========================
    // Side accessors
    // ========================

    pub fn team(&self, side: TeamRef) -> &TeamInnings {
        match side {
            TeamRef::A => &self.team_a,
            TeamRef::B => &self.team_b,
        }
    }

    pub fn team_mut(&mut self, side: TeamRef) -> &mut TeamInnings {
        match side {
            TeamRef::A => &mut self.team_a,
            TeamRef::B => &mut self.team_b,
        }
    }

    pub fn batting_team(&self) -> &TeamInnings {
        self.team(self.batting)
    }

    pub fn batting_team_mut(&mut self) -> &mut TeamInnings {
        self.team_mut(self.batting)
    }

    pub fn bowling_team(&self) -> &TeamInnings {
        self.team(self.batting.other())
    }

    pub fn bowling_team_mut(&mut self) -> &mut TeamInnings {
        self.team_mut(self.batting.other())
    }

    /// Look a player up across both rosters.
    pub fn find_player(&self, id: &str) -> Option<&crate::models::Player> {
        self.team_a.player(id).or_else(|| self.team_b.player(id))
    }

    /// Display name for a player id, falling back to the raw id.
    pub fn player_name(&self, id: &str) -> String {
        self.find_player(id).map(|p| p.name.clone()).unwrap_or_else(|| id.to_string())
    }

    // ========================
    // Ledger views
    // ========================

    pub fn balls_for_innings(&self, innings: u8) -> impl Iterator<Item = &Ball> {
        self.balls.iter().filter(move |b| b.innings == innings)
    }

    pub fn last_ball(&self) -> Option<&Ball> {
        self.balls.last()
    }

    // ========================
    // Batter selection
    // ========================

    /// Put the opening pair in. Both slots must name players on the batting
    /// roster.
    pub fn open_innings(&mut self, striker_id: &str, non_striker_id: &str) -> Result<()> {
        for id in [striker_id, non_striker_id] {
            if self.batting_team().player(id).is_none() {
                return Err(ScoringError::UnknownPlayer { id: id.to_string() });
            }
        }
        self.striker = Some(striker_id.to_string());
        self.non_striker = Some(non_striker_id.to_string());
        Ok(())
    }

    /// Fill the batting slot vacated by the last dismissal.
    pub fn set_next_batter(&mut self, id: &str) -> Result<()> {
        if self.batting_team().player(id).is_none() {
            return Err(ScoringError::UnknownPlayer { id: id.to_string() });
        }
        if self.striker.is_none() {
            self.striker = Some(id.to_string());
            Ok(())
        } else if self.non_striker.is_none() {
            self.non_striker = Some(id.to_string());
            Ok(())
        } else {
            Err(ScoringError::NoVacantBattingSlot)
        }
    }

    /// Swap which batter is on strike.
    pub fn swap_strike(&mut self) {
        std::mem::swap(&mut self.striker, &mut self.non_striker);
    }

    // ========================
    // Chase equation
    // ========================

    /// Legal deliveries left in the current innings.
    pub fn balls_remaining(&self) -> u32 {
        let allowed = self.overs_limit as u32 * 6;
        allowed.saturating_sub(self.batting_team().legal_balls())
    }

    /// Runs still needed by the chasing side to win (second innings only).
    pub fn runs_required(&self) -> Option<u32> {
        let target = self.first_innings_score? as u32 + 1;
        if self.innings != 2 {
            return None;
        }
        Some(target.saturating_sub(self.batting_team().score as u32))
    }

    pub fn current_run_rate(&self) -> f64 {
        self.batting_team().run_rate()
    }

    /// Required rate for the chase, `None` outside the second innings or
    /// with no balls left.
    pub fn required_run_rate(&self) -> Option<f64> {
        let required = self.runs_required()?;
        let balls = self.balls_remaining();
        if balls == 0 {
            return None;
        }
        Some(required as f64 * 6.0 / balls as f64)
    }
}
