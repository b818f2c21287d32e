//! Per-player match figures, derived by folding the ball ledger.
//!
//! Nothing here is stored on the match: batting, bowling, and fielding
//! figures are always recomputed from the append-only ledger, so they stay
//! consistent under undo for free.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Ball, DismissalKind, MatchState, TeamRef};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BattingFigures {
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub dismissal: Option<DismissalKind>,
}

impl BattingFigures {
    /// Whether the player batted at all (faced a ball or was dismissed
    /// without facing, as a run out at the non-striker's end can be).
    pub fn batted(&self) -> bool {
        self.balls > 0 || self.dismissal.is_some()
    }

    pub fn strike_rate(&self) -> Option<f64> {
        if self.balls == 0 {
            return None;
        }
        Some(self.runs as f64 * 100.0 / self.balls as f64)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BowlingFigures {
    /// Legal deliveries bowled.
    pub balls: u32,
    /// Off the bat plus wides and no-balls; byes are not the bowler's.
    pub runs_conceded: u32,
    pub wickets: u32,
    pub dots: u32,
    pub maidens: u32,
}

impl BowlingFigures {
    pub fn bowled(&self) -> bool {
        self.balls > 0
    }

    /// Runs per over.
    pub fn economy(&self) -> Option<f64> {
        if self.balls == 0 {
            return None;
        }
        Some(self.runs_conceded as f64 * 6.0 / self.balls as f64)
    }

    pub fn dot_percentage(&self) -> Option<f64> {
        if self.balls == 0 {
            return None;
        }
        Some(self.dots as f64 * 100.0 / self.balls as f64)
    }

    /// "O.B" overs bowled display.
    pub fn overs_display(&self) -> String {
        format!("{}.{}", self.balls / 6, self.balls % 6)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FieldingFigures {
    pub catches: u32,
    pub run_outs: u32,
    pub stumpings: u32,
}

/// One player's complete match contribution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerMatchFigures {
    pub player_id: String,
    pub name: String,
    pub team: TeamRef,
    pub batting: BattingFigures,
    pub bowling: BowlingFigures,
    pub fielding: FieldingFigures,
}

/// Fold the whole ledger into per-player figures, in combined-roster order
/// (team A roster first, then team B) — the deterministic order the
/// standout-performer tie-break relies on.
pub fn compute(state: &MatchState) -> Vec<PlayerMatchFigures> {
    compute_filtered(state, None)
}

/// Figures for a single innings only (scorecard view).
pub fn compute_innings(state: &MatchState, innings: u8) -> Vec<PlayerMatchFigures> {
    compute_filtered(state, Some(innings))
}

fn compute_filtered(state: &MatchState, innings: Option<u8>) -> Vec<PlayerMatchFigures> {
    let mut entries: Vec<PlayerMatchFigures> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (team, side) in [(&state.team_a, TeamRef::A), (&state.team_b, TeamRef::B)] {
        for player in &team.players {
            index.insert(player.id.clone(), entries.len());
            entries.push(PlayerMatchFigures {
                player_id: player.id.clone(),
                name: player.name.clone(),
                team: side,
                batting: BattingFigures::default(),
                bowling: BowlingFigures::default(),
                fielding: FieldingFigures::default(),
            });
        }
    }

    // (innings, over) -> (bowler idx, conceded in over, legal balls in over)
    let mut overs: HashMap<(u8, u16), (usize, u32, u32)> = HashMap::new();

    for ball in &state.balls {
        if innings.is_some_and(|i| ball.innings != i) {
            continue;
        }
        fold_ball(ball, &index, &mut entries, &mut overs);
    }

    // A maiden is a completed over in which the bowler conceded nothing.
    for (bowler_idx, conceded, legal) in overs.into_values() {
        if legal == 6 && conceded == 0 {
            entries[bowler_idx].bowling.maidens += 1;
        }
    }

    entries
}

fn fold_ball(
    ball: &Ball,
    index: &HashMap<String, usize>,
    entries: &mut Vec<PlayerMatchFigures>,
    overs: &mut HashMap<(u8, u16), (usize, u32, u32)>,
) {
    if let Some(&striker) = index.get(&ball.striker_id) {
        let batting = &mut entries[striker].batting;
        if ball.is_legal() {
            batting.balls += 1;
        }
        let off_bat = ball.runs_off_bat() as u32;
        batting.runs += off_bat;
        if off_bat == 4 {
            batting.fours += 1;
        } else if off_bat == 6 {
            batting.sixes += 1;
        }
    }

    if let Some(&bowler) = index.get(&ball.bowler_id) {
        let bowling = &mut entries[bowler].bowling;
        let conceded = ball.runs_conceded_by_bowler() as u32;
        bowling.runs_conceded += conceded;
        if ball.is_legal() {
            bowling.balls += 1;
            if ball.is_dot() {
                bowling.dots += 1;
            }
        }
        let over = overs.entry((ball.innings, ball.over_number)).or_insert((bowler, 0, 0));
        over.1 += conceded;
        if ball.is_legal() {
            over.2 += 1;
        }
    }

    if let Some(wicket) = &ball.wicket {
        if let Some(&batter) = index.get(&wicket.batter_id) {
            entries[batter].batting.dismissal = Some(wicket.kind);
        }
        if wicket.kind.credits_bowler() {
            if let Some(&bowler) = index.get(&ball.bowler_id) {
                entries[bowler].bowling.wickets += 1;
            }
        }
        if let Some(fielder_id) = &wicket.fielder_id {
            if let Some(&fielder) = index.get(fielder_id) {
                let fielding = &mut entries[fielder].fielding;
                match wicket.kind {
                    DismissalKind::Caught => fielding.catches += 1,
                    DismissalKind::RunOut => fielding.run_outs += 1,
                    DismissalKind::Stumped => fielding.stumpings += 1,
                    _ => {}
                }
            }
        }
    }
}
