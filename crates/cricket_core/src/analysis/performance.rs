//! Weighted performance scoring and standout-performer selection.
//!
//! Three independent sub-scores (batting, bowling, fielding), each zero
//! unless the player took part in that phase; the total is their unweighted
//! sum. The player with the strictly highest total is the man of the match,
//! with ties broken by combined-roster input order.

use serde::{Deserialize, Serialize};

use super::figures::{BattingFigures, BowlingFigures, FieldingFigures, PlayerMatchFigures};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct PerformanceBreakdown {
    pub batting: f64,
    pub bowling: f64,
    pub fielding: f64,
}

impl PerformanceBreakdown {
    pub fn total(&self) -> f64 {
        self.batting + self.bowling + self.fielding
    }
}

pub fn breakdown(figures: &PlayerMatchFigures) -> PerformanceBreakdown {
    PerformanceBreakdown {
        batting: batting_score(&figures.batting),
        bowling: bowling_score(&figures.bowling),
        fielding: fielding_score(&figures.fielding),
    }
}

pub fn batting_score(fig: &BattingFigures) -> f64 {
    if !fig.batted() {
        return 0.0;
    }
    let runs = fig.runs as f64;
    let mut score = runs * 1.5;

    if let Some(sr) = fig.strike_rate() {
        if sr >= 150.0 {
            score += runs * 0.4;
        } else if sr >= 120.0 {
            score += runs * 0.2;
        } else if sr < 80.0 && fig.balls >= 10 {
            score -= runs * 0.1;
        }
    }

    // Milestone bonuses are tiered, not cumulative.
    if fig.runs >= 100 {
        score += 50.0;
    } else if fig.runs >= 50 {
        score += 25.0;
    } else if fig.runs >= 30 {
        score += 10.0;
    }

    score += fig.fours as f64 * 2.0;
    score += fig.sixes as f64 * 4.0;

    if fig.dismissal.is_none() && fig.runs >= 20 {
        score += 10.0;
    }
    if fig.dismissal.is_some() && fig.runs == 0 {
        score -= 10.0;
    }

    score
}

pub fn bowling_score(fig: &BowlingFigures) -> f64 {
    if !fig.bowled() {
        return 0.0;
    }
    let mut score = fig.wickets as f64 * 25.0;

    if let Some(economy) = fig.economy() {
        if economy <= 4.0 {
            score += 20.0;
        } else if economy <= 6.0 {
            score += 10.0;
        } else if economy >= 10.0 {
            score -= 10.0;
        }
    }

    if let Some(dot_pct) = fig.dot_percentage() {
        if dot_pct >= 60.0 {
            score += 15.0;
        } else if dot_pct >= 40.0 {
            score += 8.0;
        }
    }

    if fig.wickets >= 5 {
        score += 30.0;
    } else if fig.wickets >= 3 {
        score += 15.0;
    }

    score
}

pub fn fielding_score(fig: &FieldingFigures) -> f64 {
    fig.catches as f64 * 8.0 + fig.run_outs as f64 * 12.0 + fig.stumpings as f64 * 10.0
}

/// Pick the standout performer: strictly highest total wins; on a tie the
/// player appearing first in the combined roster keeps it (deterministic
/// but arbitrary, by design).
pub fn select_man_of_the_match(figures: &[PlayerMatchFigures]) -> Option<String> {
    let mut best: Option<(&PlayerMatchFigures, f64)> = None;
    for fig in figures {
        let total = breakdown(fig).total();
        match &best {
            Some((_, best_total)) if total <= *best_total => {}
            _ => best = Some((fig, total)),
        }
    }
    best.map(|(fig, _)| fig.player_id.clone())
}
