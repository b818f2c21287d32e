//! Delivery processor: the core transition function of the engine.
//!
//! `apply` folds one ball event into the match state — score, extras,
//! wickets, fall-of-wickets, over progression, strike rotation — then lets
//! the over/innings state machine settle any completion the ball caused.
//! Side effects are confined to the match value; there is no I/O here.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError};
use crate::models::{Ball, Extra, FallOfWicket, MatchState};

use super::{progression, strike};

/// What a single delivery caused, for the caller to prompt on: a completed
/// over needs a new bowler, a wicket needs a new batter, a completed
/// innings/match needs the corresponding transition screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DeliveryOutcome {
    pub over_completed: bool,
    pub innings_completed: bool,
    pub match_completed: bool,
    pub wicket_fell: bool,
}

/// Apply one ball to the match.
///
/// The ball's sequence fields (`innings`, `over_number`, `ball_number`) are
/// stamped here from the live state, so callers only supply participants,
/// runs, and flags. Rejects the delivery before any mutation when the match
/// is complete, no bowler is confirmed, or a batting slot is still vacant
/// after a wicket.
pub fn apply(state: &mut MatchState, mut ball: Ball) -> Result<DeliveryOutcome> {
    if state.completed {
        return Err(ScoringError::MatchComplete);
    }
    if state.bowler.is_none() {
        return Err(ScoringError::BowlerRequired);
    }
    if state.striker.is_none() || state.non_striker.is_none() {
        return Err(ScoringError::BatterRequired);
    }

    // Stamp the ledger position. Wides and no-balls never advance the
    // legal-ball count, so they share the count of the last legal ball.
    let (overs_completed, balls_in_over) = {
        let team = state.batting_team();
        (team.overs_completed, team.balls_in_over)
    };
    ball.innings = state.innings;
    ball.over_number = overs_completed;
    ball.ball_number = if ball.is_legal() { balls_in_over + 1 } else { balls_in_over };

    log::debug!(
        "innings {} ball {}: {} run(s), extra {:?}, wicket {}",
        ball.innings,
        ball.over_ball(),
        ball.runs,
        ball.extra,
        ball.wicket.is_some(),
    );

    // Names are captured before the aggregate borrow; the fall-of-wickets
    // record keeps display strings, not player references.
    let bowler_name = state.player_name(&ball.bowler_id);
    let wicket = ball.wicket.clone();
    let batter_name = wicket.as_ref().map(|w| state.player_name(&w.batter_id));
    let over_ball = ball.over_ball();
    let runs = ball.runs;
    let extra = ball.extra;
    let legal = ball.is_legal();
    let wicket_fell = wicket.is_some();

    state.balls.push(ball.clone());

    let team = state.batting_team_mut();

    // Runs count for the team no matter how they came.
    team.score += runs;

    match extra {
        Some(Extra::Wide) => team.extras.wides += runs,
        Some(Extra::NoBall) => team.extras.no_balls += runs,
        Some(Extra::Bye) => team.extras.byes += runs,
        Some(Extra::LegBye) => team.extras.leg_byes += runs,
        None => {}
    }

    if let Some(w) = &wicket {
        team.wickets += 1;
        team.fall_of_wickets.push(FallOfWicket {
            wicket_number: team.wickets,
            score: team.score,
            batter_name: batter_name.unwrap_or_default(),
            over: over_ball,
            bowler_name,
            kind: w.kind,
        });
    }

    let mut over_completed = false;
    if legal {
        team.balls_in_over += 1;
        if team.balls_in_over == 6 {
            team.overs_completed += 1;
            team.balls_in_over = 0;
            over_completed = true;
        }
    }

    // The dismissed batter leaves the crease; the vacant slot blocks further
    // deliveries until a replacement is sent in.
    if let Some(w) = &wicket {
        if state.striker.as_deref() == Some(w.batter_id.as_str()) {
            state.striker = None;
        } else if state.non_striker.as_deref() == Some(w.batter_id.as_str()) {
            state.non_striker = None;
        }
    }

    if strike::should_rotate(&ball, over_completed) {
        state.swap_strike();
    }

    if over_completed {
        // A fresh bowler must be confirmed before the next ball. The
        // outgoing bowler is parked so an undo can put them back.
        state.previous_bowler = state.bowler.take();
        log::info!(
            "over {} complete: {} {}",
            ball.over_number + 1,
            state.batting_team().name,
            state.batting_team().score_display(),
        );
    }

    let (innings_completed, match_completed) = progression::settle(state);

    Ok(DeliveryOutcome { over_completed, innings_completed, match_completed, wicket_fell })
}
