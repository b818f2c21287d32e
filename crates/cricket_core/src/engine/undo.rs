//! Undo/redo controller.
//!
//! The applied stack is the ledger's current-innings tail; `UndoRedo` holds
//! only the parallel redo stack, owned by the caller alongside the match.
//! This is the one component allowed to remove a ball from the ledger, and
//! it only ever removes the most recent one.
//!
//! Reversal is exact without re-deriving any rule: every ball records the
//! striker, non-striker, and bowler that were live when it was bowled, so
//! undo restores the slots from the popped ball itself.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Ball, Extra, MatchState};

use super::delivery::{self, DeliveryOutcome};

/// Redo stack for one scoring session. The session does not span an innings
/// transition: the transition resets aggregates that a reversed ball could
/// no longer be replayed against.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UndoRedo {
    redo: Vec<Ball>,
}

impl UndoRedo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score a fresh ball. Any redoable history is invalidated — redo only
    /// ever replays the exact deliveries that were undone.
    pub fn apply_scored(&mut self, state: &mut MatchState, ball: Ball) -> Result<DeliveryOutcome> {
        let outcome = delivery::apply(state, ball)?;
        self.redo.clear();
        Ok(outcome)
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Whether an undo would do anything right now.
    pub fn can_undo(&self, state: &MatchState) -> bool {
        !state.completed
            && state.last_ball().map(|b| b.innings == state.innings).unwrap_or(false)
    }
}

/// Reverse the most recent delivery. A no-op (returning `false`) when the
/// history is empty, when the last ball belongs to a previous innings, or
/// once the match has completed.
pub fn undo(state: &mut MatchState, history: &mut UndoRedo) -> bool {
    if !history.can_undo(state) {
        return false;
    }
    let ball = state.balls.pop().expect("can_undo guarantees a ball");

    let team = state.batting_team_mut();

    team.score -= ball.runs;
    match ball.extra {
        Some(Extra::Wide) => team.extras.wides -= ball.runs,
        Some(Extra::NoBall) => team.extras.no_balls -= ball.runs,
        Some(Extra::Bye) => team.extras.byes -= ball.runs,
        Some(Extra::LegBye) => team.extras.leg_byes -= ball.runs,
        None => {}
    }

    if ball.wicket.is_some() {
        team.wickets -= 1;
        team.fall_of_wickets.pop();
    }

    if ball.is_legal() {
        if team.balls_in_over == 0 {
            // The ball being reversed was the one that rolled the over.
            team.overs_completed -= 1;
            team.balls_in_over = 5;
        } else {
            team.balls_in_over -= 1;
        }
    }

    // Restore the live slots from the ball's own record. This also clears
    // any pending new-batter/new-bowler condition the delivery raised.
    state.striker = Some(ball.striker_id.clone());
    state.non_striker = Some(ball.non_striker_id.clone());
    state.bowler = Some(ball.bowler_id.clone());
    state.previous_bowler = None;

    log::debug!("undid ball {} of innings {}", ball.over_ball(), ball.innings);
    history.redo.push(ball);
    true
}

/// Re-apply the most recently undone delivery through the delivery
/// processor. `Ok(None)` when there is nothing to redo.
pub fn redo(state: &mut MatchState, history: &mut UndoRedo) -> Result<Option<DeliveryOutcome>> {
    let Some(ball) = history.redo.pop() else {
        return Ok(None);
    };
    let outcome = delivery::apply(state, ball)?;
    Ok(Some(outcome))
}
