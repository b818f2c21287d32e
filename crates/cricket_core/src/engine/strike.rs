//! Strike rotation rule.
//!
//! Consumed by the delivery processor after each ball; pure predicate.

use crate::models::Ball;

/// Whether striker and non-striker swap after this delivery.
///
/// - Wide/no-ball: only when extra runs beyond the automatic one were run
///   (`runs > 1`); the illegal delivery itself never rotates strike.
/// - Legal delivery: odd runs rotate, and the end of an over always rotates
///   regardless of parity. Byes and leg-byes follow the same parity rule as
///   runs off the bat.
pub fn should_rotate(ball: &Ball, over_completed: bool) -> bool {
    if !ball.is_legal() {
        return ball.runs > 1;
    }
    over_completed || ball.runs % 2 == 1
}
