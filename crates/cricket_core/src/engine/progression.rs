//! Over/innings state machine.
//!
//! Pure completion predicates, plus the settling pass the delivery processor
//! runs after each ball: first-innings completion swaps the batting alias
//! and resets the chasing side's aggregates; second-innings completion
//! freezes the match and derives result, standout performer, and career
//! stats.

use crate::analysis::{career, figures, performance, result};
use crate::models::MatchState;

/// True when the most recent delivery of the current innings closed an over
/// (exactly 6 legal balls bowled). Wides and no-balls never count, so an
/// over can hold more than six deliveries in total.
pub fn is_over_complete(state: &MatchState) -> bool {
    state
        .balls_for_innings(state.innings)
        .last()
        .map(|b| b.is_legal() && b.ball_number == 6)
        .unwrap_or(false)
}

/// True when the batting side's innings is over: out of overs, out of
/// wickets, or — second innings only — the target has been surpassed.
/// Reaching the target exactly is not completion; the strictly-greater
/// check runs after the decisive run is recorded.
pub fn is_innings_complete(state: &MatchState) -> bool {
    let team = state.batting_team();
    if team.overs_completed >= state.overs_limit {
        return true;
    }
    if team.wickets >= 10 {
        return true;
    }
    if state.innings == 2 {
        if let Some(first) = state.first_innings_score {
            return team.score > first;
        }
    }
    false
}

/// Evaluate completion after a delivery and perform the transition it
/// triggers. Returns `(innings_completed, match_completed)`.
pub(crate) fn settle(state: &mut MatchState) -> (bool, bool) {
    if !is_innings_complete(state) {
        return (false, false);
    }
    if state.innings == 1 {
        transition_innings(state);
        (true, false)
    } else {
        complete_match(state);
        (true, true)
    }
}

/// First-innings break: capture the target base, swap the batting alias,
/// zero the new batting side's aggregates, and clear the live slots so the
/// caller must pick openers and a bowler before the chase starts.
fn transition_innings(state: &mut MatchState) {
    let first_score = state.batting_team().score;
    state.first_innings_score = Some(first_score);

    log::info!(
        "innings 1 complete: {} {} in {} overs",
        state.batting_team().name,
        state.batting_team().score_display(),
        state.batting_team().overs_display(),
    );

    state.batting = state.batting.other();
    state.innings = 2;
    state.batting_team_mut().reset_innings();

    state.striker = None;
    state.non_striker = None;
    state.bowler = None;
    state.previous_bowler = None;
}

/// Second-innings end: freeze the match and derive everything downstream.
fn complete_match(state: &mut MatchState) {
    state.completed = true;
    state.result = Some(result::result_text(state));

    let match_figures = figures::compute(state);
    state.man_of_the_match = performance::select_man_of_the_match(&match_figures);
    career::fold_into_careers(state, &match_figures);

    log::info!(
        "match complete: {}",
        state.result.as_deref().unwrap_or("no result"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::delivery::apply;
    use crate::engine::testutil::{ids, scored_match, scored_match_with_limit};
    use crate::models::{Ball, DismissalKind, WicketDetails};

    #[test]
    fn test_over_complete_predicate() {
        let mut m = scored_match();
        let (bowler, striker, non_striker) = ids(&m);

        assert!(!is_over_complete(&m), "no deliveries yet");

        for _ in 0..5 {
            apply(&mut m, Ball::delivery(&bowler, &striker, &non_striker, 0)).unwrap();
            assert!(!is_over_complete(&m));
        }
        apply(&mut m, Ball::delivery(&bowler, &striker, &non_striker, 0)).unwrap();
        assert!(is_over_complete(&m));
    }

    #[test]
    fn test_overs_limit_ends_the_innings() {
        let mut m = scored_match_with_limit(1);
        let (bowler, striker, non_striker) = ids(&m);

        for i in 0..6 {
            let out = apply(&mut m, Ball::delivery(&bowler, &striker, &non_striker, 1)).unwrap();
            if i == 5 {
                assert!(out.innings_completed);
                assert!(!out.match_completed);
            }
        }

        assert_eq!(m.innings, 2);
        assert_eq!(m.first_innings_score, Some(6));
        assert_eq!(m.batting_team().score, 0, "chasing side starts from zero");
        assert!(m.striker.is_none() && m.bowler.is_none(), "selections cleared at the break");
    }

    #[test]
    fn test_ten_wickets_end_the_innings() {
        let mut m = scored_match_with_limit(50);
        let (bowler, _, _) = ids(&m);

        for wicket in 1..=10u8 {
            let striker = m.striker.clone().unwrap();
            let non_striker = m.non_striker.clone().unwrap();
            let out = apply(
                &mut m,
                Ball::delivery(&bowler, &striker, &non_striker, 0).with_wicket(WicketDetails {
                    kind: DismissalKind::Bowled,
                    batter_id: striker.clone(),
                    fielder_id: None,
                    fielder_name: None,
                }),
            )
            .unwrap();

            if wicket < 10 {
                assert!(!out.innings_completed);
                // Send the next batter to the vacated end.
                let batting = m.batting_team();
                let next = batting.players[(wicket + 1) as usize].id.clone();
                m.set_next_batter(&next).unwrap();
                // Over rollovers need a fresh bowler mid-scenario.
                if m.bowler.is_none() {
                    let eligible = crate::engine::bowling::eligible_bowlers(&m).unwrap();
                    let id = eligible[0].id.clone();
                    crate::engine::bowling::set_next_bowler(&mut m, &id).unwrap();
                }
            } else {
                assert!(out.innings_completed, "tenth wicket closes the innings");
            }
        }
        assert_eq!(m.innings, 2);
    }

    #[test]
    fn test_target_surpassed_not_merely_reached() {
        let mut m = scored_match_with_limit(2);
        let (bowler, striker, non_striker) = ids(&m);

        // First innings: 12 runs in 2 overs.
        for _ in 0..6 {
            apply(&mut m, Ball::delivery(&bowler, &striker, &non_striker, 1)).unwrap();
        }
        let second_bowler = crate::engine::bowling::eligible_bowlers(&m).unwrap()[0].id.clone();
        crate::engine::bowling::set_next_bowler(&mut m, &second_bowler).unwrap();
        for _ in 0..6 {
            let s = m.striker.clone().unwrap();
            let ns = m.non_striker.clone().unwrap();
            apply(&mut m, Ball::delivery(&second_bowler, &s, &ns, 1)).unwrap();
        }
        assert_eq!(m.first_innings_score, Some(12));

        // Chase: 12 runs level the scores but do not end the innings.
        let batting = m.batting_team();
        let (s, ns) = (batting.players[0].id.clone(), batting.players[1].id.clone());
        m.open_innings(&s, &ns).unwrap();
        let chase_bowler = m.bowling_team().players[0].id.clone();
        crate::engine::bowling::set_next_bowler(&mut m, &chase_bowler).unwrap();

        for _ in 0..4 {
            let s = m.striker.clone().unwrap();
            let ns = m.non_striker.clone().unwrap();
            let out = apply(&mut m, Ball::delivery(&chase_bowler, &s, &ns, 3)).unwrap();
            assert!(!out.match_completed);
        }
        assert_eq!(m.batting_team().score, 12, "scores level");
        assert!(!is_innings_complete(&m), "reaching the target exactly does not end it");

        let s = m.striker.clone().unwrap();
        let ns = m.non_striker.clone().unwrap();
        let out = apply(&mut m, Ball::delivery(&chase_bowler, &s, &ns, 1)).unwrap();
        assert!(out.match_completed, "the decisive run triggers completion");
        assert!(m.completed);
        assert!(m.result.is_some());
    }
}
