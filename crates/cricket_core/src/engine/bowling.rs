//! Bowler rotation validator.
//!
//! A bowler who bowled over N cannot bowl over N+1. Eligibility is computed
//! over the bowling roster by player identity — never by name, so two
//! players sharing a name stay distinct.

use crate::error::{Result, ScoringError};
use crate::models::{MatchState, Player};

/// The bowler of the most recent over: the current bowler mid-over, or the
/// parked previous bowler right after an over has been completed.
fn last_over_bowler(state: &MatchState) -> Option<&str> {
    state.bowler.as_deref().or(state.previous_bowler.as_deref())
}

/// Whether this player may bowl the next over. Rejects the bowler of the
/// immediately preceding over and the two batters currently in the middle;
/// anyone else on the bowling roster is eligible.
pub fn can_bowl_next_over(state: &MatchState, player_id: &str) -> bool {
    if last_over_bowler(state) == Some(player_id) {
        return false;
    }
    if state.striker.as_deref() == Some(player_id)
        || state.non_striker.as_deref() == Some(player_id)
    {
        return false;
    }
    state.bowling_team().player(player_id).is_some()
}

/// Everyone on the bowling roster who may take the next over. An empty set
/// is the roster-exhaustion condition: the caller must add a player before
/// scoring can continue.
pub fn eligible_bowlers(state: &MatchState) -> Result<Vec<&Player>> {
    let eligible: Vec<&Player> = state
        .bowling_team()
        .players
        .iter()
        .filter(|p| can_bowl_next_over(state, &p.id))
        .collect();
    if eligible.is_empty() {
        return Err(ScoringError::RosterExhausted);
    }
    Ok(eligible)
}

/// Confirm the bowler for the next over. Validates before any mutation; on
/// success the previous-bowler slot is released (it is only held to support
/// undo across the over boundary).
pub fn set_next_bowler(state: &mut MatchState, player_id: &str) -> Result<()> {
    let Some(player) = state.bowling_team().player(player_id) else {
        return Err(ScoringError::UnknownPlayer { id: player_id.to_string() });
    };
    if last_over_bowler(state) == Some(player_id) {
        return Err(ScoringError::ConsecutiveOvers { name: player.name.clone() });
    }
    if state.striker.as_deref() == Some(player_id)
        || state.non_striker.as_deref() == Some(player_id)
    {
        return Err(ScoringError::BowlerIsBatting { name: player.name.clone() });
    }

    state.bowler = Some(player_id.to_string());
    state.previous_bowler = None;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::delivery::apply;
    use crate::engine::testutil::{ids, scored_match};
    use crate::models::Ball;

    fn bowl_one_over(m: &mut MatchState) {
        let (bowler, _, _) = ids(m);
        for _ in 0..6 {
            let s = m.striker.clone().unwrap();
            let ns = m.non_striker.clone().unwrap();
            apply(m, Ball::delivery(&bowler, &s, &ns, 0)).unwrap();
        }
    }

    #[test]
    fn test_everyone_eligible_before_first_over() {
        let m = scored_match();
        let eligible = eligible_bowlers(&m).unwrap();
        // The opening bowler is already confirmed, so they count as the
        // current over's bowler and sit out of "next over" eligibility.
        assert_eq!(eligible.len(), m.bowling_team().players.len() - 1);
    }

    #[test]
    fn test_previous_over_bowler_is_ineligible() {
        let mut m = scored_match();
        let (bowler, _, _) = ids(&m);
        bowl_one_over(&mut m);

        assert!(!can_bowl_next_over(&m, &bowler));
        let err = set_next_bowler(&mut m, &bowler).unwrap_err();
        assert!(matches!(err, ScoringError::ConsecutiveOvers { .. }));

        let eligible = eligible_bowlers(&m).unwrap();
        assert!(eligible.iter().all(|p| p.id != bowler));
    }

    #[test]
    fn test_rejection_is_by_identity_not_name() {
        let mut m = scored_match();
        let (bowler, _, _) = ids(&m);
        // Give another rostered bowler the same display name.
        let twin_id = {
            let team = m.bowling_team_mut();
            let bowler_name = team.player(&bowler).unwrap().name.clone();
            team.players[1].name = bowler_name;
            team.players[1].id.clone()
        };
        bowl_one_over(&mut m);

        assert!(!can_bowl_next_over(&m, &bowler));
        assert!(can_bowl_next_over(&m, &twin_id), "same name, different identity");
        set_next_bowler(&mut m, &twin_id).unwrap();
        assert!(m.previous_bowler.is_none(), "parked bowler released on confirmation");
    }

    #[test]
    fn test_current_batters_cannot_bowl() {
        let m = scored_match();
        let striker = m.striker.clone().unwrap();
        assert!(!can_bowl_next_over(&m, &striker), "a batter is not on the bowling roster");
    }

    #[test]
    fn test_batting_roster_member_rejected() {
        let mut m = scored_match();
        bowl_one_over(&mut m);
        let batter = m.batting_team().players[3].id.clone();
        let err = set_next_bowler(&mut m, &batter).unwrap_err();
        assert_eq!(err, ScoringError::UnknownPlayer { id: batter });
    }

    #[test]
    fn test_roster_exhaustion_is_fatal_signal() {
        let mut m = scored_match();
        let (bowler, _, _) = ids(&m);
        // Shrink the bowling roster to just the opening bowler.
        m.bowling_team_mut().players.truncate(1);
        bowl_one_over(&mut m);

        assert_eq!(m.previous_bowler.as_deref(), Some(bowler.as_str()));
        let err = eligible_bowlers(&m).unwrap_err();
        assert_eq!(err, ScoringError::RosterExhausted);

        // Augmenting the roster recovers the situation.
        m.bowling_team_mut().players.push(crate::models::Player::new("Fresh Arm"));
        assert_eq!(eligible_bowlers(&m).unwrap().len(), 1);
    }
}
