//! Career fold: once a match completes, each player's match figures are
//! folded into their career `PlayerStats`. This is the only point at which
//! the engine writes to the rosters it was handed.

use crate::models::{MatchState, Player};

use super::figures::PlayerMatchFigures;

fn player_mut<'a>(state: &'a mut MatchState, id: &str) -> Option<&'a mut Player> {
    if state.team_a.player(id).is_some() {
        state.team_a.player_mut(id)
    } else {
        state.team_b.player_mut(id)
    }
}

pub fn fold_into_careers(state: &mut MatchState, figures: &[PlayerMatchFigures]) {
    for fig in figures {
        let Some(player) = player_mut(state, &fig.player_id) else {
            continue;
        };
        let stats = &mut player.stats;
        stats.matches += 1;

        if fig.batting.batted() {
            stats.runs += fig.batting.runs;
            stats.balls_faced += fig.batting.balls;
            stats.fours += fig.batting.fours;
            stats.sixes += fig.batting.sixes;
            stats.highest_score = stats.highest_score.max(fig.batting.runs);
            if fig.batting.dismissal.is_none() {
                stats.not_outs += 1;
            }
            if fig.batting.runs >= 100 {
                stats.hundreds += 1;
            } else if fig.batting.runs >= 50 {
                stats.fifties += 1;
            }
        }

        if fig.bowling.bowled() {
            stats.wickets += fig.bowling.wickets;
            stats.balls_bowled += fig.bowling.balls;
            stats.runs_conceded += fig.bowling.runs_conceded;
            if fig.bowling.wickets >= 5 {
                stats.five_wicket_hauls += 1;
            }
            stats.update_best_bowling(fig.bowling.wickets, fig.bowling.runs_conceded);
        }

        stats.catches += fig.fielding.catches;
        stats.run_outs += fig.fielding.run_outs;
        stats.stumpings += fig.fielding.stumpings;
    }

    if let Some(motm) = state.man_of_the_match.clone() {
        if let Some(player) = player_mut(state, &motm) {
            player.stats.man_of_the_match_awards += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::figures::{BattingFigures, BowlingFigures, FieldingFigures};
    use crate::models::{DismissalKind, TeamInnings, TeamRef, Toss, TossDecision};

    fn match_with_players() -> MatchState {
        MatchState::new(
            TeamInnings::new("A", vec![Player::new("Bat"), Player::new("Ball")]),
            TeamInnings::new("B", vec![Player::new("Glove")]),
            Toss { winner: TeamRef::A, decision: TossDecision::Bat },
            20,
        )
    }

    fn figures_for(state: &MatchState, idx: usize) -> PlayerMatchFigures {
        let all: Vec<&Player> =
            state.team_a.players.iter().chain(state.team_b.players.iter()).collect();
        PlayerMatchFigures {
            player_id: all[idx].id.clone(),
            name: all[idx].name.clone(),
            team: if idx < state.team_a.players.len() { TeamRef::A } else { TeamRef::B },
            batting: BattingFigures::default(),
            bowling: BowlingFigures::default(),
            fielding: FieldingFigures::default(),
        }
    }

    #[test]
    fn test_career_fold_accumulates() {
        let mut m = match_with_players();

        let mut batter = figures_for(&m, 0);
        batter.batting = BattingFigures {
            runs: 71,
            balls: 44,
            fours: 8,
            sixes: 2,
            dismissal: Some(DismissalKind::Caught),
        };
        let mut bowler = figures_for(&m, 1);
        bowler.bowling = BowlingFigures {
            balls: 24,
            runs_conceded: 18,
            wickets: 5,
            dots: 14,
            maidens: 1,
        };
        let mut keeper = figures_for(&m, 2);
        keeper.fielding = FieldingFigures { catches: 1, run_outs: 0, stumpings: 2 };

        m.man_of_the_match = Some(bowler.player_id.clone());
        fold_into_careers(&mut m, &[batter.clone(), bowler.clone(), keeper.clone()]);

        let bat_stats = &m.team_a.player(&batter.player_id).unwrap().stats;
        assert_eq!(bat_stats.matches, 1);
        assert_eq!(bat_stats.runs, 71);
        assert_eq!(bat_stats.fifties, 1);
        assert_eq!(bat_stats.hundreds, 0);
        assert_eq!(bat_stats.highest_score, 71);
        assert_eq!(bat_stats.not_outs, 0);

        let bowl_stats = &m.team_a.player(&bowler.player_id).unwrap().stats;
        assert_eq!(bowl_stats.wickets, 5);
        assert_eq!(bowl_stats.five_wicket_hauls, 1);
        assert_eq!(bowl_stats.best_bowling.unwrap().to_string(), "5/18");
        assert_eq!(bowl_stats.man_of_the_match_awards, 1);

        let keep_stats = &m.team_b.player(&keeper.player_id).unwrap().stats;
        assert_eq!(keep_stats.stumpings, 2);
        assert_eq!(keep_stats.catches, 1);
        assert_eq!(keep_stats.matches, 1);
    }

    #[test]
    fn test_second_match_improves_best_only_when_better() {
        let mut m = match_with_players();
        let mut bowler = figures_for(&m, 1);
        bowler.bowling =
            BowlingFigures { balls: 24, runs_conceded: 18, wickets: 3, dots: 10, maidens: 0 };
        fold_into_careers(&mut m, &[bowler.clone()]);

        let mut worse = bowler.clone();
        worse.bowling.wickets = 2;
        worse.bowling.runs_conceded = 9;
        fold_into_careers(&mut m, &[worse]);

        let stats = &m.team_a.player(&bowler.player_id).unwrap().stats;
        assert_eq!(stats.matches, 2);
        assert_eq!(stats.best_bowling.unwrap().to_string(), "3/18");
    }
}
