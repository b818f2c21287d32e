//! Innings scorecards: the exportable batting and bowling cards, derived
//! from the ledger and the innings aggregates.

use serde::{Deserialize, Serialize};

use crate::models::{FallOfWicket, MatchState, TeamRef};

use super::figures;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BattingLine {
    pub name: String,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike_rate: Option<f64>,
    /// "c Smith b Khan", "run out (Jones)", or "not out".
    pub dismissal: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BowlingLine {
    pub name: String,
    /// "O.B" overs bowled.
    pub overs: String,
    pub maidens: u32,
    pub runs: u32,
    pub wickets: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub economy: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InningsScorecard {
    pub team_name: String,
    /// In order of appearance at the crease.
    pub batting: Vec<BattingLine>,
    /// In order of first over bowled.
    pub bowling: Vec<BowlingLine>,
    pub byes: u16,
    pub leg_byes: u16,
    pub wides: u16,
    pub no_balls: u16,
    /// "152/4" score line.
    pub total: String,
    pub overs: String,
    pub fall_of_wickets: Vec<FallOfWicket>,
}

/// Which side batted in the given innings.
fn batting_side(state: &MatchState, innings: u8) -> TeamRef {
    let first = state.toss.batting_first();
    if innings == 1 {
        first
    } else {
        first.other()
    }
}

/// Build the scorecard for one innings. Batting lines appear in order of
/// arrival at the crease; a batter dismissed without facing (run out at the
/// non-striker's end) still gets a line.
pub fn innings_scorecard(state: &MatchState, innings: u8) -> InningsScorecard {
    let side = batting_side(state, innings);
    let team = state.team(side);
    let all_figures = figures::compute_innings(state, innings);

    // Appearance order: strikers and non-strikers as the ledger saw them.
    let mut batter_order: Vec<String> = Vec::new();
    let mut bowler_order: Vec<String> = Vec::new();
    for ball in state.balls_for_innings(innings) {
        for id in [&ball.striker_id, &ball.non_striker_id] {
            if !batter_order.contains(id) {
                batter_order.push(id.clone());
            }
        }
        if !bowler_order.contains(&ball.bowler_id) {
            bowler_order.push(ball.bowler_id.clone());
        }
    }

    let batting = batter_order
        .iter()
        .filter_map(|id| {
            let fig = all_figures.iter().find(|f| &f.player_id == id)?;
            let dismissal = match fig.batting.dismissal {
                Some(kind) => {
                    // The ball that took the wicket carries the fielder name;
                    // the bowler name resolves from the roster.
                    let wicket_ball = state
                        .balls_for_innings(innings)
                        .find(|b| {
                            b.wicket.as_ref().map(|w| &w.batter_id) == Some(id)
                        })?;
                    let fielder = wicket_ball
                        .wicket
                        .as_ref()
                        .and_then(|w| w.fielder_name.as_deref());
                    kind.describe(&state.player_name(&wicket_ball.bowler_id), fielder)
                }
                None => "not out".to_string(),
            };
            Some(BattingLine {
                name: fig.name.clone(),
                runs: fig.batting.runs,
                balls: fig.batting.balls,
                fours: fig.batting.fours,
                sixes: fig.batting.sixes,
                strike_rate: fig.batting.strike_rate(),
                dismissal,
            })
        })
        .collect();

    let bowling = bowler_order
        .iter()
        .filter_map(|id| {
            let fig = all_figures.iter().find(|f| &f.player_id == id)?;
            Some(BowlingLine {
                name: fig.name.clone(),
                overs: fig.bowling.overs_display(),
                maidens: fig.bowling.maidens,
                runs: fig.bowling.runs_conceded,
                wickets: fig.bowling.wickets,
                economy: fig.bowling.economy(),
            })
        })
        .collect();

    InningsScorecard {
        team_name: team.name.clone(),
        batting,
        bowling,
        byes: team.extras.byes,
        leg_byes: team.extras.leg_byes,
        wides: team.extras.wides,
        no_balls: team.extras.no_balls,
        total: team.score_display(),
        overs: team.overs_display(),
        fall_of_wickets: team.fall_of_wickets.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::delivery::apply;
    use crate::engine::testutil::{ids, scored_match};
    use crate::models::{Ball, DismissalKind, Extra, WicketDetails};

    #[test]
    fn test_scorecard_lines_in_appearance_order() {
        let mut m = scored_match();
        let (bowler, striker, non_striker) = ids(&m);
        let fielder = m.bowling_team().players[5].clone();

        apply(&mut m, Ball::delivery(&bowler, &striker, &non_striker, 4)).unwrap();
        apply(&mut m, Ball::delivery(&bowler, &striker, &non_striker, 1).with_extra(Extra::Wide))
            .unwrap();
        apply(
            &mut m,
            Ball::delivery(&bowler, &striker, &non_striker, 0).with_wicket(WicketDetails {
                kind: DismissalKind::Caught,
                batter_id: striker.clone(),
                fielder_id: Some(fielder.id.clone()),
                fielder_name: Some(fielder.name.clone()),
            }),
        )
        .unwrap();
        let next = m.batting_team().players[2].id.clone();
        m.set_next_batter(&next).unwrap();
        let s = m.striker.clone().unwrap();
        let ns = m.non_striker.clone().unwrap();
        apply(&mut m, Ball::delivery(&bowler, &s, &ns, 2)).unwrap();

        let card = innings_scorecard(&m, 1);

        assert_eq!(card.team_name, "Falcons");
        assert_eq!(card.batting.len(), 3);
        assert_eq!(card.batting[0].runs, 4);
        assert_eq!(card.batting[0].balls, 2);
        assert_eq!(
            card.batting[0].dismissal,
            DismissalKind::Caught.describe(&m.player_name(&bowler), Some(&fielder.name)),
        );
        assert_eq!(card.batting[1].dismissal, "not out");
        assert_eq!(card.bowling.len(), 1);
        assert_eq!(card.bowling[0].overs, "0.3");
        assert_eq!(card.bowling[0].runs, 7, "4 off the bat, 1 wide, 2 off the bat");
        assert_eq!(card.bowling[0].wickets, 1);
        assert_eq!(card.wides, 1);
        assert_eq!(card.total, "7/1");
        assert_eq!(card.fall_of_wickets.len(), 1);
        assert_eq!(card.fall_of_wickets[0].score, 5);
    }

    #[test]
    fn test_empty_innings_scorecard() {
        let m = scored_match();
        let card = innings_scorecard(&m, 1);
        assert!(card.batting.is_empty());
        assert!(card.bowling.is_empty());
        assert_eq!(card.total, "0/0");
        assert_eq!(card.overs, "0.0");
    }
}
