// Scores a short scripted match end to end and dumps the scorecards.
// Run with: cargo run --bin score_full_match

use anyhow::{Context, Result};

use cricket_core::engine::{apply, eligible_bowlers, set_next_bowler};
use cricket_core::models::{
    Ball, DismissalKind, Extra, MatchState, Player, TeamInnings, TeamRef, Toss, TossDecision,
    WicketDetails,
};
use cricket_core::{innings_scorecard, InningsScorecard};

fn squad(names: &[&str]) -> Vec<Player> {
    names.iter().map(|n| Player::new(*n)).collect()
}

fn open_innings(m: &mut MatchState) -> Result<()> {
    let striker = m.batting_team().players[0].id.clone();
    let non_striker = m.batting_team().players[1].id.clone();
    m.open_innings(&striker, &non_striker)?;
    let bowler = eligible_bowlers(m).context("no bowler available")?[0].id.clone();
    set_next_bowler(m, &bowler)?;
    Ok(())
}

/// One scripted ball: runs, optional extra, optional wicket on the striker.
fn ball(m: &mut MatchState, runs: u16, extra: Option<Extra>, wicket: Option<DismissalKind>) -> Result<()> {
    if m.bowler.is_none() {
        let next = eligible_bowlers(m).context("roster exhausted")?[0].id.clone();
        set_next_bowler(m, &next)?;
    }
    let bowler = m.bowler.clone().context("bowler missing")?;
    let striker = m.striker.clone().context("striker missing")?;
    let non_striker = m.non_striker.clone().context("non-striker missing")?;

    let mut event = Ball::delivery(&bowler, &striker, &non_striker, runs);
    if let Some(extra) = extra {
        event = event.with_extra(extra);
    }
    if let Some(kind) = wicket {
        let fielder = m.bowling_team().players[5].clone();
        event = event.with_wicket(WicketDetails {
            kind,
            batter_id: striker.clone(),
            fielder_id: Some(fielder.id.clone()),
            fielder_name: Some(fielder.name.clone()),
        });
    }

    let out = apply(m, event)?;
    if out.wicket_fell && !out.innings_completed {
        let next = m.batting_team().players[m.batting_team().wickets as usize + 1].id.clone();
        m.set_next_batter(&next)?;
    }
    Ok(())
}

fn print_card(card: &InningsScorecard) {
    println!("\n=== {} ===", card.team_name);
    println!("{:<14} {:>4} {:>4} {:>3} {:>3} {:>7}", "Batter", "R", "B", "4s", "6s", "SR");
    for line in &card.batting {
        println!(
            "{:<14} {:>4} {:>4} {:>3} {:>3} {:>7} {}",
            line.name,
            line.runs,
            line.balls,
            line.fours,
            line.sixes,
            line.strike_rate.map(|sr| format!("{:.1}", sr)).unwrap_or_else(|| "-".to_string()),
            line.dismissal,
        );
    }
    println!(
        "Extras: b {} lb {} w {} nb {}",
        card.byes, card.leg_byes, card.wides, card.no_balls
    );
    println!("Total: {} in {} overs", card.total, card.overs);

    println!("{:<14} {:>5} {:>3} {:>4} {:>3} {:>7}", "Bowler", "O", "M", "R", "W", "Econ");
    for line in &card.bowling {
        println!(
            "{:<14} {:>5} {:>3} {:>4} {:>3} {:>7}",
            line.name,
            line.overs,
            line.maidens,
            line.runs,
            line.wickets,
            line.economy.map(|e| format!("{:.2}", e)).unwrap_or_else(|| "-".to_string()),
        );
    }

    if !card.fall_of_wickets.is_empty() {
        let fow: Vec<String> = card
            .fall_of_wickets
            .iter()
            .map(|f| format!("{}-{} ({}, {})", f.wicket_number, f.score, f.batter_name, f.over))
            .collect();
        println!("Fall of wickets: {}", fow.join(", "));
    }
}

fn main() -> Result<()> {
    let lions = squad(&[
        "A. Sharma", "R. Patel", "K. Mendis", "D. Silva", "N. Rao", "S. Iyer", "M. Khan",
        "T. Perera", "V. Joshi", "L. Das", "P. Singh",
    ]);
    let tigers = squad(&[
        "J. Fernando", "B. Kumar", "C. Dias", "H. Gill", "E. Costa", "W. Bravo", "G. Ali",
        "F. Zaman", "O. Shah", "U. Malik", "I. Chandra",
    ]);

    let mut m = MatchState::new(
        TeamInnings::new("City Lions", lions),
        TeamInnings::new("Harbour Tigers", tigers),
        Toss { winner: TeamRef::A, decision: TossDecision::Bat },
        2,
    );

    println!("City Lions won the toss and elected to bat ({} overs a side)", m.overs_limit);

    // First innings: two overs of brisk scoring and one wicket.
    open_innings(&mut m)?;
    ball(&mut m, 4, None, None)?;
    ball(&mut m, 1, None, None)?;
    ball(&mut m, 0, None, None)?;
    ball(&mut m, 1, Some(Extra::Wide), None)?;
    ball(&mut m, 6, None, None)?;
    ball(&mut m, 0, None, Some(DismissalKind::Caught))?;
    ball(&mut m, 2, None, None)?;

    ball(&mut m, 1, None, None)?;
    ball(&mut m, 4, None, None)?;
    ball(&mut m, 2, Some(Extra::Bye), None)?;
    ball(&mut m, 1, None, None)?;
    ball(&mut m, 0, None, None)?;
    ball(&mut m, 6, None, None)?;

    let first = innings_scorecard(&m, 1);
    print_card(&first);

    // The chase.
    open_innings(&mut m)?;
    while !m.completed {
        ball(&mut m, 2, None, None)?;
    }

    let second = innings_scorecard(&m, 2);
    print_card(&second);

    println!("\nResult: {}", m.result.as_deref().unwrap_or("in progress"));
    if let Some(motm) = &m.man_of_the_match {
        println!("Man of the match: {}", m.player_name(motm));
    }

    Ok(())
}
