//! Match result text.

use crate::models::MatchState;

/// Compare the two innings and produce the result line. Called once the
/// second innings has closed; at that point the batting alias still points
/// at the chasing side.
pub fn result_text(state: &MatchState) -> String {
    let chasing = state.batting_team();
    let setting = state.bowling_team();
    let first_score = state.first_innings_score.unwrap_or(setting.score);

    if chasing.score > first_score {
        let wickets_remaining = 10 - chasing.wickets.min(10);
        format!("{} won by {} {}", chasing.name, wickets_remaining, plural(wickets_remaining as u32, "wicket"))
    } else if first_score > chasing.score {
        let margin = (first_score - chasing.score) as u32;
        format!("{} won by {} {}", setting.name, margin, plural(margin, "run"))
    } else {
        "Match tied".to_string()
    }
}

fn plural(n: u32, unit: &str) -> String {
    if n == 1 {
        unit.to_string()
    } else {
        format!("{}s", unit)
    }
}
