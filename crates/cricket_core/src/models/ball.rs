//! The delivery event: one ball, legal or otherwise.
//!
//! A `Ball` is the immutable unit of the match ledger. It references players
//! by id only — rosters stay with the match, and anything that needs a name
//! at display time (fall of wickets, scorecards) copies the display string,
//! never the player object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Extras taxonomy. At most one kind applies to a single delivery; a plain
/// scoring ball carries none.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Extra {
    Wide,
    NoBall,
    Bye,
    LegBye,
}

impl Extra {
    /// Wides and no-balls do not count toward the 6-ball over.
    pub fn is_illegal_delivery(&self) -> bool {
        matches!(self, Extra::Wide | Extra::NoBall)
    }

    /// Wides and no-balls are charged to the bowler; byes and leg-byes are
    /// team extras only.
    pub fn charged_to_bowler(&self) -> bool {
        matches!(self, Extra::Wide | Extra::NoBall)
    }
}

/// How a batter got out. Closed set — scorecard text and bowler credit are
/// derived by exhaustive match, never by string comparison.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DismissalKind {
    Bowled,
    Caught,
    Lbw,
    RunOut,
    Stumped,
    HitWicket,
}

impl DismissalKind {
    /// Whether this dismissal counts as a wicket for the bowler.
    pub fn credits_bowler(&self) -> bool {
        match self {
            DismissalKind::Bowled
            | DismissalKind::Caught
            | DismissalKind::Lbw
            | DismissalKind::Stumped
            | DismissalKind::HitWicket => true,
            DismissalKind::RunOut => false,
        }
    }

    /// Scorebook line for the dismissal, e.g. "c Smith b Khan".
    pub fn describe(&self, bowler_name: &str, fielder_name: Option<&str>) -> String {
        match self {
            DismissalKind::Bowled => format!("b {}", bowler_name),
            DismissalKind::Caught => match fielder_name {
                Some(f) => format!("c {} b {}", f, bowler_name),
                None => format!("c & b {}", bowler_name),
            },
            DismissalKind::Lbw => format!("lbw b {}", bowler_name),
            DismissalKind::RunOut => match fielder_name {
                Some(f) => format!("run out ({})", f),
                None => "run out".to_string(),
            },
            DismissalKind::Stumped => match fielder_name {
                Some(f) => format!("st {} b {}", f, bowler_name),
                None => format!("st b {}", bowler_name),
            },
            DismissalKind::HitWicket => format!("hit wicket b {}", bowler_name),
        }
    }
}

/// Wicket payload on a delivery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WicketDetails {
    pub kind: DismissalKind,
    /// The dismissed batter — usually the striker, but a run out can take
    /// either end.
    pub batter_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fielder_id: Option<String>,
    /// Fielder display name captured at the time of the dismissal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fielder_name: Option<String>,
}

/// One delivery in the match ledger. Never mutated after being applied;
/// only the undo controller may remove it (last-in only).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ball {
    /// 1 or 2.
    pub innings: u8,
    /// Completed overs at the moment of delivery.
    pub over_number: u16,
    /// Legal balls bowled in the over after this delivery (unchanged by
    /// wides/no-balls).
    pub ball_number: u8,
    pub bowler_id: String,
    pub striker_id: String,
    pub non_striker_id: String,
    /// Runs scored off this delivery. On a flagged ball the whole value
    /// belongs to that extras bucket (a wide with no running is `runs: 1`);
    /// on a plain ball it is all off the bat.
    pub runs: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<Extra>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wicket: Option<WicketDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
    pub at: DateTime<Utc>,
}

impl Ball {
    /// Build a delivery event for the players currently in the middle.
    /// Sequence fields (`innings`, `over_number`, `ball_number`) are stamped
    /// by the delivery processor when the ball is applied.
    pub fn delivery(
        bowler_id: impl Into<String>,
        striker_id: impl Into<String>,
        non_striker_id: impl Into<String>,
        runs: u16,
    ) -> Self {
        Self {
            innings: 0,
            over_number: 0,
            ball_number: 0,
            bowler_id: bowler_id.into(),
            striker_id: striker_id.into(),
            non_striker_id: non_striker_id.into(),
            runs,
            extra: None,
            wicket: None,
            commentary: None,
            at: Utc::now(),
        }
    }

    pub fn with_extra(mut self, extra: Extra) -> Self {
        self.extra = Some(extra);
        self
    }

    pub fn with_wicket(mut self, wicket: WicketDetails) -> Self {
        self.wicket = Some(wicket);
        self
    }

    pub fn with_commentary(mut self, text: impl Into<String>) -> Self {
        self.commentary = Some(text.into());
        self
    }

    /// A legal delivery counts toward the 6-ball over.
    pub fn is_legal(&self) -> bool {
        self.extra.map_or(true, |e| !e.is_illegal_delivery())
    }

    pub fn is_wide(&self) -> bool {
        self.extra == Some(Extra::Wide)
    }

    pub fn is_no_ball(&self) -> bool {
        self.extra == Some(Extra::NoBall)
    }

    /// Runs credited to the striker's personal tally.
    pub fn runs_off_bat(&self) -> u16 {
        if self.extra.is_none() {
            self.runs
        } else {
            0
        }
    }

    /// Runs charged against the bowler (off the bat, plus wides/no-balls).
    pub fn runs_conceded_by_bowler(&self) -> u16 {
        match self.extra {
            None => self.runs,
            Some(e) if e.charged_to_bowler() => self.runs,
            Some(_) => 0,
        }
    }

    /// A dot for the bowler: a legal delivery conceding nothing.
    pub fn is_dot(&self) -> bool {
        self.is_legal() && self.runs_conceded_by_bowler() == 0
    }

    /// "O.B" position string used by the fall-of-wickets log.
    pub fn over_ball(&self) -> String {
        format!("{}.{}", self.over_number, self.ball_number)
    }
}
