use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("{name} bowled the previous over and cannot bowl consecutive overs")]
    ConsecutiveOvers { name: String },

    #[error("{name} is currently batting and cannot be given the ball")]
    BowlerIsBatting { name: String },

    #[error("no eligible bowler remains on the roster")]
    RosterExhausted,

    #[error("a bowler must be selected before the next delivery")]
    BowlerRequired,

    #[error("a batter must be sent in before the next delivery")]
    BatterRequired,

    #[error("no batting slot is vacant")]
    NoVacantBattingSlot,

    #[error("match is already complete")]
    MatchComplete,

    #[error("player not found on the roster: {id}")]
    UnknownPlayer { id: String },
}

pub type Result<T> = std::result::Result<T, ScoringError>;
