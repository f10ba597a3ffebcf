use thiserror::Error;

/// Rejections raised while turning user text into events.
///
/// The store itself never fails; these only come from the input boundary.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("Empty command")]
    EmptyCommand,

    #[error("Unknown command: '{0}'")]
    UnknownCommand(String),

    #[error("Unknown key: '{0}'")]
    UnknownKey(String),

    #[error("Ambiguous key: '{key}' matches {candidates:?}")]
    AmbiguousKey { key: String, candidates: Vec<String> },

    #[error("Missing {0}")]
    Missing(&'static str),

    #[error("Invalid score: '{0}'")]
    InvalidScore(String),

    #[error("Score {score} is outside {min}..={max}")]
    ScoreOutOfRange { score: f64, min: f64, max: f64 },

    #[error("Invalid year: '{0}'")]
    InvalidYear(String),

    #[error("Invalid semester: '{0}'")]
    InvalidSemester(String),

    #[error("Invalid period: '{0}'")]
    InvalidPeriod(String),

    #[error("Period {0} is not selectable")]
    PeriodNotSelectable(String),

    #[error("Unknown icon: '{0}'")]
    UnknownIcon(String),

    #[error("Unknown scale: '{0}'")]
    UnknownScale(String),
}
