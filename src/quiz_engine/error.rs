use std::fmt;

/// Everything that can go wrong while configuring or generating a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// The math-fact tag is not one of the four known labels.
    InvalidMathFactType(String),

    /// The range is inverted (minimum above maximum).
    MinGreaterThanMax { min: i64, max: i64 },

    /// A timed quiz was requested with no time on the clock.
    InvalidTime,
}

pub type QuizResult<T> = Result<T, QuizError>;

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::InvalidMathFactType(_) => write!(f, "Invalid math fact type"),
            QuizError::MinGreaterThanMax { .. } => {
                write!(f, "The Minimum number cannot be greater than the Maximum number.")
            }
            QuizError::InvalidTime => write!(f, "Please enter a valid time for the quiz."),
        }
    }
}

impl std::error::Error for QuizError {}
