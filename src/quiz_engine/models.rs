use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::error::QuizError;

// ---------------------------------------------------------------------------
// Math fact types and operations
// ---------------------------------------------------------------------------

/// Arithmetic symbol carried by every question record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MathOperation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "×")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

impl MathOperation {
    pub fn symbol(self) -> &'static str {
        match self {
            MathOperation::Add      => "+",
            MathOperation::Subtract => "-",
            MathOperation::Multiply => "×",
            MathOperation::Divide   => "÷",
        }
    }

    /// Apply the operation. Division by zero yields `None`.
    ///
    /// ```rust
    /// use math_facts_quiz::MathOperation;
    ///
    /// assert_eq!(MathOperation::Divide.apply(12, 4), Some(3));
    /// assert_eq!(MathOperation::Divide.apply(12, 0), None);
    /// ```
    pub fn apply(self, left: i64, right: i64) -> Option<i64> {
        match self {
            MathOperation::Add      => left.checked_add(right),
            MathOperation::Subtract => left.checked_sub(right),
            MathOperation::Multiply => left.checked_mul(right),
            MathOperation::Divide   => left.checked_div(right),
        }
    }
}

impl fmt::Display for MathOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The kind of math fact being drilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MathFactType {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl MathFactType {
    pub const ALL: [MathFactType; 4] = [
        MathFactType::Addition,
        MathFactType::Subtraction,
        MathFactType::Multiplication,
        MathFactType::Division,
    ];

    /// Lowercase tag used in settings ("addition", "division", ...).
    pub fn label(self) -> &'static str {
        match self {
            MathFactType::Addition       => "addition",
            MathFactType::Subtraction    => "subtraction",
            MathFactType::Multiplication => "multiplication",
            MathFactType::Division       => "division",
        }
    }

    pub fn operation(self) -> MathOperation {
        match self {
            MathFactType::Addition       => MathOperation::Add,
            MathFactType::Subtraction    => MathOperation::Subtract,
            MathFactType::Multiplication => MathOperation::Multiply,
            MathFactType::Division       => MathOperation::Divide,
        }
    }
}

impl fmt::Display for MathFactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for MathFactType {
    type Err = QuizError;

    /// Tags are matched exactly; anything else is an invalid math fact type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MathFactType::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| QuizError::InvalidMathFactType(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Screens
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    QuizSettings,
    Quiz,
    QuizResults,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::QuizSettings => write!(f, "Quiz Settings"),
            Screen::Quiz         => write!(f, "Quiz"),
            Screen::QuizResults  => write!(f, "Quiz Results"),
        }
    }
}

// ---------------------------------------------------------------------------
// Question record
// ---------------------------------------------------------------------------

/// One generated question plus the grading slots filled in by the quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub left_operand: i64,
    pub right_operand: i64,
    pub math_operation: MathOperation,
    pub correct_answer: i64,
    /// `None` until the question is answered.
    pub answer_selected: Option<i64>,
    /// `None` until the question is answered.
    pub is_correct: Option<bool>,
}

impl QuestionRecord {
    /// Record `answer` and mark correctness. A missing answer is graded wrong.
    pub fn grade(&mut self, answer: Option<i64>) -> bool {
        let correct = answer == Some(self.correct_answer);
        self.answer_selected = answer;
        self.is_correct = Some(correct);
        correct
    }

    pub fn is_answered(&self) -> bool {
        self.is_correct.is_some()
    }

    /// Question as shown to the player, e.g. "7 × 3 =".
    pub fn prompt(&self) -> String {
        format!("{} {} {} =", self.left_operand, self.math_operation, self.right_operand)
    }

    /// Full equation with the correct answer, e.g. "7 × 3 = 21".
    pub fn equation(&self) -> String {
        format!("{} {}", self.prompt(), self.correct_answer)
    }
}
