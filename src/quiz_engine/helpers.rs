//! Shared pieces used by every fact generator.
//!
//! All four generators walk the same cycling counter and build the same
//! record shape; they only differ in how they turn the counter into operands.

use crate::quiz_engine::models::{MathOperation, QuestionRecord};

/// The varying operand: counts up from `lower` to `upper` inclusive, then
/// wraps back to `lower`.
///
/// When `lower > upper` the counter never advances and every step yields
/// `lower`.
#[derive(Debug, Clone)]
pub struct VaryingOperand {
    lower: i64,
    upper: i64,
    current: i64,
}

impl VaryingOperand {
    pub fn new(lower: i64, upper: i64) -> Self {
        VaryingOperand { lower, upper, current: lower }
    }
}

impl Iterator for VaryingOperand {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let value = self.current;
        self.current = if self.current < self.upper { self.current + 1 } else { self.lower };
        Some(value)
    }
}

/// Build an unanswered question record.
pub fn question(
    left_operand: i64, right_operand: i64,
    math_operation: MathOperation, correct_answer: i64,
) -> QuestionRecord {
    QuestionRecord {
        left_operand,
        right_operand,
        math_operation,
        correct_answer,
        answer_selected: None,
        is_correct: None,
    }
}
