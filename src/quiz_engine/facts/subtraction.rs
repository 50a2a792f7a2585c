use crate::quiz_engine::{
    helpers::{question, VaryingOperand},
    models::{MathOperation, QuestionRecord},
};

/// `left − practice`, where the minuend is lifted above the practice number
/// whenever the varying operand falls below it, so answers are never negative.
pub fn generate(
    practice_number: i64,
    min_number: i64,
    max_number: i64,
    number_of_questions: usize,
) -> Vec<QuestionRecord> {
    VaryingOperand::new(min_number, max_number)
        .take(number_of_questions)
        .map(|v| {
            let left = if v < practice_number { practice_number + v } else { v };
            question(left, practice_number, MathOperation::Subtract, left - practice_number)
        })
        .collect()
}
