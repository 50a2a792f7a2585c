use crate::quiz_engine::{
    helpers::{question, VaryingOperand},
    models::{MathOperation, QuestionRecord},
};

/// `(v × practice) ÷ practice`, so every quotient is the exact integer `v`.
///
/// A range starting at zero yields the same `0 ÷ practice = 0` question for
/// every record rather than cycling. A zero practice number is the caller's
/// problem: records are still produced, with the multiplier as the answer.
pub fn generate(
    practice_number: i64,
    min_number: i64,
    max_number: i64,
    number_of_questions: usize,
) -> Vec<QuestionRecord> {
    if min_number == 0 {
        return (0..number_of_questions)
            .map(|_| question(0, practice_number, MathOperation::Divide, 0))
            .collect();
    }

    VaryingOperand::new(min_number, max_number)
        .take(number_of_questions)
        .map(|v| question(v * practice_number, practice_number, MathOperation::Divide, v))
        .collect()
}
