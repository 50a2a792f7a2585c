use crate::quiz_engine::{
    helpers::{question, VaryingOperand},
    models::{MathOperation, QuestionRecord},
};

/// `practice + v` for each step of the varying operand.
pub fn generate(
    practice_number: i64,
    min_number: i64,
    max_number: i64,
    number_of_questions: usize,
) -> Vec<QuestionRecord> {
    VaryingOperand::new(min_number, max_number)
        .take(number_of_questions)
        .map(|v| question(practice_number, v, MathOperation::Add, practice_number + v))
        .collect()
}
