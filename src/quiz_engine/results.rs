use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::quiz_engine::models::QuestionRecord;

/// Final state of a quiz: every question, answered or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResults {
    pub questions: Vec<QuestionRecord>,
}

impl QuizResults {
    pub fn new(questions: Vec<QuestionRecord>) -> Self {
        QuizResults { questions }
    }

    pub fn total_correct(&self) -> usize {
        self.questions.iter().filter(|q| q.is_correct == Some(true)).count()
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// e.g. "Total Score: 7/10".
    pub fn score_line(&self) -> String {
        format!("Total Score: {}/{}", self.total_correct(), self.total())
    }
}

/// Build one result row. Wrong or unanswered rows also carry what was typed.
fn result_row(number: usize, q: &QuestionRecord) -> Value {
    let correct = q.is_correct == Some(true);
    json!({
        "number": number,
        "equation": q.equation(),
        "leftOperand": q.left_operand,
        "rightOperand": q.right_operand,
        "mathOperation": q.math_operation,
        "correctAnswer": q.correct_answer,
        "answerSelected": if correct { Value::Null } else { json!(q.answer_selected) },
        "isCorrect": correct
    })
}

/// Map [`QuizResults`] to the JSON object a results screen renders.
pub fn to_results_json(results: &QuizResults) -> Value {
    let rows: Vec<Value> = results
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| result_row(i + 1, q))
        .collect();

    json!({
        "score": results.score_line(),
        "totalCorrect": results.total_correct(),
        "total": results.total(),
        "questions": rows
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::helpers::question;
    use crate::quiz_engine::models::MathOperation;

    fn graded() -> QuizResults {
        let mut a = question(2, 3, MathOperation::Add, 5);
        a.grade(Some(5));
        let mut b = question(2, 4, MathOperation::Add, 6);
        b.grade(Some(7));
        let c = question(2, 5, MathOperation::Add, 7);
        QuizResults::new(vec![a, b, c])
    }

    #[test]
    fn counts_only_correct_answers() {
        let r = graded();
        assert_eq!(r.total_correct(), 1);
        assert_eq!(r.total(), 3);
        assert_eq!(r.score_line(), "Total Score: 1/3");
    }

    #[test]
    fn json_view_lists_every_question() {
        let v = to_results_json(&graded());
        assert_eq!(v["totalCorrect"], 1);
        assert_eq!(v["total"], 3);
        assert_eq!(v["questions"].as_array().map(Vec::len), Some(3));
        assert_eq!(v["questions"][0]["equation"], "2 + 3 = 5");
        assert_eq!(v["questions"][0]["answerSelected"], Value::Null);
        assert_eq!(v["questions"][1]["answerSelected"], 7);
        assert_eq!(v["questions"][1]["isCorrect"], false);
        assert_eq!(v["questions"][2]["answerSelected"], Value::Null);
        assert_eq!(v["questions"][2]["mathOperation"], "+");
    }
}
