//! # math_facts_quiz
//!
//! An offline, deterministic arithmetic practice quiz engine.
//!
//! The library generates sequences of math-fact questions (addition,
//! subtraction, multiplication, division) around a single *practice number*,
//! with the other operand cycling through a configured range. Every generated
//! question is algebraically exact: subtraction never goes negative and
//! division always has an integer quotient.
//!
//! ## How it works
//!
//! 1. Build a [`QuizSettings`] (or normalise a raw [`SettingsForm`] with
//!    [`QuizSettings::from_form`]).
//! 2. Call [`questions_generator`] — the engine picks the generator for the
//!    math-fact type, builds the questions in cycling order, then shuffles
//!    them with a Fisher-Yates pass.
//! 3. Either grade the returned [`QuestionRecord`]s yourself with
//!    [`QuestionRecord::grade`], or drive a [`QuizSession`] which handles
//!    answering, the optional countdown, and the final [`QuizResults`].
//!
//! ## Key features
//!
//! - **Deterministic**: set `rng_seed: Some(u64)` to reproduce the exact same
//!   question order every time.
//! - **Injectable randomness**: [`questions_generator_with_rng`] accepts any
//!   `rand::Rng`.
//! - **Timer race**: a timed session finalises on whichever comes first, the
//!   last answer or the countdown reaching zero.
//!
//! ## Quick start
//!
//! ```rust
//! use math_facts_quiz::{questions_generator, MathFactType, QuizSettings};
//!
//! let settings = QuizSettings {
//!     practice_number: 7,
//!     min_number: 1,
//!     max_number: 12,
//!     number_of_questions: 12,
//!     rng_seed: Some(42),
//!     ..QuizSettings::new(MathFactType::Multiplication)
//! };
//!
//! let mut questions = questions_generator(&settings).unwrap();
//! for q in &questions {
//!     println!("{} ?", q.prompt());
//! }
//!
//! let answer = questions[0].correct_answer;
//! questions[0].grade(Some(answer));
//! assert_eq!(questions[0].is_correct, Some(true));
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `math_facts_quiz::questions_generator`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    questions_generator, questions_generator_with_rng, to_results_json, MathFactType,
    MathOperation, QuestionRecord, QuizError, QuizResult, QuizResults, QuizSession,
    QuizSettings, Screen, SettingsForm,
};
