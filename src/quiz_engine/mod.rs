//! Core quiz engine — question generation, shuffling, sessions and results.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: math-fact types, operations, question records, screens |
//! | `error`      | `QuizError` and the `QuizResult` alias |
//! | `shuffle`    | In-place Fisher-Yates shuffle over an injected RNG |
//! | `helpers`    | Cycling varying operand and the shared record builder |
//! | `facts`      | The four operation generators |
//! | `generator`  | Single entry point `questions_generator()` — dispatches to facts |
//! | `settings`   | Quiz settings, defaults, and raw form normalisation |
//! | `session`    | Answer/timer state machine for one quiz run |
//! | `results`    | Score summary and its JSON view |

pub mod error;
pub mod facts;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod results;
pub mod session;
pub mod settings;
pub mod shuffle;

// Re-export the public API surface so callers can use
// `quiz_engine::questions_generator` without reaching into sub-modules.
pub use error::{QuizError, QuizResult};
pub use generator::{questions_generator, questions_generator_with_rng};
pub use models::{MathFactType, MathOperation, QuestionRecord, Screen};
pub use results::{to_results_json, QuizResults};
pub use session::QuizSession;
pub use settings::{QuizSettings, SettingsForm};
