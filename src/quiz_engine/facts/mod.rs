//! Operation generators, one module per math fact type.
//!
//! Every module exposes the same signature:
//!
//! ```ignore
//! pub fn generate(
//!     practice_number: i64,
//!     min_number: i64,
//!     max_number: i64,
//!     number_of_questions: usize,
//! ) -> Vec<QuestionRecord>
//! ```
//!
//! Output is in deterministic cycling order; the dispatcher in `generator.rs`
//! shuffles it afterwards.

pub mod addition;
pub mod division;
pub mod multiplication;
pub mod subtraction;
