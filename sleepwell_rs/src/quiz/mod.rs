//! Sleep setup quiz: question table, answer mapping, recommendation rules
//! and the flow controller.
//!
//! # Example
//!
//! ```rust
//! use sleepwell::quiz::{QuizController, Transition};
//!
//! let mut quiz = QuizController::new();
//! for value in ["side", "hot", "pain"] {
//!     if let Transition::Scheduled(_) = quiz.answer(value).unwrap() {
//!         quiz.advance();
//!     }
//! }
//! let rec = quiz.recommendation().unwrap();
//! assert_eq!(rec.title, "Stay Cool All Night");
//! ```

mod answers;
mod controller;
mod questions;
mod rules;

pub use answers::{CompleteAnswers, QuizAnswers};
pub use controller::{DEFAULT_TRANSITION, QuizController, QuizEvent, Transition};
pub use questions::{Concern, Position, QUESTIONS, Question, QuestionIcon, QuestionId, Temperature};
pub use rules::{MAX_PRODUCTS, Recommendation, all_recommendations, recommend};

/// Misuse of the quiz controller. The rendered controls only ever offer
/// valid options, so these surface from the CLI and tests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("the quiz is already complete; reset it to start over")]
    Completed,

    #[error("{value:?} is not an option for {question}")]
    InvalidOption { question: QuestionId, value: String },
}
