//! # quiz-question
//!
//! A validated model of a multiple-choice quiz question.
//!
//! ## Usage
//!
//! ```rust
//! use quiz_question::{Question, ValidationError};
//!
//! fn main() -> Result<(), ValidationError> {
//!     let mut question = Question::with_limits("Which are primes?", 2, 2)?;
//!     let two = question.add_choice("2", false)?.id();
//!     let four = question.add_choice("4", false)?.id();
//!     let five = question.add_choice("5", false)?.id();
//!
//!     // Authoring: mark the correct answers
//!     question.set_correct_choices([two, five])?;
//!
//!     // Answering: validate a selection against max_selections
//!     let selected = question.select_choices([five, two])?;
//!     assert_eq!(selected, vec![five, two]);
//!     assert!(question.select_choices([two, four, five]).is_err());
//!
//!     Ok(())
//! }
//! ```

mod data;
mod models;

pub use data::{load_questions_from_json, parse_questions, LoadError};
pub use models::{
    Choice, ChoiceId, Question, QuestionId, ValidationError, CHOICE_TEXT_MAX_LENGTH,
    DEFAULT_MAX_SELECTIONS, DEFAULT_POINTS, TITLE_MAX_LENGTH,
};
