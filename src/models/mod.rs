mod choice;
mod error;
mod ids;
mod question;

pub use choice::{Choice, CHOICE_TEXT_MAX_LENGTH};
pub use error::ValidationError;
pub use ids::{ChoiceId, QuestionId};
pub use question::{Question, DEFAULT_MAX_SELECTIONS, DEFAULT_POINTS, TITLE_MAX_LENGTH};
