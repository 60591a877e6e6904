use serde::Serialize;

use super::error::validate_text;
use super::{ChoiceId, ValidationError};

/// Maximum length of a choice's text, in characters.
pub const CHOICE_TEXT_MAX_LENGTH: usize = 100;

/// A single answer option. Owned by exactly one [`Question`](super::Question).
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Choice {
    id: ChoiceId,
    text: String,
    is_correct: bool,
}

impl Choice {
    /// Create a choice with a fresh id.
    ///
    /// Fails if `text` is empty or longer than [`CHOICE_TEXT_MAX_LENGTH`].
    pub fn new(text: impl Into<String>, is_correct: bool) -> Result<Self, ValidationError> {
        let text = text.into();
        validate_text("text", &text, CHOICE_TEXT_MAX_LENGTH)?;

        Ok(Self {
            id: ChoiceId::new(),
            text,
            is_correct,
        })
    }

    pub fn id(&self) -> ChoiceId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    pub(crate) fn set_correct(&mut self, is_correct: bool) {
        self.is_correct = is_correct;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_choice() {
        let choice = Choice::new("Paris", true).unwrap();
        assert_eq!(choice.text(), "Paris");
        assert!(choice.is_correct());
    }

    #[test]
    fn test_new_choice_rejects_invalid_text() {
        assert!(matches!(
            Choice::new("", false),
            Err(ValidationError::EmptyField { field: "text" })
        ));
        assert!(Choice::new("a".repeat(100), false).is_ok());
        assert!(matches!(
            Choice::new("a".repeat(101), false),
            Err(ValidationError::TooLong { max: 100, actual: 101, .. })
        ));
    }

    #[test]
    fn test_choices_get_unique_ids() {
        let a = Choice::new("same", false).unwrap();
        let b = Choice::new("same", false).unwrap();
        assert_ne!(a.id(), b.id());
    }
}
