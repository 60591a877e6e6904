use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, warn};

use super::error::validate_text;
use super::{Choice, ChoiceId, QuestionId, ValidationError};

/// Maximum length of a question title, in characters.
pub const TITLE_MAX_LENGTH: usize = 200;

pub const DEFAULT_POINTS: u32 = 1;
pub const DEFAULT_MAX_SELECTIONS: u32 = 1;

/// A multiple-choice question and its answer choices.
///
/// All mutation of the choice list goes through the methods here, so the
/// title, points and selection limit stay valid for the question's lifetime.
/// A `Question` has no internal locking; callers sharing one across threads
/// must synchronize access themselves.
#[derive(Debug, Serialize)]
pub struct Question {
    id: QuestionId,
    title: String,
    points: u32,
    max_selections: u32,
    choices: Vec<Choice>,
}

impl Question {
    /// Create a question worth [`DEFAULT_POINTS`] that accepts a single selection.
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_limits(title, DEFAULT_POINTS, DEFAULT_MAX_SELECTIONS)
    }

    /// Create a question with explicit points and selection limit.
    ///
    /// Fails if the title is empty or longer than [`TITLE_MAX_LENGTH`], or if
    /// `points` or `max_selections` is zero.
    pub fn with_limits(
        title: impl Into<String>,
        points: u32,
        max_selections: u32,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        validate_text("title", &title, TITLE_MAX_LENGTH)?;

        if points < 1 {
            return Err(ValidationError::below_minimum("points", 1, points));
        }
        if max_selections < 1 {
            return Err(ValidationError::below_minimum(
                "max_selections",
                1,
                max_selections,
            ));
        }

        Ok(Self {
            id: QuestionId::new(),
            title,
            points,
            max_selections,
            choices: Vec::new(),
        })
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn max_selections(&self) -> u32 {
        self.max_selections
    }

    /// Choices in insertion order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn choice(&self, id: ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id() == id)
    }

    pub fn correct_choices(&self) -> impl Iterator<Item = &Choice> {
        self.choices.iter().filter(|c| c.is_correct())
    }

    /// Append a new choice and return it.
    pub fn add_choice(
        &mut self,
        text: impl Into<String>,
        is_correct: bool,
    ) -> Result<&Choice, ValidationError> {
        let choice = Choice::new(text, is_correct)?;
        debug!(question = %self.id, choice = %choice.id(), "added choice");

        let index = self.choices.len();
        self.choices.push(choice);
        Ok(&self.choices[index])
    }

    /// Remove the choice with the given id, keeping the order of the rest.
    ///
    /// Returns the removed choice, or `None` if no choice has that id. An
    /// unknown id leaves the question untouched.
    pub fn remove_choice_by_id(&mut self, id: ChoiceId) -> Option<Choice> {
        let index = self.choices.iter().position(|c| c.id() == id)?;
        debug!(question = %self.id, choice = %id, "removed choice");
        Some(self.choices.remove(index))
    }

    pub fn remove_all_choices(&mut self) {
        debug!(question = %self.id, count = self.choices.len(), "cleared choices");
        self.choices.clear();
    }

    /// Mark exactly the given choices as correct and every other choice as
    /// incorrect.
    ///
    /// Every id is checked before any flag changes: on error the question is
    /// left as it was.
    pub fn set_correct_choices<I>(&mut self, ids: I) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = ChoiceId>,
    {
        let mut correct = HashSet::new();
        for id in ids {
            if self.choice(id).is_none() {
                return Err(ValidationError::UnknownChoice { id });
            }
            correct.insert(id);
        }

        for choice in &mut self.choices {
            choice.set_correct(correct.contains(&choice.id()));
        }
        debug!(question = %self.id, correct = correct.len(), "updated correct choices");

        Ok(())
    }

    /// Validate a quiz-taker's selection against this question.
    ///
    /// Returns the selected ids in the order given, with repeated ids kept
    /// only at their first position. Fails if any id is not one of this
    /// question's choices, or if more than `max_selections` distinct ids are
    /// selected. Correctness flags are not touched.
    pub fn select_choices<I>(&self, ids: I) -> Result<Vec<ChoiceId>, ValidationError>
    where
        I: IntoIterator<Item = ChoiceId>,
    {
        let mut seen = HashSet::new();
        let mut selected = Vec::new();

        for id in ids {
            if self.choice(id).is_none() {
                warn!(question = %self.id, choice = %id, "selection references unknown choice");
                return Err(ValidationError::UnknownChoice { id });
            }
            if seen.insert(id) {
                selected.push(id);
            }
        }

        if selected.len() > self.max_selections as usize {
            warn!(
                question = %self.id,
                selected = selected.len(),
                max = self.max_selections,
                "too many choices selected"
            );
            return Err(ValidationError::TooManySelections {
                max: self.max_selections,
                actual: selected.len(),
            });
        }

        Ok(selected)
    }
}
