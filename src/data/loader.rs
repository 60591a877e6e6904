use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{Question, ValidationError, DEFAULT_MAX_SELECTIONS, DEFAULT_POINTS};

/// Errors raised while loading a question bank.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse question bank: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("question bank must contain at least one question")]
    Empty,

    #[error("question {index} is invalid: {source}")]
    Invalid {
        index: usize,
        #[source]
        source: ValidationError,
    },
}

#[derive(Deserialize)]
struct QuestionDef {
    title: String,
    #[serde(default = "default_points")]
    points: u32,
    #[serde(default = "default_max_selections")]
    max_selections: u32,
    #[serde(default)]
    choices: Vec<ChoiceDef>,
}

#[derive(Deserialize)]
struct ChoiceDef {
    text: String,
    #[serde(default)]
    is_correct: bool,
}

fn default_points() -> u32 {
    DEFAULT_POINTS
}

fn default_max_selections() -> u32 {
    DEFAULT_MAX_SELECTIONS
}

impl QuestionDef {
    fn build(self) -> Result<Question, ValidationError> {
        let mut question = Question::with_limits(self.title, self.points, self.max_selections)?;
        for choice in self.choices {
            question.add_choice(choice.text, choice.is_correct)?;
        }
        Ok(question)
    }
}

/// Load and validate a question bank from a JSON file.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading question bank");

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_questions(&json_content)
}

/// Build questions from a JSON array of question definitions.
///
/// Every definition goes through the same validation as [`Question::with_limits`]
/// and [`Question::add_choice`]; the first invalid one fails the whole load.
pub fn parse_questions(json: &str) -> Result<Vec<Question>, LoadError> {
    let defs: Vec<QuestionDef> = serde_json::from_str(json)?;

    if defs.is_empty() {
        return Err(LoadError::Empty);
    }

    let questions = defs
        .into_iter()
        .enumerate()
        .map(|(index, def)| {
            def.build().map_err(|source| {
                warn!(index, error = %source, "rejected question definition");
                LoadError::Invalid { index, source }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = questions.len(), "loaded question bank");
    Ok(questions)
}
