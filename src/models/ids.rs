//! Identifiers for questions and choices.
//!
//! Both are random v4 UUIDs drawn at construction. There is no registry of
//! issued ids; uniqueness rests on the UUID generator.

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct QuestionId(Uuid);

impl QuestionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for QuestionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ChoiceId(Uuid);

impl ChoiceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ChoiceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_distinct() {
        assert_ne!(QuestionId::new(), QuestionId::new());
        assert_ne!(ChoiceId::new(), ChoiceId::new());
    }

    #[test]
    fn test_id_displays_as_hyphenated_uuid() {
        let id = ChoiceId::new();
        let shown = id.to_string();
        assert_eq!(shown.len(), 36);
        assert_eq!(shown.matches('-').count(), 4);
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = QuestionId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }
}
