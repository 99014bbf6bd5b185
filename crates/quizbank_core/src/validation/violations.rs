//! Field-scoped validation errors.

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Question field named by a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionField {
    Kind,
    Prompt,
    Options,
    CorrectAnswer,
    Difficulty,
    Category,
}

impl QuestionField {
    /// Returns the wire name of this field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Kind => "kind",
            Self::Prompt => "prompt",
            Self::Options => "options",
            Self::CorrectAnswer => "correctAnswer",
            Self::Difficulty => "difficulty",
            Self::Category => "category",
        }
    }
}

impl Display for QuestionField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: QuestionField,
    pub message: String,
}

/// Every rule a candidate violated, in rule evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.violations.iter()
    }

    /// Returns whether at least one violation names `field`.
    pub fn has_field(&self, field: QuestionField) -> bool {
        self.violations
            .iter()
            .any(|violation| violation.field == field)
    }

    /// Returns the messages recorded for `field`.
    pub fn messages_for(&self, field: QuestionField) -> Vec<&str> {
        self.violations
            .iter()
            .filter(|violation| violation.field == field)
            .map(|violation| violation.message.as_str())
            .collect()
    }

    pub(crate) fn push(&mut self, field: QuestionField, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field,
            message: message.into(),
        });
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldViolation;
    type IntoIter = std::vec::IntoIter<FieldViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "question validation failed")?;
        for (index, violation) in self.violations.iter().enumerate() {
            let separator = if index == 0 { ": " } else { "; " };
            write!(f, "{separator}{}: {}", violation.field, violation.message)?;
        }
        Ok(())
    }
}

impl Error for ValidationErrors {}
