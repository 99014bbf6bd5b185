//! Question domain model.
//!
//! # Responsibility
//! - Define the canonical record stored by `QuestionStore`.
//! - Model the question kind as a tagged variant so kind-specific fields
//!   cannot exist on the wrong kind.
//!
//! # Invariants
//! - `id` and `created_at` are assigned by the store and never change.
//! - `prompt`, `correct_answer` and `category` are trimmed and non-empty.
//! - Multiple-choice questions hold >= 2 distinct options and the correct
//!   answer is one of them.

use crate::model::candidate::CandidateInput;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a stored question.
pub type QuestionId = Uuid;

/// Wire name of the multiple-choice kind.
pub const KIND_MULTIPLE_CHOICE: &str = "multiple-choice";
/// Wire name of the true/false kind.
pub const KIND_TRUE_FALSE: &str = "true-false";
/// Wire name of the short-answer kind.
pub const KIND_SHORT_ANSWER: &str = "short-answer";

/// Question shape, with the payload that only that shape carries.
///
/// Serialized as a flattened `kind` tag, e.g.
/// `{"kind": "multiple-choice", "options": ["3", "4"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum QuestionKind {
    /// Pick one of several options.
    MultipleChoice {
        /// Ordered, trimmed, non-empty choices.
        options: Vec<String>,
    },
    /// Answer is `true` or `false`.
    TrueFalse,
    /// Free-text answer.
    ShortAnswer,
}

impl QuestionKind {
    /// Returns the stable wire name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MultipleChoice { .. } => KIND_MULTIPLE_CHOICE,
            Self::TrueFalse => KIND_TRUE_FALSE,
            Self::ShortAnswer => KIND_SHORT_ANSWER,
        }
    }

    /// Returns the choice list for multiple-choice questions.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Self::MultipleChoice { options } => Some(options.as_slice()),
            Self::TrueFalse | Self::ShortAnswer => None,
        }
    }
}

/// Difficulty rating of one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Returns the stable wire name for this difficulty.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Parses an exact wire name. No case folding is applied.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

/// Canonical question record held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Assigned at creation, never reused after deletion.
    pub id: QuestionId,
    #[serde(flatten)]
    pub kind: QuestionKind,
    pub prompt: String,
    pub correct_answer: String,
    pub difficulty: Difficulty,
    /// Free-text grouping label, compared case-sensitively.
    pub category: String,
    /// Unix epoch milliseconds, wall-clock based.
    pub created_at: i64,
}

impl Question {
    /// Converts this record back into candidate form.
    ///
    /// Used to re-run validation over merged updates and seeded records.
    pub fn to_candidate(&self) -> CandidateInput {
        CandidateInput {
            kind: Some(self.kind.name().to_string()),
            prompt: Some(self.prompt.clone()),
            options: self.kind.options().map(<[String]>::to_vec),
            correct_answer: Some(self.correct_answer.clone()),
            difficulty: Some(self.difficulty.as_str().to_string()),
            category: Some(self.category.clone()),
        }
    }
}

/// Validated question content that has not been stored yet.
///
/// Only `validate_candidate` constructs this type, so holding one proves the
/// content passed every field rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub(crate) kind: QuestionKind,
    pub(crate) prompt: String,
    pub(crate) correct_answer: String,
    pub(crate) difficulty: Difficulty,
    pub(crate) category: String,
}

impl NewQuestion {
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub(crate) fn into_question(self, id: QuestionId, created_at: i64) -> Question {
        Question {
            id,
            kind: self.kind,
            prompt: self.prompt,
            correct_answer: self.correct_answer,
            difficulty: self.difficulty,
            category: self.category,
            created_at,
        }
    }
}

/// Partial field set applied by `QuestionStore::update`.
///
/// Has no `id` or `created_at` field; both are fixed at creation.
/// A `kind` patch replaces the whole variant, options included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionPatch {
    pub kind: Option<QuestionKind>,
    pub prompt: Option<String>,
    pub correct_answer: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub category: Option<String>,
}

impl QuestionPatch {
    /// Returns whether this patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.prompt.is_none()
            && self.correct_answer.is_none()
            && self.difficulty.is_none()
            && self.category.is_none()
    }
}
