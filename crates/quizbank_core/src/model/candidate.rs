//! Unvalidated question input.
//!
//! # Responsibility
//! - Carry user-entered fields as loosely typed values.
//! - Merge partial updates onto an existing record's candidate form.
//!
//! # Invariants
//! - No rule is checked here; `validate_candidate` owns every field rule.

use crate::model::question::QuestionPatch;
use serde::{Deserialize, Serialize};

/// Raw candidate record as produced by an input form or a JSON payload.
///
/// Every field is optional so missing input surfaces as a field violation
/// instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateInput {
    /// One of `multiple-choice|true-false|short-answer`.
    pub kind: Option<String>,
    pub prompt: Option<String>,
    /// Read only for multiple-choice candidates.
    pub options: Option<Vec<String>>,
    pub correct_answer: Option<String>,
    /// One of `easy|medium|hard`.
    pub difficulty: Option<String>,
    pub category: Option<String>,
}

impl CandidateInput {
    /// Applies a partial update on top of this candidate (shallow merge).
    pub fn with_patch(mut self, patch: &QuestionPatch) -> Self {
        if let Some(kind) = &patch.kind {
            self.kind = Some(kind.name().to_string());
            self.options = kind.options().map(<[String]>::to_vec);
        }
        if let Some(prompt) = &patch.prompt {
            self.prompt = Some(prompt.clone());
        }
        if let Some(correct_answer) = &patch.correct_answer {
            self.correct_answer = Some(correct_answer.clone());
        }
        if let Some(difficulty) = patch.difficulty {
            self.difficulty = Some(difficulty.as_str().to_string());
        }
        if let Some(category) = &patch.category {
            self.category = Some(category.clone());
        }
        self
    }
}
