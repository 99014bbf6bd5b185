//! Candidate validation.
//!
//! # Responsibility
//! - Turn raw `CandidateInput` into a normalized `NewQuestion`.
//! - Report every violated field rule at once.
//!
//! # Invariants
//! - Validation is pure: same input, same result, no side effects.
//! - Closed enumerations are never coerced; unknown values are violations.

pub mod question_rules;
pub mod violations;

pub use question_rules::{validate_candidate, MIN_CHOICE_OPTIONS};
pub use violations::{FieldViolation, QuestionField, ValidationErrors};
