//! Question domain model.
//!
//! # Responsibility
//! - Define the canonical question record and its closed enumerations.
//! - Define the input shapes that flow toward the store: raw candidates,
//!   normalized questions and partial updates.
//!
//! # Invariants
//! - Every stored question is identified by a stable `QuestionId`.
//! - Only the multiple-choice kind carries an `options` payload.
//! - `NewQuestion` can only be produced by the validator.

pub mod candidate;
pub mod question;
