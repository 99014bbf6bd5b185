//! Repository layer abstractions and the in-memory collection.
//!
//! # Responsibility
//! - Define the storage contract used by `QuestionStore`.
//! - Keep collection ordering and id bookkeeping out of the service layer.
//!
//! # Invariants
//! - Collection order is insertion order; replacement keeps position.
//! - An id is never accepted twice, including after its record is removed.

pub mod question_repo;
