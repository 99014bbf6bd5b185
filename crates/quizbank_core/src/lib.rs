//! Core domain logic for the question bank.
//! This crate is the single source of truth for question invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;
pub mod validation;

pub use config::{ConfigError, StoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::candidate::CandidateInput;
pub use model::question::{
    Difficulty, NewQuestion, Question, QuestionId, QuestionKind, QuestionPatch,
};
pub use query::category::{CategoryFilter, DEFAULT_CATEGORY_WILDCARD};
pub use repo::question_repo::{
    InMemoryQuestionRepository, QuestionRepository, RepoError, RepoResult,
};
pub use service::question_store::{QuestionStore, SeedError, StoreError, StoreResult};
pub use service::subscription::{StoreEvent, SubscriberRegistry, Subscription, SubscriptionId};
pub use validation::{
    validate_candidate, FieldViolation, QuestionField, ValidationErrors, MIN_CHOICE_OPTIONS,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
