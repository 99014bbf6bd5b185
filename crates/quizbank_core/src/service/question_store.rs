//! Question store use-case service.
//!
//! # Responsibility
//! - Own the canonical ordered question collection through a repository.
//! - Provide create/update/delete entry points and derived category views.
//! - Notify subscribers synchronously after every successful mutation.
//!
//! # Invariants
//! - `create` trusts `NewQuestion`; only the validator can build one.
//! - `update` re-validates the merged record and never alters `id` or
//!   `created_at`.
//! - Failed operations leave the collection unchanged and notify nobody.

use crate::config::StoreConfig;
use crate::model::candidate::CandidateInput;
use crate::model::question::{NewQuestion, Question, QuestionId, QuestionPatch};
use crate::query::category::{distinct_categories, filter_by_category, CategoryFilter};
use crate::repo::question_repo::{InMemoryQuestionRepository, QuestionRepository, RepoError};
use crate::service::subscription::{StoreEvent, SubscriberRegistry, Subscription};
use crate::validation::{validate_candidate, ValidationErrors};
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Recoverable errors from store mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Target question does not exist (or was deleted).
    NotFound(QuestionId),
    /// Merged update violates field rules.
    Validation(ValidationErrors),
    /// Repository rejected the replacement for a reason other than a
    /// missing id. `InMemoryQuestionRepository` never does this; other
    /// `QuestionRepository` implementations may.
    Repo(RepoError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "question not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<ValidationErrors> for StoreError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Errors raised while loading an initial question set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    /// Seeded record at `index` carries the nil id.
    NilId { index: usize },
    /// Seeded record at `index` violates field rules.
    Invalid {
        index: usize,
        errors: ValidationErrors,
    },
    /// Repository rejected a seeded record (duplicate id).
    Repo(RepoError),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId { index } => write!(f, "seed question #{index} has a nil id"),
            Self::Invalid { index, errors } => write!(f, "seed question #{index}: {errors}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid { errors, .. } => Some(errors),
            Self::Repo(err) => Some(err),
            Self::NilId { .. } => None,
        }
    }
}

/// Reactive question store.
///
/// Single-writer and single-threaded: every operation runs to completion
/// before returning, and subscribers run inline with the mutation.
#[derive(Debug)]
pub struct QuestionStore<R: QuestionRepository = InMemoryQuestionRepository> {
    repo: R,
    config: StoreConfig,
    subscribers: SubscriberRegistry,
}

impl QuestionStore<InMemoryQuestionRepository> {
    /// Creates an empty in-memory store with default config.
    pub fn in_memory() -> Self {
        Self::new(InMemoryQuestionRepository::new(), StoreConfig::default())
    }
}

impl<R: QuestionRepository> QuestionStore<R> {
    /// Creates a store over the provided repository implementation.
    pub fn new(repo: R, config: StoreConfig) -> Self {
        Self {
            repo,
            config,
            subscribers: SubscriberRegistry::new(),
        }
    }

    /// Creates a store pre-populated with `seed`, in the given order.
    ///
    /// Each record is re-validated and stored in normalized form; its `id`
    /// and `created_at` are kept. No subscriber exists yet, so nothing is
    /// notified.
    ///
    /// # Errors
    /// - `SeedError::NilId` for a nil id.
    /// - `SeedError::Invalid` for a record failing field rules.
    /// - `SeedError::Repo` for an id seen twice.
    pub fn with_seed(
        repo: R,
        config: StoreConfig,
        seed: Vec<Question>,
    ) -> Result<Self, SeedError> {
        let mut store = Self::new(repo, config);
        let seeded = seed.len();
        for (index, question) in seed.into_iter().enumerate() {
            if question.id.is_nil() {
                return Err(SeedError::NilId { index });
            }
            let normalized = validate_candidate(&question.to_candidate())
                .map_err(|errors| SeedError::Invalid { index, errors })?;
            store
                .repo
                .insert(normalized.into_question(question.id, question.created_at))
                .map_err(SeedError::Repo)?;
        }
        info!("event=store_seed module=store status=ok count={seeded}");
        Ok(store)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Validates a raw candidate and creates it on success.
    ///
    /// # Errors
    /// - Returns every field violation; the store is left unchanged.
    pub fn submit(&mut self, candidate: &CandidateInput) -> Result<Question, ValidationErrors> {
        match validate_candidate(candidate) {
            Ok(question) => Ok(self.create(question)),
            Err(errors) => {
                debug!(
                    "event=question_submit module=store status=rejected violations={}",
                    errors.len()
                );
                Err(errors)
            }
        }
    }

    /// Stores a validated question at the end of the collection.
    ///
    /// Assigns a fresh id and the current wall-clock timestamp, then notifies
    /// subscribers.
    ///
    /// # Panics
    /// - Panics when the repository rejects an id its `is_issued` reported as
    ///   unissued. That breaks the `QuestionRepository::insert` contract.
    pub fn create(&mut self, question: NewQuestion) -> Question {
        let id = self.fresh_id();
        let created = question.into_question(id, now_epoch_ms());
        if let Err(err) = self.repo.insert(created.clone()) {
            error!("event=question_create module=store status=error id={id} error={err}");
            unreachable!(
                "repository rejected fresh question id {id} after reporting it unissued: {err}"
            );
        }
        info!(
            "event=question_create module=store status=ok id={id} kind={}",
            created.kind.name()
        );
        self.subscribers
            .notify(&StoreEvent::Created(id), self.repo.all());
        created
    }

    /// Merges `patch` onto an existing question and re-validates the result.
    ///
    /// Position in the collection is preserved.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when `id` is absent.
    /// - `StoreError::Validation` when the merged record breaks a field rule.
    pub fn update(&mut self, id: QuestionId, patch: &QuestionPatch) -> StoreResult<Question> {
        let (created_at, candidate) = match self.repo.get(id) {
            Some(current) => (current.created_at, current.to_candidate().with_patch(patch)),
            None => {
                debug!("event=question_update module=store status=not_found id={id}");
                return Err(StoreError::NotFound(id));
            }
        };

        let normalized = validate_candidate(&candidate).map_err(|errors| {
            debug!(
                "event=question_update module=store status=rejected id={id} violations={}",
                errors.len()
            );
            StoreError::Validation(errors)
        })?;
        let updated = normalized.into_question(id, created_at);
        self.repo.replace(updated.clone())?;

        info!("event=question_update module=store status=ok id={id}");
        self.subscribers
            .notify(&StoreEvent::Updated(id), self.repo.all());
        Ok(updated)
    }

    /// Removes a question. Returns `false` without notifying when absent.
    pub fn delete(&mut self, id: QuestionId) -> bool {
        if self.repo.remove(id).is_none() {
            debug!("event=question_delete module=store status=not_found id={id}");
            return false;
        }
        info!("event=question_delete module=store status=ok id={id}");
        self.subscribers
            .notify(&StoreEvent::Deleted(id), self.repo.all());
        true
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.repo.get(id)
    }

    /// Returns a snapshot of every question in insertion order.
    pub fn list(&self) -> Vec<Question> {
        self.repo.all().to_vec()
    }

    /// Returns questions whose category equals `category` exactly.
    ///
    /// The configured wildcard (`"all"` by default) returns `list()`.
    pub fn list_by_category(&self, category: &str) -> Vec<Question> {
        let filter = CategoryFilter::parse(category, self.config.category_wildcard());
        filter_by_category(self.repo.all(), &filter)
    }

    /// Returns the distinct categories in first-seen order.
    pub fn distinct_categories(&self) -> Vec<String> {
        distinct_categories(self.repo.all())
    }

    /// Registers a callback run after every successful mutation.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&StoreEvent, &[Question]) + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn len(&self) -> usize {
        self.repo.all().len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.all().is_empty()
    }

    fn fresh_id(&self) -> QuestionId {
        loop {
            let id = Uuid::new_v4();
            if !self.repo.is_issued(id) {
                return id;
            }
        }
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
