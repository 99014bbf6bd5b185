//! Question repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the ordered question collection.
//! - Track every id ever issued so removed ids are never reused.
//!
//! # Invariants
//! - Repositories trust their input; validation happens before writes reach
//!   this layer.

use crate::model::question::{Question, QuestionId};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for question writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound(QuestionId),
    DuplicateId(QuestionId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "question not found: {id}"),
            Self::DuplicateId(id) => write!(f, "question id already issued: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for the ordered question collection.
pub trait QuestionRepository {
    /// Appends one question at the end of the collection.
    ///
    /// Must succeed for any question whose id `is_issued` reports as
    /// unissued; `QuestionStore::create` relies on this.
    fn insert(&mut self, question: Question) -> RepoResult<()>;
    /// Replaces the question with the same id in place.
    fn replace(&mut self, question: Question) -> RepoResult<()>;
    /// Removes a question, returning it when present.
    fn remove(&mut self, id: QuestionId) -> Option<Question>;
    fn get(&self, id: QuestionId) -> Option<&Question>;
    /// Returns the full collection in insertion order.
    fn all(&self) -> &[Question];
    /// Returns whether `id` is live or was issued before and removed.
    ///
    /// `insert` rejects exactly the ids for which this returns `true`.
    fn is_issued(&self, id: QuestionId) -> bool;
}

/// Volatile, insertion-ordered question repository.
#[derive(Debug, Default)]
pub struct InMemoryQuestionRepository {
    items: Vec<Question>,
    retired_ids: HashSet<QuestionId>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: QuestionId) -> Option<usize> {
        self.items.iter().position(|question| question.id == id)
    }
}

impl QuestionRepository for InMemoryQuestionRepository {
    fn insert(&mut self, question: Question) -> RepoResult<()> {
        if self.is_issued(question.id) {
            return Err(RepoError::DuplicateId(question.id));
        }
        self.items.push(question);
        Ok(())
    }

    fn replace(&mut self, question: Question) -> RepoResult<()> {
        let index = self
            .position(question.id)
            .ok_or(RepoError::NotFound(question.id))?;
        self.items[index] = question;
        Ok(())
    }

    fn remove(&mut self, id: QuestionId) -> Option<Question> {
        let index = self.position(id)?;
        let removed = self.items.remove(index);
        self.retired_ids.insert(id);
        Some(removed)
    }

    fn get(&self, id: QuestionId) -> Option<&Question> {
        self.items.iter().find(|question| question.id == id)
    }

    fn all(&self) -> &[Question] {
        &self.items
    }

    fn is_issued(&self, id: QuestionId) -> bool {
        self.retired_ids.contains(&id) || self.position(id).is_some()
    }
}
