//! Category views.
//!
//! # Responsibility
//! - Filter questions by exact category label or the wildcard sentinel.
//! - Compute the distinct category set in first-seen order.
//!
//! # Invariants
//! - Category matching is exact and case-sensitive; no trimming.

use crate::model::question::Question;
use std::collections::HashSet;

/// Default wildcard sentinel that selects every category.
pub const DEFAULT_CATEGORY_WILDCARD: &str = "all";

/// Category selector resolved against a wildcard sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Exact(String),
}

impl CategoryFilter {
    /// Resolves raw selector input; `wildcard` maps to `All`.
    pub fn parse(value: &str, wildcard: &str) -> Self {
        if value == wildcard {
            Self::All
        } else {
            Self::Exact(value.to_string())
        }
    }

    pub fn matches(&self, question: &Question) -> bool {
        match self {
            Self::All => true,
            Self::Exact(category) => question.category == *category,
        }
    }
}

/// Returns the questions selected by `filter`, in collection order.
pub fn filter_by_category(questions: &[Question], filter: &CategoryFilter) -> Vec<Question> {
    questions
        .iter()
        .filter(|question| filter.matches(question))
        .cloned()
        .collect()
}

/// Returns distinct categories in first-seen collection order.
pub fn distinct_categories(questions: &[Question]) -> Vec<String> {
    let mut seen = HashSet::new();
    questions
        .iter()
        .filter(|question| seen.insert(question.category.as_str()))
        .map(|question| question.category.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{distinct_categories, filter_by_category, CategoryFilter};
    use crate::model::question::{Difficulty, Question, QuestionKind};
    use uuid::Uuid;

    fn question(category: &str) -> Question {
        Question {
            id: Uuid::new_v4(),
            kind: QuestionKind::ShortAnswer,
            prompt: format!("about {category}"),
            correct_answer: "x".to_string(),
            difficulty: Difficulty::Easy,
            category: category.to_string(),
            created_at: 0,
        }
    }

    #[test]
    fn parse_maps_wildcard_to_all() {
        assert_eq!(CategoryFilter::parse("all", "all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("All", "all"),
            CategoryFilter::Exact("All".to_string())
        );
        assert_eq!(CategoryFilter::parse("*", "*"), CategoryFilter::All);
    }

    #[test]
    fn filter_is_case_sensitive_and_keeps_order() {
        let questions = vec![
            question("Geography"),
            question("geography"),
            question("Math"),
            question("Geography"),
        ];
        let selected = filter_by_category(
            &questions,
            &CategoryFilter::Exact("Geography".to_string()),
        );
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].id, questions[0].id);
        assert_eq!(selected[1].id, questions[3].id);
    }

    #[test]
    fn distinct_categories_use_first_seen_order() {
        let questions = vec![
            question("Math"),
            question("Geography"),
            question("Math"),
            question("History"),
        ];
        assert_eq!(
            distinct_categories(&questions),
            vec!["Math", "Geography", "History"]
        );
        assert!(distinct_categories(&[]).is_empty());
    }
}
