//! Store configuration.
//!
//! # Invariants
//! - The category wildcard sentinel is never blank.

use crate::query::category::DEFAULT_CATEGORY_WILDCARD;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Runtime options for one `QuestionStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    category_wildcard: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            category_wildcard: DEFAULT_CATEGORY_WILDCARD.to_string(),
        }
    }
}

impl StoreConfig {
    /// Builds a config whose category wildcard is `wildcard`.
    ///
    /// # Errors
    /// - Returns `ConfigError::BlankCategoryWildcard` when `wildcard` is
    ///   empty after trimming.
    pub fn with_category_wildcard(wildcard: impl Into<String>) -> Result<Self, ConfigError> {
        let wildcard = wildcard.into();
        if wildcard.trim().is_empty() {
            return Err(ConfigError::BlankCategoryWildcard);
        }
        Ok(Self {
            category_wildcard: wildcard,
        })
    }

    /// Sentinel passed to `list_by_category` to select every record.
    pub fn category_wildcard(&self) -> &str {
        &self.category_wildcard
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    BlankCategoryWildcard,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankCategoryWildcard => write!(f, "category wildcard cannot be blank"),
        }
    }
}

impl Error for ConfigError {}
