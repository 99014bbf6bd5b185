//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation, repository writes and subscriber notification.
//! - Keep UI layers decoupled from storage details.

pub mod question_store;
pub mod subscription;
