//! Derived read-only views over the question collection.
//!
//! # Invariants
//! - Views are recomputed from the current collection on every call.
//! - Views preserve collection (insertion) order.

pub mod category;
