//! Derived, read-only projections over the task collection.
//!
//! # Responsibility
//! - Compute the filtered list shown to the user.
//! - Compute summary counts, completion rate and per-category progress.
//!
//! # Invariants
//! - Every function here is pure; nothing mutates the collection.
//! - Output order always follows collection (insertion) order.

pub mod filter;
pub mod stats;
