//! Domain model for the task dashboard.
//!
//! # Responsibility
//! - Define the task record, its priority scale and the category reference data.
//! - Provide the draft builder that is the only way the store creates tasks.
//!
//! # Invariants
//! - Every task is identified by a stable, non-nil `TaskId`.
//! - Deletion is a hard removal; there are no tombstones.

pub mod category;
pub mod draft;
pub mod task;
