//! Task list store.
//!
//! # Responsibility
//! - Hold the session's task collection and the user's view parameters.
//! - Expose the add/toggle/delete actions and the derived reads.
//!
//! # See also
//! - `crate::view` for the pure derivations the store delegates to.

pub mod task_store;
