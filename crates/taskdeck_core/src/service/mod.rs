//! Session-gated use-case services.
//!
//! # Responsibility
//! - Decide whether a task store may be mounted for the current visitor.
//! - Route sign-out and navigation requests to their collaborators.

pub mod dashboard_service;
