//! Core domain logic for the TaskDeck dashboard.
//! This crate is the single source of truth for task-list invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod seed;
pub mod service;
pub mod session;
pub mod store;
pub mod view;

pub use config::{ConfigError, DashboardConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{category_color, Category, FALLBACK_CATEGORY_COLOR};
pub use model::draft::TaskDraft;
pub use model::task::{Priority, PriorityParseError, Task, TaskId, TaskValidationError};
pub use service::dashboard_service::{Dashboard, DashboardTab, MountOutcome};
pub use session::{
    user_initials, AuthError, Navigator, Route, Session, SessionProvider, SessionState, User,
};
pub use store::task_store::TaskStore;
pub use view::filter::{compute_view, FilterParseError, TaskFilter};
pub use view::stats::{
    category_breakdown, completion_rate, compute_stats, rate_verdict, CategoryProgress,
    RateVerdict, TaskStats,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
