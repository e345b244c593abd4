//! Filtered task view.
//!
//! # Invariants
//! - Filter and search predicates compose with logical AND.
//! - Surviving tasks keep their relative order.

use crate::model::task::{Priority, Task};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Named status/priority selector applied to the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Completed,
    Pending,
    Priority(Priority),
}

impl TaskFilter {
    /// Returns whether `task` passes this selector.
    pub fn accepts(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.completed,
            Self::Pending => !task.completed,
            Self::Priority(priority) => task.priority == priority,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::Priority(priority) => priority.as_str(),
        }
    }
}

impl Display for TaskFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error for filter names outside `all|completed|pending|high|medium|low`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParseError(pub String);

impl Display for FilterParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported filter `{}`; expected all|completed|pending|high|medium|low",
            self.0
        )
    }
}

impl Error for FilterParseError {}

impl FromStr for TaskFilter {
    type Err = FilterParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "completed" => Ok(Self::Completed),
            "pending" => Ok(Self::Pending),
            other => other
                .parse::<Priority>()
                .map(Self::Priority)
                .map_err(|_| FilterParseError(value.to_string())),
        }
    }
}

/// Returns the ordered subsequence of `tasks` matching `filter` and `search`.
///
/// `search` is matched case-insensitively against title or description; an
/// empty string matches every task.
pub fn compute_view<'a>(tasks: &'a [Task], filter: TaskFilter, search: &str) -> Vec<&'a Task> {
    let needle = search.to_lowercase();
    tasks
        .iter()
        .filter(|task| filter.accepts(task) && task.matches_lowercase(&needle))
        .collect()
}
