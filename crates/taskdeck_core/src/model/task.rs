//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record held by the task list store.
//! - Provide the priority scale and its display mapping.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `title` is never blank after trimming.
//! - Only `completed` (and `priority`, once editing lands) change after creation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for every task in a store.
pub type TaskId = Uuid;

/// Importance level attached to each task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// All priorities, lowest first.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Stable lowercase name used by filters and wire formats.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Text/border classes used when rendering a priority badge.
    pub fn display_class(self) -> &'static str {
        match self {
            Self::High => "text-red-500 border-red-500",
            Self::Medium => "text-yellow-500 border-yellow-500",
            Self::Low => "text-green-500 border-green-500",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when a priority name is not `low|medium|high`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityParseError(pub String);

impl Display for PriorityParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported priority `{}`; expected low|medium|high",
            self.0
        )
    }
}

impl Error for PriorityParseError {}

impl FromStr for Priority {
    type Err = PriorityParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(PriorityParseError(value.to_string())),
        }
    }
}

/// Validation failures for task records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    NilId,
    BlankTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "task id must not be nil"),
            Self::BlankTitle => write!(f, "task title must not be blank"),
        }
    }
}

impl Error for TaskValidationError {}

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub priority: Priority,
    /// Category name. Not checked against the category set.
    pub category: String,
    /// Free-form date text as entered by the user.
    pub due_date: Option<String>,
    pub created_at: NaiveDate,
}

impl Task {
    /// Creates an open task with a generated id.
    ///
    /// # Errors
    /// - Returns [`TaskValidationError::BlankTitle`] when `title` trims to empty.
    pub fn new(
        title: impl Into<String>,
        priority: Priority,
        category: impl Into<String>,
        created_at: NaiveDate,
    ) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), title, priority, category, created_at)
    }

    /// Creates an open task with a caller-provided id.
    ///
    /// Used for seed data where identity already exists.
    pub fn with_id(
        id: TaskId,
        title: impl Into<String>,
        priority: Priority,
        category: impl Into<String>,
        created_at: NaiveDate,
    ) -> Result<Self, TaskValidationError> {
        let task = Self {
            id,
            title: title.into(),
            description: None,
            completed: false,
            priority,
            category: category.into(),
            due_date: None,
            created_at,
        };
        task.validate()?;
        Ok(task)
    }

    /// Checks the record-level invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::BlankTitle);
        }
        Ok(())
    }

    /// Case-insensitive substring match over title and description.
    ///
    /// `needle` must already be lowercase. Empty needles match everything.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|text| text.to_lowercase().contains(needle))
    }
}

#[derive(Deserialize)]
struct TaskRecord {
    id: TaskId,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    priority: Priority,
    category: String,
    #[serde(default)]
    due_date: Option<String>,
    created_at: NaiveDate,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let task = Self {
            id: record.id,
            title: record.title,
            description: record.description,
            completed: record.completed,
            priority: record.priority,
            category: record.category,
            due_date: record.due_date,
            created_at: record.created_at,
        };
        task.validate()?;
        Ok(task)
    }
}
