//! Add-task form draft.
//!
//! # Responsibility
//! - Hold the not-yet-committed field values for a new task.
//! - Turn a complete draft into an immutable [`Task`] in one step.
//!
//! # Invariants
//! - `commit` never produces a task with a blank title.
//! - Empty optional fields are stored as `None`, not as empty strings.

use crate::model::task::{Priority, Task};
use chrono::NaiveDate;
use uuid::Uuid;

/// Mutable builder behind the add-task form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: String,
    priority: Priority,
    category: String,
    due_date: String,
    default_priority: Priority,
    default_category: String,
}

impl TaskDraft {
    /// Creates an empty draft preselecting `Medium` and `default_category`.
    pub fn new(default_category: impl Into<String>) -> Self {
        Self::with_defaults(Priority::Medium, default_category)
    }

    /// Creates an empty draft with explicit form defaults.
    pub fn with_defaults(default_priority: Priority, default_category: impl Into<String>) -> Self {
        let default_category = default_category.into();
        Self {
            title: String::new(),
            description: String::new(),
            priority: default_priority,
            category: default_category.clone(),
            due_date: String::new(),
            default_priority,
            default_category,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = description.into();
        self
    }

    pub fn set_priority(&mut self, priority: Priority) -> &mut Self {
        self.priority = priority;
        self
    }

    pub fn set_category(&mut self, category: impl Into<String>) -> &mut Self {
        self.category = category.into();
        self
    }

    pub fn set_due_date(&mut self, due_date: impl Into<String>) -> &mut Self {
        self.due_date = due_date.into();
        self
    }

    /// Whether the draft would be accepted by [`TaskDraft::commit`].
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Restores every field to the form defaults.
    pub fn reset(&mut self) {
        self.title.clear();
        self.description.clear();
        self.priority = self.default_priority;
        self.category = self.default_category.clone();
        self.due_date.clear();
    }

    /// Builds a new open task stamped with `created_at`.
    ///
    /// Returns `None` when the title is blank after trimming. The draft itself
    /// is left untouched; callers decide when to reset it.
    pub fn commit(&self, created_at: NaiveDate) -> Option<Task> {
        if !self.is_submittable() {
            return None;
        }

        Some(Task {
            id: Uuid::new_v4(),
            title: self.title.clone(),
            description: non_empty(&self.description),
            completed: false,
            priority: self.priority,
            category: self.category.clone(),
            due_date: non_empty(&self.due_date),
            created_at,
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
