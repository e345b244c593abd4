//! In-memory task list store.
//!
//! # Responsibility
//! - Own the ordered task collection for one authenticated session.
//! - Hold view parameters (filter, search, draft, edit selection).
//! - Apply user actions as synchronous, total mutations.
//!
//! # Invariants
//! - Task ids are unique within the collection.
//! - Collection order is insertion order; deletion never reorders.
//! - Blank drafts and unknown ids are silent no-ops, never errors.

use crate::config::DashboardConfig;
use crate::model::category::{category_color, Category};
use crate::model::draft::TaskDraft;
use crate::model::task::{Task, TaskId};
use crate::session::Session;
use crate::view::filter::{compute_view, TaskFilter};
use crate::view::stats::{
    category_breakdown, completion_rate, compute_stats, rate_verdict, CategoryProgress,
    RateVerdict, TaskStats,
};
use chrono::{NaiveDate, Utc};
use log::{debug, warn};
use std::collections::HashSet;

/// Session-scoped task list plus its form and view state.
#[derive(Debug, Clone)]
pub struct TaskStore {
    session: Session,
    config: DashboardConfig,
    categories: Vec<Category>,
    tasks: Vec<Task>,
    filter: TaskFilter,
    search: String,
    draft: TaskDraft,
    add_form_visible: bool,
    editing: Option<TaskId>,
}

impl TaskStore {
    /// Creates an empty store for `session`.
    pub fn new(session: Session, config: DashboardConfig, categories: Vec<Category>) -> Self {
        let draft =
            TaskDraft::with_defaults(config.default_priority, config.default_category.clone());
        Self {
            session,
            config,
            categories,
            tasks: Vec::new(),
            filter: TaskFilter::default(),
            search: String::new(),
            draft,
            add_form_visible: false,
            editing: None,
        }
    }

    /// Creates a store seeded with `tasks`.
    ///
    /// Seed entries that repeat an earlier id are dropped; the first one wins.
    pub fn with_tasks(
        session: Session,
        config: DashboardConfig,
        categories: Vec<Category>,
        tasks: Vec<Task>,
    ) -> Self {
        let mut store = Self::new(session, config, categories);
        let mut seen = HashSet::with_capacity(tasks.len());
        for task in tasks {
            if seen.insert(task.id) {
                store.tasks.push(task);
            } else {
                warn!(
                    "event=store_seed module=store status=skip reason=duplicate_id task_id={}",
                    task.id
                );
            }
        }
        debug!(
            "event=store_seed module=store status=ok task_count={}",
            store.tasks.len()
        );
        store
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Commits the current draft dated with today's UTC calendar date.
    ///
    /// See [`TaskStore::add_task_on`].
    pub fn add_task(&mut self) -> Option<TaskId> {
        self.add_task_on(Utc::now().date_naive())
    }

    /// Commits the current draft with an explicit creation date.
    ///
    /// On success the task is appended, the draft is reset and the add form is
    /// hidden. A blank title leaves every piece of state untouched.
    pub fn add_task_on(&mut self, created_at: NaiveDate) -> Option<TaskId> {
        let Some(task) = self.draft.commit(created_at) else {
            debug!("event=task_add module=store status=skip reason=blank_title");
            return None;
        };

        let id = task.id;
        self.tasks.push(task);
        self.draft.reset();
        self.add_form_visible = false;
        debug!(
            "event=task_add module=store status=ok task_id={} task_count={}",
            id,
            self.tasks.len()
        );
        Some(id)
    }

    /// Flips completion on the matching task; returns whether one matched.
    pub fn toggle_completed(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                debug!(
                    "event=task_toggle module=store status=ok task_id={} completed={}",
                    id, task.completed
                );
                true
            }
            None => {
                debug!("event=task_toggle module=store status=skip reason=not_found task_id={id}");
                false
            }
        }
    }

    /// Removes the matching task; returns whether one was removed.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            debug!("event=task_delete module=store status=skip reason=not_found task_id={id}");
            return false;
        };

        self.tasks.remove(index);
        if self.editing == Some(id) {
            self.editing = None;
        }
        debug!(
            "event=task_delete module=store status=ok task_id={} task_count={}",
            id,
            self.tasks.len()
        );
        true
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    /// Field-by-field access for the add-task form.
    pub fn draft_mut(&mut self) -> &mut TaskDraft {
        &mut self.draft
    }

    pub fn is_add_form_visible(&self) -> bool {
        self.add_form_visible
    }

    pub fn show_add_form(&mut self) {
        self.add_form_visible = true;
    }

    /// Hides the add form and discards the draft.
    pub fn cancel_add_form(&mut self) {
        self.add_form_visible = false;
        self.draft.reset();
    }

    /// Marks `id` as selected for editing.
    ///
    /// Only the selection exists; there is no path that saves an edit yet.
    pub fn begin_edit(&mut self, id: TaskId) -> bool {
        if self.task(id).is_none() {
            return false;
        }
        self.editing = Some(id);
        true
    }

    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    pub fn clear_edit(&mut self) {
        self.editing = None;
    }

    /// Tasks passing the current filter and search, in insertion order.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        compute_view(&self.tasks, self.filter, &self.search)
    }

    /// Hint shown next to "No tasks found." when the view is empty.
    pub fn empty_hint(&self) -> &'static str {
        if self.filter == TaskFilter::All {
            "Add your first task!"
        } else {
            "Try adjusting your filters."
        }
    }

    pub fn stats(&self) -> TaskStats {
        compute_stats(&self.tasks, self.config.streak_days)
    }

    pub fn completion_rate(&self) -> u32 {
        completion_rate(&self.stats())
    }

    pub fn rate_verdict(&self) -> RateVerdict {
        rate_verdict(&self.stats())
    }

    pub fn category_breakdown(&self) -> Vec<CategoryProgress> {
        category_breakdown(&self.tasks, &self.categories)
    }

    /// Display color for a task's category, with fallback for unknown names.
    pub fn category_color(&self, name: &str) -> &str {
        category_color(&self.categories, name)
    }
}

#[cfg(test)]
mod tests {
    use super::TaskStore;
    use crate::config::DashboardConfig;
    use crate::model::category::Category;
    use crate::model::task::Priority;
    use crate::session::{Session, User};
    use chrono::NaiveDate;

    fn store() -> TaskStore {
        let session = Session {
            user: User {
                id: "u1".to_string(),
                name: Some("Ada Lovelace".to_string()),
                email: "ada@example.com".to_string(),
                image: None,
            },
        };
        TaskStore::new(session, DashboardConfig::default(), Category::palette())
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn blank_add_keeps_form_state() {
        let mut store = store();
        store.show_add_form();
        store.draft_mut().set_title("   ").set_priority(Priority::High);

        assert!(store.add_task_on(day()).is_none());
        assert!(store.tasks().is_empty());
        assert!(store.is_add_form_visible());
        assert_eq!(store.draft().priority(), Priority::High);
    }

    #[test]
    fn add_resets_draft_and_hides_form() {
        let mut store = store();
        store.show_add_form();
        store
            .draft_mut()
            .set_title("Write report")
            .set_category("Work")
            .set_priority(Priority::Low);

        let id = store.add_task_on(day()).expect("task should be added");
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].id, id);
        assert!(!store.is_add_form_visible());
        assert_eq!(store.draft().title(), "");
        assert_eq!(store.draft().category(), "Personal");
        assert_eq!(store.draft().priority(), Priority::Medium);
    }

    #[test]
    fn deleting_edited_task_clears_selection() {
        let mut store = store();
        store.draft_mut().set_title("a");
        let id = store.add_task_on(day()).unwrap();

        assert!(store.begin_edit(id));
        assert_eq!(store.editing(), Some(id));
        assert!(store.delete_task(id));
        assert_eq!(store.editing(), None);
        assert!(!store.begin_edit(id));
    }
}
