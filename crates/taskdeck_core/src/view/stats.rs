//! Summary statistics over the task collection.
//!
//! # Invariants
//! - `pending == total - completed`.
//! - Percentages are integers in `0..=100` and never divide by zero.
//! - `streak` is carried through unchanged from the caller.

use crate::model::category::Category;
use crate::model::task::Task;
use serde::Serialize;

/// Ratio above which the completion rate is considered excellent.
const EXCELLENT_RATIO: f64 = 0.8;

/// Aggregate counts shown on the stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Externally supplied day streak.
    pub streak: u32,
}

/// Headline shown under the completion-rate card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateVerdict {
    Excellent,
    KeepGoing,
}

impl RateVerdict {
    pub fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent!",
            Self::KeepGoing => "Keep going!",
        }
    }
}

/// Completion progress for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryProgress {
    pub category: Category,
    pub completed: usize,
    pub total: usize,
    /// Rounded completion percentage; 0 for empty categories.
    pub percentage: u32,
}

/// Counts tasks by completion state.
pub fn compute_stats(tasks: &[Task], streak: u32) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.completed).count();
    TaskStats {
        total,
        completed,
        pending: total - completed,
        streak,
    }
}

/// Rounded percentage of completed tasks; `0` for an empty collection.
pub fn completion_rate(stats: &TaskStats) -> u32 {
    rounded_percentage(stats.completed, stats.total)
}

/// Classifies the completion ratio for display.
pub fn rate_verdict(stats: &TaskStats) -> RateVerdict {
    if stats.total > 0 && stats.completed as f64 / stats.total as f64 > EXCELLENT_RATIO {
        RateVerdict::Excellent
    } else {
        RateVerdict::KeepGoing
    }
}

/// Per-category completion, in category order.
///
/// Tasks are grouped by exact category name; tasks naming an unknown category
/// are not counted anywhere.
pub fn category_breakdown(tasks: &[Task], categories: &[Category]) -> Vec<CategoryProgress> {
    categories
        .iter()
        .map(|category| {
            let (total, completed) = tasks
                .iter()
                .filter(|task| task.category == category.name)
                .fold((0usize, 0usize), |(total, completed), task| {
                    (total + 1, completed + usize::from(task.completed))
                });
            CategoryProgress {
                category: category.clone(),
                completed,
                total,
                percentage: rounded_percentage(completed, total),
            }
        })
        .collect()
}

fn rounded_percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}
