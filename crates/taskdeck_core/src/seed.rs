//! Demo data set used by the CLI and by tests.

use crate::model::category::Category;
use crate::model::task::{Priority, Task, TaskId};
use chrono::NaiveDate;
use uuid::Uuid;

struct SeedRow {
    id: u128,
    title: &'static str,
    description: &'static str,
    completed: bool,
    priority: Priority,
    category: &'static str,
    due: (i32, u32, u32),
    created: (i32, u32, u32),
}

const SEED_ROWS: [SeedRow; 4] = [
    SeedRow {
        id: 0x0000_0000_0000_4000_8000_0000_0000_0001,
        title: "Complete project proposal",
        description: "Write and submit the Q4 project proposal for the new client",
        completed: false,
        priority: Priority::High,
        category: "Work",
        due: (2024, 1, 15),
        created: (2024, 1, 10),
    },
    SeedRow {
        id: 0x0000_0000_0000_4000_8000_0000_0000_0002,
        title: "Buy groceries",
        description: "Milk, bread, eggs, and vegetables for the week",
        completed: true,
        priority: Priority::Medium,
        category: "Personal",
        due: (2024, 1, 12),
        created: (2024, 1, 11),
    },
    SeedRow {
        id: 0x0000_0000_0000_4000_8000_0000_0000_0003,
        title: "Exercise routine",
        description: "30 minutes cardio and strength training",
        completed: false,
        priority: Priority::Medium,
        category: "Health",
        due: (2024, 1, 13),
        created: (2024, 1, 12),
    },
    SeedRow {
        id: 0x0000_0000_0000_4000_8000_0000_0000_0004,
        title: "Read chapter 5",
        description: "Continue reading \"Atomic Habits\" book",
        completed: true,
        priority: Priority::Low,
        category: "Learning",
        due: (2024, 1, 14),
        created: (2024, 1, 13),
    },
];

/// Fixed id of the `index`-th demo task (0-based).
pub fn demo_task_id(index: usize) -> Option<TaskId> {
    SEED_ROWS.get(index).map(|row| Uuid::from_u128(row.id))
}

/// Four sample tasks spread across the default category palette.
pub fn demo_tasks() -> Vec<Task> {
    SEED_ROWS
        .iter()
        .filter_map(|row| {
            let (year, month, day) = row.created;
            let created_at = NaiveDate::from_ymd_opt(year, month, day)?;
            let (year, month, day) = row.due;
            Some(Task {
                id: Uuid::from_u128(row.id),
                title: row.title.to_string(),
                description: Some(row.description.to_string()),
                completed: row.completed,
                priority: row.priority,
                category: row.category.to_string(),
                due_date: Some(format!("{year:04}-{month:02}-{day:02}")),
                created_at,
            })
        })
        .collect()
}

/// Default categories paired with [`demo_tasks`].
pub fn demo_categories() -> Vec<Category> {
    Category::palette()
}
