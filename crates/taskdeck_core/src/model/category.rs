//! Category reference data.
//!
//! Categories are supplied once per session and never mutated. The color is a
//! display hint only.

use serde::{Deserialize, Serialize};

/// Color used when a task names a category missing from the set.
pub const FALLBACK_CATEGORY_COLOR: &str = "#6b7280";

/// Read-only category record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Hex color, e.g. `#3b82f6`.
    pub color: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }

    /// Default category set offered by the add-task form.
    pub fn palette() -> Vec<Category> {
        vec![
            Category::new("1", "Work", "#3b82f6"),
            Category::new("2", "Personal", "#10b981"),
            Category::new("3", "Health", "#f59e0b"),
            Category::new("4", "Learning", "#8b5cf6"),
        ]
    }
}

/// Returns the color of the category named `name`, or the fallback color.
pub fn category_color<'a>(categories: &'a [Category], name: &str) -> &'a str {
    categories
        .iter()
        .find(|category| category.name == name)
        .map(|category| category.color.as_str())
        .unwrap_or(FALLBACK_CATEGORY_COLOR)
}
