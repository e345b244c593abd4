//! Dashboard configuration.
//!
//! # Responsibility
//! - Provide add-form defaults and the externally fed streak value.
//! - Parse JSON configuration with strict field checking.
//!
//! # Invariants
//! - Missing fields fall back to [`DashboardConfig::default`].
//! - Unknown fields are rejected instead of silently ignored.

use crate::model::task::Priority;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Category preselected in the add-task form.
pub const DEFAULT_CATEGORY: &str = "Personal";

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    BlankDefaultCategory,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(err) => write!(f, "invalid config: {err}"),
            Self::BlankDefaultCategory => write!(f, "default_category must not be blank"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::BlankDefaultCategory => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Session-scoped settings for one dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub default_category: String,
    pub default_priority: Priority,
    /// Consecutive productive days, supplied from outside the store.
    pub streak_days: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_category: DEFAULT_CATEGORY.to_string(),
            default_priority: Priority::Medium,
            streak_days: 0,
        }
    }
}

impl DashboardConfig {
    /// Parses a JSON object; absent keys keep their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if config.default_category.trim().is_empty() {
            return Err(ConfigError::BlankDefaultCategory);
        }
        Ok(config)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}
