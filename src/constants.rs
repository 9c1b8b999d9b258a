//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

/// Application name, used for config and data directories
pub const APP_NAME: &str = "tasklist";

/// Storage key holding the JSON-encoded task collection
pub const TASKS_STORAGE_KEY: &str = "tasks";

/// Environment variable overriding the configured log level
pub const LOG_LEVEL_ENV: &str = "TASKLIST_LOG";

// UI Text
pub const APP_TITLE: &str = "To-Do List";
pub const NEW_TASK_TITLE: &str = "New task";
pub const NEW_TASK_PLACEHOLDER: &str = "Add a new task...";
pub const TASKS_TITLE: &str = "Tasks";
pub const CHECKBOX_DONE: &str = "[x]";
pub const CHECKBOX_OPEN: &str = "[ ]";

// Status Messages
pub const ERROR_SAVE_FAILED: &str = "❌ Failed to save tasks";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// UI Layout Constants
/// Narrowest allowed content column
pub const UI_MIN_WIDTH: u16 = 40;
/// Widest allowed content column
pub const UI_MAX_WIDTH: u16 = 200;
/// Default content column width
pub const UI_DEFAULT_WIDTH: u16 = 72;
