use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Task identifier. Serialized as a plain JSON number.
pub type TaskId = u64;

/// A single to-do item as it is stored under the `tasks` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    /// ISO-8601 UTC timestamp, written once at creation.
    pub created_at: String,
}

impl Task {
    pub fn new(id: TaskId, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at: format_created_at(created_at),
        }
    }
}

/// Format a creation time the way the stored format expects (`2024-05-01T09:30:00.000Z`).
pub fn format_created_at(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
