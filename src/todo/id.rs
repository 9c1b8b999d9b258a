use chrono::Utc;

use super::task::TaskId;

/// Hands out task ids that look like creation timestamps (milliseconds since
/// the epoch) but are strictly increasing, even for several tasks created
/// within the same millisecond.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: TaskId,
}

impl IdGenerator {
    /// Start after `highest`, typically the largest id of a loaded collection.
    pub fn starting_after(highest: TaskId) -> Self {
        Self { last: highest }
    }

    pub fn next_id(&mut self) -> TaskId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.last = now.max(self.last.saturating_add(1));
        self.last
    }
}
