//! Task list domain: the task model, the view filter, the edit session and
//! the operations that move between states.
//!
//! Nothing in here knows about the terminal or about storage, so the whole
//! state machine can be driven directly from tests.

pub mod edit;
pub mod filter;
pub mod id;
pub mod list;
pub mod task;

pub use edit::EditState;
pub use filter::Filter;
pub use id::IdGenerator;
pub use list::TodoList;
pub use task::{Task, TaskId};

/// "1 task remaining" / "3 tasks remaining"
pub fn remaining_label(count: usize) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!("{} {} remaining", count, noun)
}

/// Placeholder shown when the filtered view is empty.
pub fn empty_view_message(filter: Filter) -> String {
    match filter {
        Filter::All => "No tasks to display".to_string(),
        other => format!("No tasks ({}) to display", other.name()),
    }
}
