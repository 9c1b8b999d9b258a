use crate::todo::{Filter, TaskId};

/// Which input of the task list receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The new-task field at the top
    #[default]
    NewTask,
    /// The task rows
    List,
    /// The inline field of the task being edited
    EditField,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Task operations
    AddTask,
    DeleteTask(TaskId),
    ToggleTask(TaskId),
    BeginEdit(TaskId),
    CommitEdit,
    CancelEdit,

    // View
    SetFilter(Filter),
    CycleFilter,
    NextTask,
    PreviousTask,
    Focus(Focus),

    // App control
    Quit,
    None,
}
