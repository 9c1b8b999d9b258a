use super::task::TaskId;

/// Edit-mode state. At most one task is editable at a time and the draft
/// only exists while a task is being edited.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    NotEditing,
    Editing { task_id: TaskId, draft: String },
}

impl EditState {
    pub fn task_id(&self) -> Option<TaskId> {
        match self {
            EditState::NotEditing => None,
            EditState::Editing { task_id, .. } => Some(*task_id),
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            EditState::NotEditing => None,
            EditState::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing { .. })
    }
}
