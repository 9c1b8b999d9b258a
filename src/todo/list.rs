use chrono::Utc;

use super::edit::EditState;
use super::filter::Filter;
use super::id::IdGenerator;
use super::task::{Task, TaskId};

/// All state behind the task list: the task collection plus the input
/// buffers, the edit session and the active filter.
///
/// Every mutating operation returns `true` when the task collection itself
/// changed, which is the caller's cue to persist it. Drafts, edit mode and
/// the filter are view state and never need saving.
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    tasks: Vec<Task>,
    new_task_draft: String,
    edit: EditState,
    filter: Filter,
    ids: IdGenerator,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a previously stored collection, keeping its order.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let highest = tasks.iter().map(|t| t.id).max().unwrap_or(0);
        Self {
            tasks,
            ids: IdGenerator::starting_after(highest),
            ..Self::default()
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    pub fn new_task_draft(&self) -> &str {
        &self.new_task_draft
    }

    pub fn new_task_draft_mut(&mut self) -> &mut String {
        &mut self.new_task_draft
    }

    pub fn set_new_task_draft(&mut self, text: impl Into<String>) {
        self.new_task_draft = text.into();
    }

    /// Mutable access to the edit draft, `None` when no task is being edited.
    pub fn edit_draft_mut(&mut self) -> Option<&mut String> {
        match &mut self.edit {
            EditState::NotEditing => None,
            EditState::Editing { draft, .. } => Some(draft),
        }
    }

    /// Replace the edit draft. Ignored outside of an edit session.
    pub fn set_edit_draft(&mut self, text: impl Into<String>) {
        if let Some(draft) = self.edit_draft_mut() {
            *draft = text.into();
        }
    }

    /// Append a task built from the new-task draft.
    ///
    /// A blank draft is ignored. The stored text is the draft as typed; trimming
    /// only decides whether it is blank.
    pub fn add_task(&mut self) -> bool {
        if self.new_task_draft.trim().is_empty() {
            return false;
        }

        let text = std::mem::take(&mut self.new_task_draft);
        let task = Task::new(self.ids.next_id(), text, Utc::now());
        self.tasks.push(task);
        true
    }

    /// Remove the task with `id`. Missing ids are a no-op.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;

        if removed && self.edit.task_id() == Some(id) {
            self.edit = EditState::NotEditing;
        }
        removed
    }

    /// Flip the completion flag of the task with `id`. Missing ids are a no-op.
    pub fn toggle_task(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Open an edit session on `id`, seeding the draft with its current text.
    /// Any session already open is replaced and its draft discarded.
    pub fn begin_edit(&mut self, id: TaskId) -> bool {
        if let Some(task) = self.task(id) {
            self.edit = EditState::Editing {
                task_id: id,
                draft: task.text.clone(),
            };
        }
        false
    }

    /// Write the edit draft back to its task and close the session.
    ///
    /// A blank draft leaves both the task and the open session untouched.
    pub fn commit_edit(&mut self) -> bool {
        let (task_id, draft) = match &self.edit {
            EditState::Editing { task_id, draft } if !draft.trim().is_empty() => (*task_id, draft.clone()),
            _ => return false,
        };

        self.edit = EditState::NotEditing;
        match self.tasks.iter_mut().find(|t| t.id == task_id) {
            Some(task) => {
                task.text = draft;
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) -> bool {
        self.edit = EditState::NotEditing;
        false
    }

    pub fn set_filter(&mut self, filter: Filter) -> bool {
        self.filter = filter;
        false
    }

    /// Tasks matching the active filter, in collection order.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| self.filter.matches(t)).collect()
    }

    /// Number of tasks not yet completed, whatever the filter.
    pub fn remaining_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }
}
