use crate::config::DisplayConfig;
use crate::constants::{
    CHECKBOX_DONE, CHECKBOX_OPEN, ERROR_SAVE_FAILED, NEW_TASK_PLACEHOLDER, NEW_TASK_TITLE, TASKS_TITLE,
};
use crate::repositories::TaskRepository;
use crate::storage::KeyValueStore;
use crate::todo::{self, Filter, Task, TaskId, TodoList};
use crate::ui::components::common::{self, shortcuts, InstructionShortcut, CURSOR};
use crate::ui::core::{Action, Component, Focus};
use crate::utils::datetime;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};
use std::sync::Arc;

/// Width of the "All | Active | Completed" filter tabs
const FILTER_TABS_WIDTH: u16 = 26;

/// The interactive task list: new-task field, remaining counter, filter tabs
/// and the task rows. Owns the [`TodoList`] and writes it to storage after
/// every change to the collection.
pub struct TaskListComponent {
    todo: TodoList,
    store: Arc<dyn KeyValueStore>,
    display: DisplayConfig,
    focus: Focus,
    selected_index: usize,
    list_state: ListState,
    dirty: bool,
    status_message: Option<String>,
}

impl TaskListComponent {
    /// Build the component and restore the stored task collection.
    pub async fn load(store: Arc<dyn KeyValueStore>, display: DisplayConfig) -> anyhow::Result<Self> {
        let tasks = TaskRepository::load_or_default(store.as_ref()).await?;
        Ok(Self::with_tasks(store, display, tasks))
    }

    pub fn with_tasks(store: Arc<dyn KeyValueStore>, display: DisplayConfig, tasks: Vec<Task>) -> Self {
        let mut component = Self {
            todo: TodoList::from_tasks(tasks),
            store,
            display,
            focus: Focus::NewTask,
            selected_index: 0,
            list_state: ListState::default(),
            dirty: false,
            status_message: None,
        };
        component.update_list_state();
        component
    }

    pub fn todo(&self) -> &TodoList {
        &self.todo
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Last storage failure, cleared by the next successful save
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// True when the collection changed since the last save
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// True while a text field has focus and printable keys are input
    pub fn captures_text(&self) -> bool {
        matches!(self.focus, Focus::NewTask | Focus::EditField)
    }

    /// Id of the task under the cursor in the filtered view
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.todo.visible_tasks().get(self.selected_index).map(|t| t.id)
    }

    /// Write the collection to storage if it changed.
    ///
    /// A failed write is logged and kept as the status message. The dirty flag
    /// is cleared either way; the next change writes the full list again.
    pub async fn flush(&mut self) {
        if !self.dirty {
            return;
        }
        self.dirty = false;

        match TaskRepository::save(self.store.as_ref(), self.todo.tasks()).await {
            Ok(()) => self.status_message = None,
            Err(e) => {
                log::error!("Failed to save tasks: {}", e);
                self.status_message = Some(format!("{}: {}", ERROR_SAVE_FAILED, e));
            }
        }
    }

    /// Key hints for the current focus
    pub fn key_hints(&self) -> Vec<InstructionShortcut> {
        use shortcuts::*;

        match self.focus {
            Focus::NewTask => vec![ENTER_ADD, SEPARATOR, TAB_LIST],
            Focus::EditField => vec![ENTER_SAVE, SEPARATOR, ESC_CANCEL, SEPARATOR, TAB_LIST],
            Focus::List => vec![
                SPACE_TOGGLE,
                SEPARATOR,
                E_EDIT,
                SEPARATOR,
                D_DELETE,
                SEPARATOR,
                F_FILTER,
                SEPARATOR,
                TAB_NEW,
                SEPARATOR,
                Q_QUIT,
            ],
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn set_focus(&mut self, focus: Focus) {
        if focus == Focus::EditField && !self.todo.edit_state().is_editing() {
            return;
        }
        self.focus = focus;
    }

    /// Apply a printable key or Backspace to a text buffer
    fn edit_buffer(buffer: &mut String, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                buffer.push(c);
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            _ => {}
        }
    }

    fn handle_list_key(&self, key: KeyEvent) -> Action {
        let selected = self.selected_task_id();

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::NextTask,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousTask,
            KeyCode::Char(' ') | KeyCode::Char('x') => selected.map_or(Action::None, Action::ToggleTask),
            KeyCode::Char('e') => selected.map_or(Action::None, Action::BeginEdit),
            KeyCode::Enter => match selected {
                Some(id) if self.todo.edit_state().task_id() == Some(id) => Action::Focus(Focus::EditField),
                Some(id) => Action::BeginEdit(id),
                None => Action::None,
            },
            KeyCode::Char('d') | KeyCode::Delete => selected.map_or(Action::None, Action::DeleteTask),
            KeyCode::Char('1') => Action::SetFilter(Filter::All),
            KeyCode::Char('2') => Action::SetFilter(Filter::Active),
            KeyCode::Char('3') => Action::SetFilter(Filter::Completed),
            KeyCode::Char('f') => Action::CycleFilter,
            KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => Action::Focus(Focus::NewTask),
            _ => Action::None,
        }
    }

    /// Keep the cursor inside the filtered view
    fn update_list_state(&mut self) {
        let visible = self.todo.visible_tasks().len();
        if visible == 0 {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= visible {
                self.selected_index = visible - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn create_task_item<'a>(&self, task: &'a Task) -> ListItem<'a> {
        if let Some(draft) = self.edit_draft_for(task.id) {
            let mut spans = vec![
                Span::styled("✎ ", Style::default().fg(Color::Yellow)),
                Span::styled(draft.to_string(), Style::default().fg(Color::Yellow)),
            ];
            if self.focus == Focus::EditField {
                spans.push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
            }
            return ListItem::new(Line::from(spans));
        }

        let (checkbox, checkbox_style, text_style) = if task.completed {
            (
                CHECKBOX_DONE,
                Style::default().fg(Color::Green),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT),
            )
        } else {
            (CHECKBOX_OPEN, Style::default().fg(Color::Gray), Style::default().fg(Color::White))
        };

        let mut spans = vec![
            Span::styled(checkbox, checkbox_style),
            Span::raw(" "),
            Span::styled(task.text.as_str(), text_style),
        ];

        if self.display.show_created_at {
            let created = datetime::format_created_at_now(&task.created_at, &self.display.date_format);
            spans.push(Span::styled(
                format!("  · {}", created),
                Style::default().fg(Color::DarkGray),
            ));
        }

        ListItem::new(Line::from(spans))
    }

    fn edit_draft_for(&self, id: TaskId) -> Option<&str> {
        match self.todo.edit_state().task_id() {
            Some(editing) if editing == id => self.todo.edit_state().draft(),
            _ => None,
        }
    }

    fn render_status_row(&self, f: &mut Frame, rect: Rect) {
        let [count_area, tabs_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(FILTER_TABS_WIDTH)]).areas(rect);

        let remaining = Paragraph::new(todo::remaining_label(self.todo.remaining_count()))
            .style(Style::default().fg(Color::Gray));
        f.render_widget(remaining, count_area);

        let tabs = Tabs::new(Filter::ALL.iter().map(|filter| filter.label()))
            .select(self.todo.filter().index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("|");
        f.render_widget(tabs, tabs_area);
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match self.focus {
            Focus::NewTask => match key.code {
                KeyCode::Enter => Action::AddTask,
                KeyCode::Tab | KeyCode::Down | KeyCode::Esc => Action::Focus(Focus::List),
                _ => {
                    Self::edit_buffer(self.todo.new_task_draft_mut(), key);
                    Action::None
                }
            },
            Focus::EditField => match key.code {
                KeyCode::Enter => Action::CommitEdit,
                KeyCode::Esc => Action::CancelEdit,
                KeyCode::Tab => Action::Focus(Focus::List),
                _ => {
                    if let Some(draft) = self.todo.edit_draft_mut() {
                        Self::edit_buffer(draft, key);
                    }
                    Action::None
                }
            },
            Focus::List => self.handle_list_key(key),
        }
    }

    fn update(&mut self, action: Action) -> Action {
        let remaining = match action {
            Action::AddTask => {
                if self.todo.add_task() {
                    if let Some(task) = self.todo.tasks().last() {
                        log::info!("Task: Added task {} '{}'", task.id, task.text);
                    }
                    self.mark_dirty();
                }
                Action::None
            }
            Action::DeleteTask(id) => {
                if self.todo.delete_task(id) {
                    log::info!("Task: Deleted task {}", id);
                    self.mark_dirty();
                    if self.focus == Focus::EditField && !self.todo.edit_state().is_editing() {
                        self.focus = Focus::List;
                    }
                }
                Action::None
            }
            Action::ToggleTask(id) => {
                if self.todo.toggle_task(id) {
                    log::info!("Task: Toggled task {}", id);
                    self.mark_dirty();
                }
                Action::None
            }
            Action::BeginEdit(id) => {
                self.todo.begin_edit(id);
                if self.todo.edit_state().task_id() == Some(id) {
                    log::debug!("Task: Editing task {}", id);
                    self.focus = Focus::EditField;
                }
                Action::None
            }
            Action::CommitEdit => {
                let editing = self.todo.edit_state().task_id();
                if self.todo.commit_edit() {
                    log::info!("Task: Updated text of task {:?}", editing);
                    self.mark_dirty();
                }
                if !self.todo.edit_state().is_editing() {
                    self.focus = Focus::List;
                }
                Action::None
            }
            Action::CancelEdit => {
                self.todo.cancel_edit();
                self.focus = Focus::List;
                Action::None
            }
            Action::SetFilter(filter) => {
                self.todo.set_filter(filter);
                log::debug!("View: Filter set to {}", filter.name());
                Action::None
            }
            Action::CycleFilter => {
                let next = self.todo.filter().next();
                self.todo.set_filter(next);
                log::debug!("View: Filter set to {}", next.name());
                Action::None
            }
            Action::NextTask => {
                let visible = self.todo.visible_tasks().len();
                if visible > 0 {
                    self.selected_index = (self.selected_index + 1) % visible;
                }
                Action::None
            }
            Action::PreviousTask => {
                let visible = self.todo.visible_tasks().len();
                if visible > 0 {
                    self.selected_index = if self.selected_index == 0 {
                        visible - 1
                    } else {
                        self.selected_index - 1
                    };
                }
                Action::None
            }
            Action::Focus(focus) => {
                self.set_focus(focus);
                Action::None
            }
            other => other,
        };

        self.update_list_state();
        remaining
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let [input_area, status_area, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)]).areas(rect);

        let input = common::create_input_paragraph(
            self.todo.new_task_draft(),
            NEW_TASK_TITLE,
            self.focus == Focus::NewTask,
            NEW_TASK_PLACEHOLDER,
        );
        f.render_widget(input, input_area);

        self.render_status_row(f, status_area);

        let mut block = Block::default().borders(Borders::ALL).title(TASKS_TITLE);
        if let Some(message) = &self.status_message {
            block = block.title_bottom(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red),
            )));
        }

        let visible = self.todo.visible_tasks();
        if visible.is_empty() {
            let placeholder = ListItem::new(Line::from(Span::styled(
                todo::empty_view_message(self.todo.filter()),
                Style::default().fg(Color::DarkGray),
            )));
            f.render_widget(List::new(vec![placeholder]).block(block), list_area);
            return;
        }

        let items: Vec<ListItem> = visible.iter().map(|&task| self.create_task_item(task)).collect();
        let tasks_list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state.clone();
        if self.focus == Focus::NewTask {
            list_state.select(None);
        }
        f.render_stateful_widget(tasks_list, list_area, &mut list_state);
        if self.focus != Focus::NewTask {
            self.list_state = list_state;
        }
    }
}
