use crate::config::{Config, UiConfig};
use crate::constants::APP_TITLE;
use crate::storage::KeyValueStore;
use crate::ui::components::{common, TaskListComponent};
use crate::ui::core::{Action, Component, EventType};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use std::sync::Arc;

/// Page shell: a centered column with a title, the task list and a footer of
/// key hints.
pub struct AppComponent {
    task_list: TaskListComponent,
    ui: UiConfig,
    should_quit: bool,
}

impl AppComponent {
    /// Build the page and load the stored tasks into its task list.
    pub async fn new(store: Arc<dyn KeyValueStore>, config: &Config) -> anyhow::Result<Self> {
        let task_list = TaskListComponent::load(store, config.display.clone()).await?;
        Ok(Self::with_task_list(task_list, config.ui.clone()))
    }

    pub fn with_task_list(task_list: TaskListComponent, ui: UiConfig) -> Self {
        Self {
            task_list,
            ui,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn task_list(&self) -> &TaskListComponent {
        &self.task_list
    }

    /// Handle a terminal event to completion, including the storage write
    /// when the task collection changed. A failed write ends up in the task
    /// list's status message.
    pub async fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => self.handle_key_events(key),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        if let Action::Quit = self.update(action) {
            log::info!("Quitting application");
            self.should_quit = true;
        }

        self.task_list.flush().await;
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        // Text fields get every other key, 'q' included
        if self.task_list.captures_text() {
            return self.task_list.handle_key_events(key);
        }

        match key.code {
            KeyCode::Char('q') => Action::Quit,
            _ => self.task_list.handle_key_events(key),
        }
    }

    fn update(&mut self, action: Action) -> Action {
        self.task_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let column = LayoutManager::content_column(rect, self.ui.max_width);
        let [header_area, body_area, footer_area] = LayoutManager::page_layout(column, self.ui.show_footer);

        let header = Paragraph::new(APP_TITLE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD));
        f.render_widget(header, header_area);

        self.task_list.render(f, body_area);

        if self.ui.show_footer {
            let hints = common::create_instructions_paragraph(&self.task_list.key_hints());
            f.render_widget(hints, footer_area);
        }
    }
}
