use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use tasklist::config::DisplayConfig;
use tasklist::constants::TASKS_STORAGE_KEY;
use tasklist::repositories::TaskRepository;
use tasklist::storage::{KeyValueStore, MemoryStore};
use tasklist::todo::{EditState, Filter};
use tasklist::ui::components::TaskListComponent;
use tasklist::ui::core::{Action, Component, Focus};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

async fn setup() -> (Arc<MemoryStore>, TaskListComponent) {
    let store = Arc::new(MemoryStore::new());
    let component = TaskListComponent::load(store.clone(), DisplayConfig::default())
        .await
        .unwrap();
    (store, component)
}

/// Feed one key through the component the way the app does
async fn press(component: &mut TaskListComponent, code: KeyCode) {
    let action = component.handle_key_events(key(code));
    component.update(action);
    component.flush().await;
}

async fn type_text(component: &mut TaskListComponent, text: &str) {
    for c in text.chars() {
        press(component, KeyCode::Char(c)).await;
    }
}

async fn add_task(component: &mut TaskListComponent, text: &str) {
    type_text(component, text).await;
    press(component, KeyCode::Enter).await;
}

fn texts(component: &TaskListComponent) -> Vec<String> {
    component.todo().tasks().iter().map(|t| t.text.clone()).collect()
}

fn render_to_string(component: &mut TaskListComponent, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| component.render(f, f.area())).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[tokio::test]
async fn test_starts_empty_with_new_task_focus() {
    let (store, component) = setup().await;
    assert!(component.todo().tasks().is_empty());
    assert_eq!(component.focus(), Focus::NewTask);
    assert!(component.captures_text());
    assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn test_typing_and_enter_adds_and_persists() {
    let (store, mut component) = setup().await;

    add_task(&mut component, "Buy milk").await;

    assert_eq!(texts(&component), vec!["Buy milk"]);
    assert_eq!(component.todo().new_task_draft(), "");
    assert_eq!(store.write_count(), 1);

    let stored = TaskRepository::load(store.as_ref()).await.unwrap();
    assert_eq!(stored, component.todo().tasks().to_vec());
}

#[tokio::test]
async fn test_blank_add_does_not_write() {
    let (store, mut component) = setup().await;

    add_task(&mut component, "   ").await;

    assert!(component.todo().tasks().is_empty());
    assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn test_backspace_edits_draft() {
    let (_store, mut component) = setup().await;
    type_text(&mut component, "Milx").await;
    press(&mut component, KeyCode::Backspace).await;
    type_text(&mut component, "k").await;
    assert_eq!(component.todo().new_task_draft(), "Milk");
}

#[tokio::test]
async fn test_list_keys_toggle_and_delete() {
    let (store, mut component) = setup().await;
    add_task(&mut component, "A").await;
    add_task(&mut component, "B").await;

    press(&mut component, KeyCode::Tab).await;
    assert_eq!(component.focus(), Focus::List);
    assert_eq!(component.selected_index(), 0);

    press(&mut component, KeyCode::Char(' ')).await;
    assert!(component.todo().tasks()[0].completed);
    assert_eq!(store.write_count(), 3);

    press(&mut component, KeyCode::Char('j')).await;
    press(&mut component, KeyCode::Char('d')).await;
    assert_eq!(texts(&component), vec!["A"]);
    assert_eq!(store.write_count(), 4);

    // Cursor is clamped back into the shorter list
    assert_eq!(component.selected_index(), 0);
}

#[tokio::test]
async fn test_cursor_wraps() {
    let (_store, mut component) = setup().await;
    add_task(&mut component, "A").await;
    add_task(&mut component, "B").await;
    press(&mut component, KeyCode::Esc).await;

    press(&mut component, KeyCode::Up).await;
    assert_eq!(component.selected_index(), 1);
    press(&mut component, KeyCode::Down).await;
    assert_eq!(component.selected_index(), 0);
}

#[tokio::test]
async fn test_filter_changes_never_write() {
    let (store, mut component) = setup().await;
    add_task(&mut component, "A").await;
    add_task(&mut component, "B").await;
    press(&mut component, KeyCode::Tab).await;
    press(&mut component, KeyCode::Char('x')).await;
    let writes = store.write_count();

    press(&mut component, KeyCode::Char('2')).await;
    assert_eq!(component.todo().filter(), Filter::Active);
    let visible: Vec<&str> = component
        .todo()
        .visible_tasks()
        .iter()
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(visible, vec!["B"]);

    press(&mut component, KeyCode::Char('f')).await;
    assert_eq!(component.todo().filter(), Filter::Completed);
    press(&mut component, KeyCode::Char('1')).await;
    assert_eq!(component.todo().filter(), Filter::All);

    assert_eq!(store.write_count(), writes);
}

#[tokio::test]
async fn test_edit_flow_commit() {
    let (store, mut component) = setup().await;
    add_task(&mut component, "A").await;
    press(&mut component, KeyCode::Tab).await;

    press(&mut component, KeyCode::Char('e')).await;
    assert_eq!(component.focus(), Focus::EditField);
    assert_eq!(component.todo().edit_state().draft(), Some("A"));

    // 'q' and 'd' are text here
    type_text(&mut component, "qd").await;
    assert_eq!(store.write_count(), 1);

    press(&mut component, KeyCode::Enter).await;
    assert_eq!(texts(&component), vec!["Aqd"]);
    assert_eq!(component.todo().edit_state(), &EditState::NotEditing);
    assert_eq!(component.focus(), Focus::List);
    assert_eq!(store.write_count(), 2);
}

#[tokio::test]
async fn test_blank_commit_keeps_edit_open() {
    let (store, mut component) = setup().await;
    add_task(&mut component, "A").await;
    press(&mut component, KeyCode::Tab).await;
    press(&mut component, KeyCode::Enter).await;
    press(&mut component, KeyCode::Backspace).await;

    press(&mut component, KeyCode::Enter).await;

    assert_eq!(texts(&component), vec!["A"]);
    assert!(component.todo().edit_state().is_editing());
    assert_eq!(component.focus(), Focus::EditField);
    assert_eq!(store.write_count(), 1);
}

#[tokio::test]
async fn test_cancel_edit_restores_focus() {
    let (store, mut component) = setup().await;
    add_task(&mut component, "A").await;
    press(&mut component, KeyCode::Tab).await;
    press(&mut component, KeyCode::Char('e')).await;
    type_text(&mut component, "2").await;

    press(&mut component, KeyCode::Esc).await;

    assert_eq!(texts(&component), vec!["A"]);
    assert_eq!(component.todo().edit_state(), &EditState::NotEditing);
    assert_eq!(component.focus(), Focus::List);
    assert_eq!(store.write_count(), 1);
}

#[tokio::test]
async fn test_tab_leaves_edit_session_open() {
    let (_store, mut component) = setup().await;
    add_task(&mut component, "A").await;
    press(&mut component, KeyCode::Tab).await;
    press(&mut component, KeyCode::Char('e')).await;
    type_text(&mut component, "!").await;

    press(&mut component, KeyCode::Tab).await;
    assert_eq!(component.focus(), Focus::List);
    assert_eq!(component.todo().edit_state().draft(), Some("A!"));

    // Enter on the row being edited goes back to its field
    press(&mut component, KeyCode::Enter).await;
    assert_eq!(component.focus(), Focus::EditField);
    assert_eq!(component.todo().edit_state().draft(), Some("A!"));
}

#[tokio::test]
async fn test_focus_edit_field_requires_session() {
    let (_store, mut component) = setup().await;
    component.update(Action::Focus(Focus::EditField));
    assert_eq!(component.focus(), Focus::NewTask);
}

#[tokio::test]
async fn test_list_keys_on_empty_view_do_nothing() {
    let (store, mut component) = setup().await;
    press(&mut component, KeyCode::Tab).await;

    for code in [KeyCode::Char(' '), KeyCode::Char('e'), KeyCode::Char('d'), KeyCode::Enter] {
        let action = component.handle_key_events(key(code));
        assert_eq!(action, Action::None);
    }
    assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn test_quit_passes_through_update() {
    let (_store, mut component) = setup().await;
    assert_eq!(component.update(Action::Quit), Action::Quit);
}

#[tokio::test]
async fn test_loads_stored_tasks() {
    let raw = r#"[{"id":5,"text":"Stored","completed":true,"createdAt":"2024-05-01T09:30:00.000Z"}]"#;
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::with_entry(TASKS_STORAGE_KEY, raw));

    let mut component = TaskListComponent::load(store, DisplayConfig::default()).await.unwrap();
    assert_eq!(texts(&component), vec!["Stored"]);

    add_task(&mut component, "New").await;
    let ids: Vec<u64> = component.todo().tasks().iter().map(|t| t.id).collect();
    assert!(ids[1] > ids[0]);
}

#[tokio::test]
async fn test_malformed_storage_starts_empty() {
    let store = Arc::new(MemoryStore::with_entry(TASKS_STORAGE_KEY, "not json"));
    let mut component = TaskListComponent::load(store.clone(), DisplayConfig::default())
        .await
        .unwrap();
    assert!(component.todo().tasks().is_empty());

    // The first change replaces the bad payload
    add_task(&mut component, "Fresh").await;
    let stored = TaskRepository::load(store.as_ref()).await.unwrap();
    assert_eq!(stored.len(), 1);
}

#[tokio::test]
async fn test_render_empty_placeholders() {
    let (_store, mut component) = setup().await;

    let screen = render_to_string(&mut component, 60, 12);
    assert!(screen.contains("No tasks to display"));
    assert!(screen.contains("0 tasks remaining"));
    assert!(screen.contains("Add a new task..."));

    component.update(Action::SetFilter(Filter::Completed));
    let screen = render_to_string(&mut component, 60, 12);
    assert!(screen.contains("No tasks (completed) to display"));
}

#[tokio::test]
async fn test_render_tasks_and_counter() {
    let (_store, mut component) = setup().await;
    add_task(&mut component, "Buy milk").await;
    add_task(&mut component, "Walk dog").await;
    press(&mut component, KeyCode::Tab).await;
    press(&mut component, KeyCode::Char(' ')).await;

    let screen = render_to_string(&mut component, 60, 12);
    assert!(screen.contains("[x] Buy milk"));
    assert!(screen.contains("[ ] Walk dog"));
    assert!(screen.contains("1 task remaining"));
    assert!(screen.contains("Completed"));
}

#[tokio::test]
async fn test_render_edit_row() {
    let (_store, mut component) = setup().await;
    add_task(&mut component, "A").await;
    press(&mut component, KeyCode::Tab).await;
    press(&mut component, KeyCode::Char('e')).await;
    type_text(&mut component, "BC").await;

    let screen = render_to_string(&mut component, 60, 12);
    assert!(screen.contains("ABC"));
    assert!(!screen.contains("[ ] A"));
}
