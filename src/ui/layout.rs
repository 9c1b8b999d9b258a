//! Layout management and calculations

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Horizontally centered column no wider than `max_width`
    #[must_use]
    pub fn content_column(area: Rect, max_width: u16) -> Rect {
        let width = area.width.min(max_width);
        let [column] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        column
    }

    /// Split the page into header (1 line), body and an optional 1-line footer
    #[must_use]
    pub fn page_layout(area: Rect, show_footer: bool) -> [Rect; 3] {
        let footer_height = u16::from(show_footer);
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .areas(area)
    }
}
