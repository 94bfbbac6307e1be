use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Vertical split: table body, one-line filter bar, one-line status bar.
pub fn split(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}
