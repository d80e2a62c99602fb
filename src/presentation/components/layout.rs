use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// A `width` x `height` box centred horizontally, `offset` rows below the top.
pub fn top_center_rect(area: Rect, width: u16, height: u16, offset: u16) -> Rect {
    let top = offset.min(area.height);
    let width = width.min(area.width);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(top),
            Constraint::Length(height.min(area.height - top)),
            Constraint::Min(0),
        ])
        .split(area);
    let inner = vertical[1];
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(inner.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(inner);
    horizontal[1]
}
