use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::field::{FieldMode, InlineField, Messages};

use super::super::view::{FieldHit, UiContext};

const FIELD_HEIGHT: u16 = 3;
// Two border columns plus one column of padding on each side.
const FIELD_CHROME: usize = 4;

pub fn render_fields(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) -> Vec<FieldHit> {
    let block = Block::default()
        .title(ctx.title.unwrap_or("Fields").to_string())
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if ctx.fields.is_empty() {
        frame.render_widget(Paragraph::new("No fields to edit"), inner);
        return Vec::new();
    }

    let visible = usize::from(inner.height / FIELD_HEIGHT).max(1);
    let offset = scroll_offset(ctx.focus, visible);
    let mut hits = Vec::with_capacity(visible);
    for (row, (index, field)) in ctx
        .fields
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .enumerate()
    {
        let y = inner.y + row as u16 * FIELD_HEIGHT;
        if y + FIELD_HEIGHT > inner.bottom() {
            break;
        }
        let width = box_width(field, ctx.messages, inner.width);
        let field_area = Rect::new(inner.x, y, width, FIELD_HEIGHT);
        let focused = index == ctx.focus;
        frame.render_widget(field_widget(field, focused, ctx.messages), field_area);
        if focused && field.is_editing() {
            let column = field.draft_buffer().cursor_width() as u16;
            let max_x = field_area.right().saturating_sub(2);
            let cursor_x = (field_area.x + 2).saturating_add(column).min(max_x);
            frame.set_cursor_position((cursor_x, field_area.y + 1));
        }
        hits.push(FieldHit {
            index,
            area: field_area,
        });
    }
    hits
}

fn scroll_offset(focus: usize, visible: usize) -> usize {
    if focus >= visible {
        focus + 1 - visible
    } else {
        0
    }
}

pub(crate) fn field_width(field: &InlineField, messages: &Messages) -> usize {
    let mut value = field.display_value().width().max(field.input_width());
    if field.mode() == FieldMode::Submitting {
        value += 1 + messages.saving.width();
    }
    value.max(field.label().width()) + FIELD_CHROME
}

fn box_width(field: &InlineField, messages: &Messages, available: u16) -> u16 {
    u16::try_from(field_width(field, messages))
        .unwrap_or(u16::MAX)
        .min(available)
}

pub(crate) fn field_widget(
    field: &InlineField,
    focused: bool,
    messages: &Messages,
) -> Paragraph<'static> {
    let border_style = match (focused, field.mode()) {
        (true, FieldMode::Editing) => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        (true, _) => Style::default().fg(Color::LightBlue),
        (false, _) => Style::default().fg(Color::DarkGray),
    };
    let value = field.display_value().to_string();
    let mut spans = vec![match field.mode() {
        FieldMode::Submitting => Span::styled(value, Style::default().fg(Color::DarkGray)),
        _ if field.shows_placeholder() => Span::styled(
            value,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ),
        _ => Span::raw(value),
    }];
    if field.mode() == FieldMode::Submitting {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            messages.saving.to_string(),
            Style::default().fg(Color::Yellow),
        ));
    }
    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(field.label().to_string())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(1)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{buffer::Buffer, widgets::Widget};

    fn render(field: &InlineField, focused: bool) -> Buffer {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 24, 3));
        field_widget(field, focused, &Messages::default()).render(buffer.area, &mut buffer);
        buffer
    }

    #[test]
    fn placeholder_is_dim_and_italic() {
        let field = InlineField::new("Title", "Unnamed", "Unnamed");
        let buffer = render(&field, false);
        let cell = &buffer[(2, 1)];
        assert_eq!(cell.symbol(), "U");
        assert_eq!(cell.fg, Color::DarkGray);
        assert!(cell.modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn focused_border_is_highlighted() {
        let field = InlineField::new("Title", "Unnamed", "Team A");
        let buffer = render(&field, true);
        assert_eq!(buffer[(0, 0)].symbol(), "╭");
        assert_eq!(buffer[(0, 0)].fg, Color::LightBlue);
        assert_eq!(buffer[(2, 1)].fg, Color::Reset);
    }

    #[test]
    fn submitting_shows_the_saving_marker() {
        let mut field = InlineField::new("Title", "Unnamed", "Team A");
        field.request_edit();
        field.handle_key(&crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char('!'),
            crossterm::event::KeyModifiers::NONE,
        ));
        field.confirm().expect("commit request");
        let buffer = render(&field, true);
        assert_eq!(buffer[(2, 1)].symbol(), "T");
        assert_eq!(buffer[(2, 1)].fg, Color::DarkGray);
        let marker = (10..17)
            .map(|x| buffer[(x, 1)].symbol().to_string())
            .collect::<String>();
        assert_eq!(marker, "saving…");
        assert_eq!(buffer[(10, 1)].fg, Color::Yellow);
    }

    #[test]
    fn oversized_values_fill_the_available_width() {
        let messages = Messages::default();
        let huge = InlineField::new("Title", "Unnamed", "x".repeat(65_536));
        assert_eq!(box_width(&huge, &messages, 40), 40);
        let short = InlineField::new("Title", "Unnamed", "A");
        assert_eq!(box_width(&short, &messages, 40), (5 + FIELD_CHROME) as u16);
    }

    #[test]
    fn width_tracks_the_longest_part() {
        let messages = Messages::default();
        let short = InlineField::new("Title", "Unnamed", "A");
        assert_eq!(field_width(&short, &messages), 5 + FIELD_CHROME);
        let long_label = InlineField::new("Event description", "Unnamed", "A");
        assert_eq!(field_width(&long_label, &messages), 17 + FIELD_CHROME);
    }

    #[test]
    fn scroll_keeps_focus_visible() {
        assert_eq!(scroll_offset(0, 3), 0);
        assert_eq!(scroll_offset(2, 3), 0);
        assert_eq!(scroll_offset(5, 3), 3);
    }
}
