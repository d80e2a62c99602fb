use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::field::{InlineField, Messages};

use super::components::{render_fields, render_footer, render_notices};

pub struct UiContext<'a> {
    pub title: Option<&'a str>,
    pub fields: Vec<&'a InlineField>,
    pub focus: usize,
    pub status_message: &'a str,
    pub help: Option<&'a str>,
    pub tooltip: Option<&'a str>,
    pub messages: &'a Messages,
}

/// Screen area occupied by the field at `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldHit {
    pub index: usize,
    pub area: Rect,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) -> Vec<FieldHit> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(4)])
        .split(frame.area());

    let hits = render_fields(frame, chunks[0], &ctx);
    render_footer(frame, chunks[1], &ctx);
    render_notices(frame, frame.area(), &ctx);
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commit::CommitOutcome;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use std::time::Instant;

    fn screen(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render(fields: Vec<&InlineField>, focus: usize, height: u16) -> (String, Vec<FieldHit>) {
        let messages = Messages::default();
        let mut terminal = Terminal::new(TestBackend::new(60, height)).unwrap();
        let mut hits = Vec::new();
        terminal
            .draw(|frame| {
                hits = draw(
                    frame,
                    UiContext {
                        title: Some("Campaign"),
                        fields,
                        focus,
                        status_message: "Ready",
                        help: Some("Enter -> edit"),
                        tooltip: Some("Press Enter to edit Title"),
                        messages: &messages,
                    },
                );
            })
            .unwrap();
        (screen(terminal.backend().buffer()), hits)
    }

    #[test]
    fn renders_labels_values_and_footer() {
        let title = InlineField::new("Title", "Unnamed", "Spring canvass");
        let info = InlineField::new("Info", "Unnamed", "Bring water");
        let (text, hits) = render(vec![&title, &info], 0, 16);
        assert!(text.contains("Campaign"));
        assert!(text.contains("Title"));
        assert!(text.contains("Spring canvass"));
        assert!(text.contains("Bring water"));
        assert!(text.contains("Status: Ready"));
        assert!(text.contains("Press Enter to edit Title"));
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[1].area.y, hits[0].area.y + 3);
    }

    #[test]
    fn shows_one_banner_per_notice() {
        let mut title = InlineField::new("Title", "Unnamed", "Spring canvass");
        title.request_edit();
        title.handle_key(&crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char('!'),
            crossterm::event::KeyModifiers::NONE,
        ));
        title.confirm().expect("commit request");
        title.resolve(&CommitOutcome::Declined, Instant::now());
        let (text, _) = render(vec![&title], 0, 16);
        assert_eq!(text.matches("Could not save Title").count(), 1);
    }

    #[test]
    fn scrolls_to_keep_focus_on_screen() {
        let fields = (0..8)
            .map(|idx| InlineField::new(format!("Field {idx}"), "Unnamed", format!("v{idx}")))
            .collect::<Vec<_>>();
        let (text, hits) = render(fields.iter().collect(), 7, 14);
        assert!(text.contains("Field 7"));
        assert!(!text.contains("Field 0"));
        assert!(hits.iter().any(|hit| hit.index == 7));
    }
}
