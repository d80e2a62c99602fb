use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Paragraph, Wrap},
};

use super::super::view::UiContext;

pub fn render_footer(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(area);

    let mut status = ctx.status_message.to_string();
    if status.trim().is_empty() {
        status = "Ready".to_string();
    }
    let pending = ctx
        .fields
        .iter()
        .filter(|field| !field.is_interactive())
        .count();
    let badge = if pending > 0 {
        Span::styled(
            format!("[saving {pending}]"),
            Style::default().fg(Color::Yellow),
        )
    } else {
        Span::styled("[idle]", Style::default().fg(Color::Green))
    };
    let status_widget = Paragraph::new(ratatui::text::Line::from(vec![
        Span::raw("Status: "),
        Span::raw(status),
        Span::raw(" "),
        badge,
    ]));
    frame.render_widget(status_widget, rows[0]);

    if let Some(tooltip) = ctx.tooltip {
        let tooltip_widget =
            Paragraph::new(tooltip.to_string()).style(Style::default().fg(Color::Gray));
        frame.render_widget(tooltip_widget, rows[1]);
    }

    if let Some(help) = ctx.help {
        let actions_widget = Paragraph::new(format!("Actions: {help}"))
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(actions_widget, rows[2]);
    }
}
