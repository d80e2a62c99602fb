use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::field::NoticeKind;

use super::super::view::UiContext;
use super::layout::top_center_rect;

const BANNER_TOP: u16 = 1;

/// Stacks one banner per active notice at the top of `area`, newest first.
pub fn render_notices(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let mut notices = ctx
        .fields
        .iter()
        .filter_map(|field| field.notice().map(|notice| (field, notice)))
        .collect::<Vec<_>>();
    notices.sort_by_key(|(_, notice)| std::cmp::Reverse(notice.raised_at()));

    let max_text = usize::from(area.width.saturating_sub(6)).max(1);
    let mut offset = BANNER_TOP;
    for (field, notice) in notices {
        if offset >= area.height {
            break;
        }
        let text = ctx.messages.notice(notice.kind(), field.label());
        let lines = wrap(&text, max_text)
            .into_iter()
            .map(|line| line.into_owned())
            .collect::<Vec<_>>();
        let text_width = lines.iter().map(|line| line.width()).max().unwrap_or(0);
        let height = lines.len() as u16 + 2;
        let rect = top_center_rect(area, text_width as u16 + 4, height, offset);
        offset = offset.saturating_add(height);

        let color = match notice.kind() {
            NoticeKind::Success => Color::Green,
            NoticeKind::Failure => Color::Red,
        };
        frame.render_widget(Clear, rect);
        let banner = Paragraph::new(lines.join("\n"))
            .style(Style::default().fg(color))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color)),
            );
        frame.render_widget(banner, rect);
    }
}
