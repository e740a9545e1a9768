use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use secureface_core::model::{Status, StatusKind};

use crate::common::wrap_to_width;

/// Columns taken by the icon prefix and by the detail indent.
const INDENT: usize = 2;

/// Rows the status panel needs at `width` columns (borders included).
///
/// Zero when there is nothing to show.
pub fn status_height(status: &Status, details: &[String], width: u16) -> u16 {
    if status.is_none() {
        return 0;
    }
    let lines = status_lines(status, details, width.saturating_sub(2));
    u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

pub fn render_status(frame: &mut Frame, area: Rect, status: &Status, details: &[String]) {
    let Some(color) = status_color(status.kind) else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let lines = status_lines(status, details, area.width.saturating_sub(2));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn status_color(kind: StatusKind) -> Option<Color> {
    match kind {
        StatusKind::None => None,
        StatusKind::Success => Some(Color::Green),
        StatusKind::Error => Some(Color::Red),
    }
}

/// Pre-wrapped panel content, so the panel height matches what is drawn.
fn status_lines(status: &Status, details: &[String], text_width: u16) -> Vec<Line<'static>> {
    let Some(color) = status_color(status.kind) else {
        return Vec::new();
    };
    let icon = if status.kind == StatusKind::Success {
        "✓ "
    } else {
        "✗ "
    };
    let wrap_width = usize::from(text_width).saturating_sub(INDENT);
    let message_style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    let indent = " ".repeat(INDENT);

    let mut lines = Vec::new();
    for (i, chunk) in wrap_to_width(&status.message, wrap_width)
        .into_iter()
        .enumerate()
    {
        let prefix = if i == 0 { icon } else { indent.as_str() };
        lines.push(Line::from(vec![
            Span::styled(prefix.to_string(), Style::default().fg(color)),
            Span::styled(chunk, message_style),
        ]));
    }
    for detail in details {
        for chunk in wrap_to_width(detail, wrap_width) {
            lines.push(Line::from(Span::styled(
                format!("{indent}{chunk}"),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
    lines
}
