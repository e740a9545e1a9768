//! Form feature view.
//!
//! Login has no inputs, only the capture prompt and trigger. Register shows
//! the two bordered inputs above its trigger.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use secureface_core::model::{Field, FormData, Mode};

use crate::common::truncate_start_with_ellipsis;

const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

const LOGIN_PROMPT: &str = "Look at the camera and press Enter to verify identity.";

/// Rows the form needs for `mode`.
pub fn form_height(mode: Mode) -> u16 {
    match mode {
        Mode::Login => 4,
        Mode::Register => 8,
    }
}

pub fn render_login(frame: &mut Frame, area: Rect, loading: bool, spinner_frame: usize) {
    let [prompt_area, _, button_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let prompt = Paragraph::new(LOGIN_PROMPT)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(prompt, prompt_area);

    let button = trigger_line("Authenticate", "Scanning...", loading, spinner_frame);
    frame.render_widget(
        Paragraph::new(button).alignment(Alignment::Center),
        button_area,
    );
}

pub fn render_register(
    frame: &mut Frame,
    area: Rect,
    form: &FormData,
    focus: Field,
    loading: bool,
    spinner_frame: usize,
) {
    let [name_area, email_area, _, button_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    for (field, field_area) in [(Field::Name, name_area), (Field::Email, email_area)] {
        let focused = field == focus && !loading;
        render_input(frame, field_area, field, form.get(field), focused);
    }

    let button = trigger_line("Register Face", "Processing...", loading, spinner_frame);
    frame.render_widget(
        Paragraph::new(button).alignment(Alignment::Center),
        button_area,
    );
}

fn render_input(frame: &mut Frame, area: Rect, field: Field, value: &str, focused: bool) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            format!(" {} ", field.label()),
            Style::default().fg(border_color),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // One column is reserved for the cursor.
    let max_width = inner.width.saturating_sub(1) as usize;
    let mut spans = Vec::new();
    if value.is_empty() && !focused {
        spans.push(Span::styled(
            truncate_start_with_ellipsis(field.label(), max_width),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            truncate_start_with_ellipsis(value, max_width),
            Style::default().fg(Color::White),
        ));
        if focused {
            spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

/// The trigger: a button label when idle, a spinner and busy label while loading.
fn trigger_line(
    idle_label: &str,
    busy_label: &str,
    loading: bool,
    spinner_frame: usize,
) -> Line<'static> {
    if loading {
        let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
        Line::from(vec![
            Span::styled(spinner, Style::default().fg(Color::Yellow)),
            Span::styled(
                format!(" {busy_label}"),
                Style::default().fg(Color::Yellow),
            ),
        ])
    } else {
        Line::from(Span::styled(
            format!("[ {idle_label} ]"),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
    }
}
