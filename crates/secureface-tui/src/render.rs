//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame`, and never
//! mutate state or return effects.
//!
//! Layout, top to bottom inside a centered card: subtitle, mode tabs,
//! separator, the form for the active mode, the status panel (only when a
//! status is set), the service footer and key hints.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use secureface_core::model::Mode;

use crate::common::{
    InputHint, centered_card, fitted_width, hint_line, truncate_start_with_ellipsis,
};
use crate::features::{form, status};
use crate::state::AppState;

const CARD_WIDTH: u16 = 64;

const TITLE: &str = " SecureFace ";
const SUBTITLE: &str = "Biometric Authentication System";

/// Rows used by everything except the form and status panel (borders included).
const CHROME_HEIGHT: u16 = 9;

/// Columns the card takes from its own width: borders plus one column of
/// padding on each side.
const CARD_INSET: u16 = 4;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let store = &app.store;
    let mode = store.mode();
    let loading = store.is_loading();

    let form_height = form::form_height(mode);
    let content_width = fitted_width(frame.area(), CARD_WIDTH).saturating_sub(CARD_INSET);
    let status_height = status::status_height(store.status(), store.details(), content_width);
    let card_height = CHROME_HEIGHT + form_height + status_height;

    let card = centered_card(frame.area(), CARD_WIDTH, card_height);
    frame.render_widget(Clear, card);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            TITLE,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let inner = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    );

    let [
        subtitle_area,
        _,
        tabs_area,
        separator_area,
        form_area,
        _,
        status_area,
        footer_area,
        hints_area,
    ] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(form_height),
        Constraint::Length(1),
        Constraint::Length(status_height),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(SUBTITLE)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        subtitle_area,
    );

    frame.render_widget(
        Paragraph::new(tabs_line(mode)).alignment(Alignment::Center),
        tabs_area,
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "─".repeat(separator_area.width as usize),
            Style::default().fg(Color::DarkGray),
        ))),
        separator_area,
    );

    match mode {
        Mode::Login => form::render_login(frame, form_area, loading, app.spinner_frame),
        Mode::Register => form::render_register(
            frame,
            form_area,
            store.form(),
            app.form.focus,
            loading,
            app.spinner_frame,
        ),
    }

    if status_height > 0 {
        status::render_status(frame, status_area, store.status(), store.details());
    }

    let service = format!("Service: {}", app.base_url);
    frame.render_widget(
        Paragraph::new(truncate_start_with_ellipsis(
            &service,
            footer_area.width as usize,
        ))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center),
        footer_area,
    );

    frame.render_widget(
        Paragraph::new(hint_line(&hints(mode), Color::Cyan)).alignment(Alignment::Center),
        hints_area,
    );
}

fn tabs_line(active: Mode) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, mode) in Mode::all().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        let style = if *mode == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", mode.label()), style));
    }
    Line::from(spans)
}

fn hints(mode: Mode) -> Vec<InputHint<'static>> {
    match mode {
        Mode::Login => vec![
            InputHint::new("Enter", "verify"),
            InputHint::new("Tab", "register"),
            InputHint::new("Esc", "quit"),
        ],
        Mode::Register => vec![
            InputHint::new("Enter", "register"),
            InputHint::new("↑↓", "field"),
            InputHint::new("Tab", "login"),
            InputHint::new("Esc", "quit"),
        ],
    }
}
