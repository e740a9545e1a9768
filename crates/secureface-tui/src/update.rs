//! Reducer: applies events to state and returns effects.
//!
//! Pure with respect to I/O. Network calls happen in the runtime, which feeds
//! their results back as `UiEvent::RequestCompleted`.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use secureface_core::model::{Endpoint, Mode, StatusKind};
use secureface_core::store::{Completion, Submission};
use tracing::debug;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::form;
use crate::state::AppState;

pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            if app.store.is_loading() {
                app.spinner_frame = app.spinner_frame.wrapping_add(1);
            }
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::RequestCompleted { request, result } => {
            let completion = app.store.complete(&request, &result);
            debug!(?completion, "request completed");
            if request.endpoint == Endpoint::Register
                && completion == Completion::Applied(StatusKind::Success)
            {
                app.form.reset_focus();
            }
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) => {
            if accepts_input(app) {
                form::handle_paste(&app.form, &mut app.store, &text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => vec![UiEffect::Quit],
        KeyCode::Char('c' | 'q') if ctrl => vec![UiEffect::Quit],
        KeyCode::Tab | KeyCode::BackTab => {
            let next = app.store.mode().toggled();
            app.store.set_mode(next);
            vec![]
        }
        KeyCode::Enter => submit(app),
        _ => {
            if accepts_input(app) {
                form::handle_edit_key(&mut app.form, &mut app.store, key);
            }
            vec![]
        }
    }
}

/// Starts a dispatch for the current mode.
fn submit(app: &mut AppState) -> Vec<UiEffect> {
    match app.store.submit() {
        Submission::Send(request) => {
            app.spinner_frame = 0;
            vec![UiEffect::SendRequest { request }]
        }
        Submission::Rejected(_) | Submission::Busy => vec![],
    }
}

/// Fields are only editable in register mode, and not while a request runs.
fn accepts_input(app: &AppState) -> bool {
    app.store.mode() == Mode::Register && !app.store.is_loading()
}
