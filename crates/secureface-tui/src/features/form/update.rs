//! Form reducer.
//!
//! Editing always appends or deletes at the end of the focused field; there is
//! no in-field cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use secureface_core::store::ViewStore;
use tracing::debug;

use super::state::FormState;
use crate::common::sanitize_for_input;

/// Applies an editing key to the focused field.
///
/// Returns `false` when the key is not an editing key, so the caller can try
/// other handlers.
pub fn handle_edit_key(form: &mut FormState, store: &mut ViewStore, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Up => form.focus_prev(),
        KeyCode::Down => form.focus_next(),
        KeyCode::Backspace => {
            let mut value = store.form().get(form.focus).to_string();
            value.pop();
            store.update_field(form.focus, value);
        }
        KeyCode::Char('u') if ctrl => store.update_field(form.focus, String::new()),
        KeyCode::Char(c) if !ctrl && !alt => {
            let mut value = store.form().get(form.focus).to_string();
            value.push(c);
            store.update_field(form.focus, value);
        }
        _ => return false,
    }
    true
}

/// Appends pasted text to the focused field.
pub fn handle_paste(form: &FormState, store: &mut ViewStore, text: &str) {
    let sanitized = sanitize_for_input(text);
    if sanitized.is_empty() {
        return;
    }
    debug!(field = %form.focus, len = sanitized.len(), "paste");
    let mut value = store.form().get(form.focus).to_string();
    value.push_str(&sanitized);
    store.update_field(form.focus, value);
}

#[cfg(test)]
mod tests {
    use secureface_core::model::{Field, FormData, Mode};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_appends_to_focused_field() {
        let mut form = FormState::default();
        let mut store = ViewStore::new(Mode::Register);

        for c in "Ann".chars() {
            assert!(handle_edit_key(&mut form, &mut store, key(KeyCode::Char(c))));
        }
        assert!(handle_edit_key(&mut form, &mut store, key(KeyCode::Down)));
        for c in "a@b".chars() {
            handle_edit_key(&mut form, &mut store, key(KeyCode::Char(c)));
        }

        assert_eq!(store.form(), &FormData::new("Ann", "a@b"));
        assert_eq!(form.focus, Field::Email);
    }

    #[test]
    fn test_backspace_and_ctrl_u() {
        let mut form = FormState::default();
        let mut store = ViewStore::with_form(Mode::Register, FormData::new("Anna", ""));

        handle_edit_key(&mut form, &mut store, key(KeyCode::Backspace));
        assert_eq!(store.form().name, "Ann");

        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert!(handle_edit_key(&mut form, &mut store, ctrl_u));
        assert_eq!(store.form().name, "");

        // Backspace on an empty field is a no-op.
        handle_edit_key(&mut form, &mut store, key(KeyCode::Backspace));
        assert_eq!(store.form().name, "");
    }

    #[test]
    fn test_non_editing_keys_fall_through() {
        let mut form = FormState::default();
        let mut store = ViewStore::new(Mode::Register);

        assert!(!handle_edit_key(&mut form, &mut store, key(KeyCode::Enter)));
        assert!(!handle_edit_key(&mut form, &mut store, key(KeyCode::Tab)));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!handle_edit_key(&mut form, &mut store, ctrl_c));
        assert_eq!(store.form(), &FormData::default());
    }

    #[test]
    fn test_paste_strips_newlines() {
        let form = FormState {
            focus: Field::Email,
        };
        let mut store = ViewStore::new(Mode::Register);

        handle_paste(&form, &mut store, "ann@x.com\n");

        assert_eq!(store.form().email, "ann@x.com");
    }
}
