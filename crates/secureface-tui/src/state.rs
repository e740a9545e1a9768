//! Application state for the TUI.
//!
//! Domain state (mode, form values, request lifecycle, status) lives in the
//! [`ViewStore`]; this struct adds what only the terminal needs.

use secureface_core::model::Mode;
use secureface_core::store::ViewStore;

use crate::features::form::FormState;

pub struct AppState {
    /// Flag to quit the application.
    pub should_quit: bool,
    pub store: ViewStore,
    pub form: FormState,
    /// Spinner animation frame counter, advanced while a request is in flight.
    pub spinner_frame: usize,
    /// Service base URL shown in the footer.
    pub base_url: String,
}

impl AppState {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_store(ViewStore::new(Mode::Login), base_url)
    }

    pub fn with_store(store: ViewStore, base_url: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            store,
            form: FormState::default(),
            spinner_frame: 0,
            base_url: base_url.into(),
        }
    }
}
