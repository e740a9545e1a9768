//! Form feature: field focus and editing for the register view.

mod render;
mod state;
mod update;

pub use render::{form_height, render_login, render_register};
pub use state::FormState;
pub use update::{handle_edit_key, handle_paste};
