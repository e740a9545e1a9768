//! Shared helpers for rendering.

pub mod hints;
pub mod layout;
pub mod text;

pub use hints::{InputHint, hint_line};
pub use layout::{centered_card, fitted_width};
pub use text::{sanitize_for_input, truncate_start_with_ellipsis, wrap_to_width};
