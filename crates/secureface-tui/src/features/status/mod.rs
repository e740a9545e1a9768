//! Status panel: the outcome of the last dispatch.

mod render;

pub use render::{render_status, status_height};
