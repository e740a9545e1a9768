//! UI event types.
//!
//! Everything the reducer reacts to: terminal input, timer ticks, and
//! results of async work delivered through the runtime inbox.

use crossterm::event::Event;
use secureface_core::api::{Reply, TransportError};
use secureface_core::store::PendingRequest;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Timer tick; drives the spinner and caps the render rate.
    Tick,

    /// Raw terminal event (key, paste, resize).
    Terminal(Event),

    /// A request spawned by `UiEffect::SendRequest` finished.
    RequestCompleted {
        request: PendingRequest,
        result: Result<Reply, TransportError>,
    },
}
