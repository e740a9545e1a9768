//! View-state store.
//!
//! Single owner of mode, form values, request lifecycle and the last status.
//! Every change goes through a named transition so the state machine can be
//! tested without a terminal or a server:
//!
//! ```text
//! idle ──submit──▶ validating ──▶ rejected ──────────────▶ idle
//!                       │
//!                       └────▶ sending ──complete──▶ succeeded | failed ──▶ idle
//! ```
//!
//! ## Generations
//!
//! Requests cannot be cancelled, so a reply may arrive after the user has
//! moved to the other mode. Each mode change and each dispatch advances
//! `generation`; a reply only touches status and form when its ticket carries
//! the current generation. The loading flag is cleared either way.

use tracing::{debug, info, warn};

use crate::api::{Reply, TransportError};
use crate::dispatch::{self, ValidationError};
use crate::model::{Endpoint, Field, FormData, Mode, Status, StatusKind, UnknownFieldError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub u64);

#[derive(Debug, Default)]
pub struct RequestSeq {
    next: u64,
}

impl RequestSeq {
    pub fn next_id(&mut self) -> RequestId {
        let id = RequestId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Identity of one dispatch and the generation it was issued in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub id: RequestId,
    pub generation: u64,
}

/// A request that passed validation and must now be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub ticket: RequestTicket,
    pub endpoint: Endpoint,
    /// Snapshot of the form at dispatch time.
    pub form: FormData,
}

/// Result of [`ViewStore::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// A request is already in flight; nothing changed.
    Busy,
    /// Validation failed; status holds the validation message.
    Rejected(ValidationError),
    Send(PendingRequest),
}

/// Result of [`ViewStore::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Status now has this kind.
    Applied(StatusKind),
    /// The view moved on since dispatch; only the loading flag was cleared.
    Stale,
    /// The ticket was not the active request.
    Ignored,
}

#[derive(Debug, Default)]
pub struct ViewStore {
    mode: Mode,
    form: FormData,
    status: Status,
    details: Vec<String>,
    active: Option<RequestTicket>,
    generation: u64,
    seq: RequestSeq,
}

impl ViewStore {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Creates a store with pre-filled form values.
    pub fn with_form(mode: Mode, form: FormData) -> Self {
        Self {
            mode,
            form,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Secondary lines from the last successful reply.
    pub fn details(&self) -> &[String] {
        &self.details
    }

    pub fn is_loading(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_request(&self) -> Option<RequestTicket> {
        self.active
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Switches mode and clears status. Form values are kept.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            self.generation = self.generation.wrapping_add(1);
        }
        self.mode = mode;
        self.set_status(StatusKind::None, "");
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value.into());
    }

    /// Sets a field by its wire key.
    ///
    /// # Errors
    /// Returns an error for any key other than `name` or `email`.
    pub fn update_field_by_key(
        &mut self,
        key: &str,
        value: impl Into<String>,
    ) -> Result<(), UnknownFieldError> {
        let field: Field = key.parse()?;
        self.update_field(field, value);
        Ok(())
    }

    /// Replaces status wholesale. Reply details are dropped with it.
    pub fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status = Status::new(kind, message);
        self.details.clear();
    }

    /// Marks a request as in flight and returns its ticket.
    pub fn begin_request(&mut self) -> RequestTicket {
        self.generation = self.generation.wrapping_add(1);
        let ticket = RequestTicket {
            id: self.seq.next_id(),
            generation: self.generation,
        };
        self.active = Some(ticket);
        ticket
    }

    /// Clears the loading flag if `ticket` is the active request.
    ///
    /// Returns whether it was.
    pub fn end_request(&mut self, ticket: RequestTicket) -> bool {
        let ok = self.active.is_some_and(|active| active.id == ticket.id);
        if ok {
            self.active = None;
        }
        ok
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Starts a dispatch for the current mode.
    ///
    /// Clears status, begins a request, and validates. A rejected request
    /// ends immediately without ever reaching the network.
    pub fn submit(&mut self) -> Submission {
        if self.is_loading() {
            return Submission::Busy;
        }

        self.set_status(StatusKind::None, "");
        let ticket = self.begin_request();
        let endpoint = self.mode.endpoint();
        debug!(%endpoint, name = %self.form.name, email = %self.form.email, "submit");

        if let Err(err) = dispatch::validate(endpoint, &self.form) {
            info!(%endpoint, %err, "dispatch rejected");
            self.set_status(StatusKind::Error, err.user_message());
            self.end_request(ticket);
            return Submission::Rejected(err);
        }

        info!(%endpoint, id = ticket.id.0, "dispatch started");
        Submission::Send(PendingRequest {
            ticket,
            endpoint,
            form: self.form.clone(),
        })
    }

    /// Applies the outcome of a sent request.
    pub fn complete(
        &mut self,
        request: &PendingRequest,
        result: &Result<Reply, TransportError>,
    ) -> Completion {
        if !self.end_request(request.ticket) {
            return Completion::Ignored;
        }

        if let Err(err) = result {
            warn!(endpoint = %request.endpoint, kind = err.kind(), %err, "transport failure");
        }

        if request.ticket.generation != self.generation {
            info!(endpoint = %request.endpoint, "discarding reply for a previous view");
            return Completion::Stale;
        }

        let resolution = dispatch::resolve(request.endpoint, &request.form, result);
        self.set_status(resolution.status.kind, resolution.status.message);
        self.details = resolution.details;
        if resolution.clear_form {
            self.form.clear();
        }

        info!(endpoint = %request.endpoint, kind = ?self.status.kind, "dispatch resolved");
        Completion::Applied(self.status.kind)
    }
}
