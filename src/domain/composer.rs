//! Composer - Draft, Validation and the Send Lifecycle
//!
//! ```text
//! Idle ──submit (valid)──► Submitting ──request settles──► Idle
//!   ▲
//!   └──submit (invalid)──┘
//! ```
//!
//! `begin_submit` and `finish_submit` are split so a UI can hold the
//! composer in its own state entity and await the request elsewhere.
//! Every started submission must be finished exactly once.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::draft::{Draft, Field};
use crate::domain::notice::Notice;
use crate::domain::validation::{ValidationState, validate};
use crate::error::Result;
use crate::services::{EmailTransport, SendEmailRequest};

/// Result of asking the composer to start a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStart {
    /// Validation passed; the caller must send `request` and then call
    /// [`Composer::finish_submit`] with the same `id`
    Started {
        id: Uuid,
        request: SendEmailRequest,
    },
    /// Validation failed; no request may be issued
    Invalid(Notice),
    /// A submission is already in flight
    Busy,
}

/// The email composer core
#[derive(Debug, Default)]
pub struct Composer {
    draft: Draft,
    errors: ValidationState,
    submitting: Option<Uuid>,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationState {
        &self.errors
    }

    /// Whether a request is outstanding; inputs and the send control are
    /// disabled while this is true
    pub fn is_submitting(&self) -> bool {
        self.submitting.is_some()
    }

    /// Overwrite one field. Any error shown for that field is dropped without
    /// re-validating, so a still-invalid value shows nothing until the next
    /// submit.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) -> &Draft {
        self.draft.set(field, value);
        if self.errors.clear_field(field) {
            debug!(?field, "Cleared field error on edit");
        }
        &self.draft
    }

    /// Validate and, if clean, enter the submitting state
    pub fn begin_submit(&mut self) -> SubmitStart {
        if let Some(id) = self.submitting {
            debug!(submission = %id, "Submit ignored, request already in flight");
            return SubmitStart::Busy;
        }

        let errors = validate(&self.draft);
        if !errors.is_empty() {
            let failing: Vec<_> = errors.iter().map(|(field, _)| field.wire_key()).collect();
            info!(?failing, "Draft failed validation");
            self.errors = errors;
            return SubmitStart::Invalid(Notice::validation_failed());
        }

        let id = Uuid::new_v4();
        self.submitting = Some(id);
        info!(
            submission = %id,
            recipient_domain = self.draft.recipient_domain().unwrap_or("-"),
            "Submitting email"
        );

        SubmitStart::Started {
            id,
            request: SendEmailRequest::from(&self.draft),
        }
    }

    /// Settle a submission started by [`Composer::begin_submit`].
    ///
    /// Success clears the draft; failure keeps it for correction. Either way
    /// the composer is idle afterwards.
    pub fn finish_submit(&mut self, id: Uuid, outcome: &Result<()>) -> Notice {
        if self.submitting != Some(id) {
            warn!(submission = %id, "Finishing a submission that is not in flight");
        }

        let notice = match outcome {
            Ok(()) => {
                info!(submission = %id, "Email sent");
                self.draft.clear();
                Notice::sent()
            }
            Err(e) => {
                warn!(submission = %id, status = ?e.status(), error = %e, "Email send failed");
                Notice::from_send_error(e)
            }
        };

        self.submitting = None;
        notice
    }

    /// Run a full submission against `transport`.
    ///
    /// Returns `None` when a submission is already in flight.
    pub async fn submit<T: EmailTransport>(&mut self, transport: &T) -> Option<Notice> {
        match self.begin_submit() {
            SubmitStart::Busy => None,
            SubmitStart::Invalid(notice) => Some(notice),
            SubmitStart::Started { id, request } => {
                let outcome = transport.send(&request).await;
                Some(self.finish_submit(id, &outcome))
            }
        }
    }
}
