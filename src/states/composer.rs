//! Composer State
//!
//! GPUI entity that owns the [`Composer`] and drives its send lifecycle.
//! The request runs on the tokio bridge; the result comes back through a
//! GPUI task that settles the submission and emits [`ComposerEvent`]s.

use crate::domain::composer::{Composer, SubmitStart};
use crate::domain::draft::Field;
use crate::domain::notice::Notice;
use crate::services::{EmailClient, EmailTransport, run_in_tokio};
use gpui::{Context, EventEmitter};
use tracing::{debug, warn};

/// Events emitted from the composer state to the view
#[derive(Clone, Debug)]
pub enum ComposerEvent {
    /// Show a notification
    Notify(Notice),
    /// The draft was cleared after a successful send; inputs must follow
    DraftReset,
}

/// Composer entity state
pub struct ComposerState {
    composer: Composer,
    client: EmailClient,
}

impl EventEmitter<ComposerEvent> for ComposerState {}

impl ComposerState {
    pub fn new(client: EmailClient) -> Self {
        Self {
            composer: Composer::new(),
            client,
        }
    }

    // ==================== Getters ====================

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn is_submitting(&self) -> bool {
        self.composer.is_submitting()
    }

    // ==================== Mutations ====================

    /// Mirror an input edit into the draft
    pub fn update_field(&mut self, field: Field, value: impl Into<String>, cx: &mut Context<Self>) {
        let had_error = self.composer.errors().contains(field);
        self.composer.update_field(field, value);
        if had_error {
            cx.notify();
        }
    }

    /// Validate and send the current draft
    pub fn submit(&mut self, cx: &mut Context<Self>) {
        match self.composer.begin_submit() {
            SubmitStart::Busy => {
                debug!("Send requested while a request is in flight");
            }
            SubmitStart::Invalid(notice) => {
                cx.emit(ComposerEvent::Notify(notice));
                cx.notify();
            }
            SubmitStart::Started { id, request } => {
                cx.notify();

                let client = self.client.clone();
                cx.spawn(async move |this, cx| {
                    let outcome = run_in_tokio(async move { client.send(&request).await }).await;

                    let settled = this.update(cx, |state, cx| {
                        let sent = outcome.is_ok();
                        let notice = state.composer.finish_submit(id, &outcome);
                        if sent {
                            cx.emit(ComposerEvent::DraftReset);
                        }
                        cx.emit(ComposerEvent::Notify(notice));
                        cx.notify();
                    });

                    if settled.is_err() {
                        warn!(submission = %id, "Composer dropped before the send settled");
                    }
                })
                .detach();
            }
        }
    }
}
