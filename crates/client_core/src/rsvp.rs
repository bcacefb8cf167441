use std::{sync::Arc, time::Duration};

use shared::{
    domain::{FieldUpdate, RsvpForm},
    error::UserFacingError,
    protocol::RsvpPayload,
};
use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

use crate::{
    endpoint::Endpoint,
    error::{ConfigurationError, RsvpError, ValidationError},
    timer::DelayedAction,
    transport::RsvpTransport,
};

/// How long the thank-you message stays up before the form comes back.
pub const SUCCESS_DISPLAY_WINDOW: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsvpPhase {
    Editing,
    Submitting,
    Succeeded,
    Failed,
}

impl RsvpPhase {
    fn accepts_edits(self) -> bool {
        matches!(self, RsvpPhase::Editing | RsvpPhase::Failed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsvpSnapshot {
    pub phase: RsvpPhase,
    pub form: RsvpForm,
    pub error: Option<UserFacingError>,
}

impl RsvpSnapshot {
    pub fn inputs_enabled(&self) -> bool {
        self.phase.accepts_edits()
    }

    pub fn shows_thanks(&self) -> bool {
        self.phase == RsvpPhase::Succeeded
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Accepted,
    /// A submission is in flight or the thank-you window is showing.
    Ignored,
    Rejected(ValidationError),
    Failed(RsvpError),
}

struct RsvpState {
    phase: RsvpPhase,
    form: RsvpForm,
    error: Option<UserFacingError>,
    reset_timer: Option<DelayedAction>,
}

impl RsvpState {
    fn snapshot(&self) -> RsvpSnapshot {
        RsvpSnapshot {
            phase: self.phase,
            form: self.form.clone(),
            error: self.error.clone(),
        }
    }
}

pub struct RsvpController {
    endpoint: Result<Endpoint, ConfigurationError>,
    transport: Arc<dyn RsvpTransport>,
    inner: Mutex<RsvpState>,
    snapshots: watch::Sender<RsvpSnapshot>,
}

impl RsvpController {
    pub fn new(
        endpoint: Result<Endpoint, ConfigurationError>,
        transport: Arc<dyn RsvpTransport>,
    ) -> Arc<Self> {
        if let Err(err) = &endpoint {
            warn!("rsvp endpoint unavailable, submissions will fail: {err}");
        }

        let state = RsvpState {
            phase: RsvpPhase::Editing,
            form: RsvpForm::default(),
            error: None,
            reset_timer: None,
        };
        let (snapshots, _) = watch::channel(state.snapshot());
        Arc::new(Self {
            endpoint,
            transport,
            inner: Mutex::new(state),
            snapshots,
        })
    }

    pub fn snapshot(&self) -> RsvpSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<RsvpSnapshot> {
        self.snapshots.subscribe()
    }

    /// Merges one field; returns `false` when the form is frozen.
    pub async fn update_field(&self, update: FieldUpdate) -> bool {
        let mut state = self.inner.lock().await;
        if !state.phase.accepts_edits() {
            debug!(phase = ?state.phase, "ignoring field update while form is frozen");
            return false;
        }

        state.form.apply(update);
        state.phase = RsvpPhase::Editing;
        self.publish(&state);
        true
    }

    pub async fn submit(self: &Arc<Self>) -> SubmitOutcome {
        let payload = {
            let mut state = self.inner.lock().await;
            if !state.phase.accepts_edits() {
                debug!(phase = ?state.phase, "ignoring re-entrant rsvp submit");
                return SubmitOutcome::Ignored;
            }

            let missing = state.form.missing_required();
            if !missing.is_empty() {
                let err = ValidationError { missing };
                state.phase = RsvpPhase::Editing;
                state.error = Some(RsvpError::from(err.clone()).user_facing());
                self.publish(&state);
                return SubmitOutcome::Rejected(err);
            }

            state.phase = RsvpPhase::Submitting;
            state.error = None;
            self.publish(&state);
            RsvpPayload::from(&state.form)
        };

        let result = match &self.endpoint {
            Ok(endpoint) => self
                .transport
                .submit(endpoint, &payload)
                .await
                .map_err(RsvpError::from),
            Err(err) => Err(RsvpError::from(err.clone())),
        };

        let mut state = self.inner.lock().await;
        match result {
            Ok(()) => {
                info!(attending = payload.attending.as_wire(), "rsvp submitted");
                state.phase = RsvpPhase::Succeeded;
                state.form = RsvpForm::default();
                state.reset_timer = Some(self.schedule_reset());
                self.publish(&state);
                SubmitOutcome::Accepted
            }
            Err(err) => {
                warn!(kind = ?err.kind(), "rsvp submission failed: {err}");
                state.phase = RsvpPhase::Failed;
                state.error = Some(err.user_facing());
                self.publish(&state);
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Cancels the pending return to the form, if any.
    pub async fn shutdown(&self) {
        let mut state = self.inner.lock().await;
        if let Some(mut timer) = state.reset_timer.take() {
            timer.cancel();
        }
    }

    fn schedule_reset(self: &Arc<Self>) -> DelayedAction {
        let controller = Arc::downgrade(self);
        DelayedAction::schedule(SUCCESS_DISPLAY_WINDOW, async move {
            if let Some(controller) = controller.upgrade() {
                controller.close_success_window().await;
            }
        })
    }

    async fn close_success_window(&self) {
        let mut state = self.inner.lock().await;
        if state.phase == RsvpPhase::Succeeded {
            state.phase = RsvpPhase::Editing;
            self.publish(&state);
        }
    }

    fn publish(&self, state: &RsvpState) {
        self.snapshots.send_replace(state.snapshot());
    }
}

#[cfg(test)]
#[path = "tests/rsvp_tests.rs"]
mod tests;
