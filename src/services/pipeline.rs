//! Validate → write → notify → refresh, shared by every manager.
//!
//! Each manager owns one `Pipeline`. A submission walks
//! `Idle → Validating → Submitting → Succeeded|Failed → Idle`, or goes straight
//! back from `Validating` to `Idle` when local validation fails. Every exit path
//! raises exactly one notification.

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::models::RecordId;
use crate::remote::{RemoteError, RemoteResult};
use crate::services::notification::{Notification, Notifier, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// What a submission or row action ended in. The notification for it has
/// already been sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; nothing was sent.
    Rejected,
    Created(RecordId),
    Deleted(RecordId),
    /// The remote write failed with this user-visible message.
    Failed(String),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Created(_) | SubmitOutcome::Deleted(_))
    }
}

pub struct Pipeline {
    name: &'static str,
    state: PipelineState,
    notifier: Arc<dyn Notifier>,
}

impl Pipeline {
    pub fn new(name: &'static str, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            name,
            state: PipelineState::Idle,
            notifier,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    fn transition(&mut self, next: PipelineState) {
        debug!(pipeline = self.name, from = ?self.state, to = ?next, "pipeline transition");
        self.state = next;
    }

    pub fn begin(&mut self) {
        self.transition(PipelineState::Validating);
    }

    pub fn reject(&mut self, message: &str) -> SubmitOutcome {
        self.notifier.notify(Notification::new(
            "Validation Error",
            message,
            Severity::Warning,
        ));
        self.transition(PipelineState::Idle);
        SubmitOutcome::Rejected
    }

    /// Awaits one remote write. On failure the error is notified, the pipeline
    /// returns to `Idle` and the returned outcome should be handed straight
    /// back to the caller.
    pub async fn dispatch<T, F>(&mut self, call: F, fallback: &str) -> Result<T, SubmitOutcome>
    where
        F: Future<Output = RemoteResult<T>>,
    {
        if self.state != PipelineState::Submitting {
            self.transition(PipelineState::Submitting);
        }
        match call.await {
            Ok(value) => Ok(value),
            Err(e) => Err(self.fail(&e, fallback)),
        }
    }

    fn fail(&mut self, err: &RemoteError, fallback: &str) -> SubmitOutcome {
        warn!(pipeline = self.name, error = %err, "remote write failed");
        self.transition(PipelineState::Failed);
        let message = err.server_message().unwrap_or(fallback).to_string();
        self.notifier
            .notify(Notification::new("Error", message.clone(), Severity::Error));
        self.transition(PipelineState::Idle);
        SubmitOutcome::Failed(message)
    }

    pub fn succeed(&mut self, title: &str, message: &str) {
        self.transition(PipelineState::Succeeded);
        self.notifier
            .notify(Notification::new(title, message, Severity::Success));
    }

    pub fn finish(&mut self) {
        self.transition(PipelineState::Idle);
    }
}

/// Trimmed value of a required text field, `None` when blank.
pub fn required(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|v| !v.is_empty())
}

/// Whole number of at least 1; capacities and team sizes never go below that.
pub fn parse_count(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok().filter(|n| *n >= 1)
}
