use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::models::{EventRow, NewParticipant, NewRegistration, RecordId, RegistrationRow};
use crate::remote::{EventApi, RegistrationApi, RemoteResult};
use crate::services::event_manager::{AllEvents, SelectOption};
use crate::services::notification::Notifier;
use crate::services::pipeline::{parse_count, required, Pipeline, PipelineState, SubmitOutcome};
use crate::services::read_cache::{CacheResult, ListQuery, ReadCache};
use crate::services::row_action::RowAction;

/// Name given to a new registration until the team name is assigned downstream.
pub const PENDING_TEAM_NAME: &str = "Pending Team Name...";

/// Grace period before re-reading registrations after a successful register,
/// so the store's roll-ups have a chance to settle. Not a completion signal.
pub const DEFAULT_REFRESH_DELAY: Duration = Duration::from_millis(2000);

pub struct AllRegistrations(pub Arc<dyn RegistrationApi>);

#[async_trait]
impl ListQuery for AllRegistrations {
    type Record = RegistrationRow;

    async fn fetch_all(&self) -> RemoteResult<Vec<RegistrationRow>> {
        self.0.list_registrations().await
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationView {
    pub id: RecordId,
    pub team_name: String,
    pub event_name: Option<String>,
    pub participant_name: Option<String>,
    pub participant_email: Option<String>,
    pub team_members_count: Option<i64>,
}

pub fn build_registration_view(row: &RegistrationRow) -> RegistrationView {
    RegistrationView {
        id: row.id.clone(),
        team_name: row.name.clone(),
        event_name: row.event_name.clone(),
        participant_name: row.participant_name.clone(),
        participant_email: row.participant_email.clone(),
        team_members_count: row.team_members_count,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub participant_name: String,
    pub participant_email: String,
    pub event_id: String,
    pub team_members_count: String,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            participant_name: String::new(),
            participant_email: String::new(),
            event_id: String::new(),
            team_members_count: "1".to_string(),
        }
    }
}

pub struct RegistrationManager {
    api: Arc<dyn RegistrationApi>,
    registrations: Arc<ReadCache<AllRegistrations>>,
    events: ReadCache<AllEvents>,
    form: RegistrationForm,
    pipeline: Pipeline,
    refresh_delay: Duration,
    pending_refresh: Option<JoinHandle<()>>,
}

impl RegistrationManager {
    pub fn new(
        api: Arc<dyn RegistrationApi>,
        events: Arc<dyn EventApi>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let registrations = ReadCache::new(
            AllRegistrations(api.clone()),
            notifier.clone(),
            "Error loading registrations",
        );
        Self {
            api,
            registrations: Arc::new(registrations),
            events: ReadCache::new(AllEvents(events), notifier.clone(), "Error loading events"),
            form: RegistrationForm::default(),
            pipeline: Pipeline::new("registration", notifier),
            refresh_delay: DEFAULT_REFRESH_DELAY,
            pending_refresh: None,
        }
    }

    /// Same as `new`, with the refresh delay taken from `REGISTRATION_REFRESH_DELAY_MS`.
    pub fn from_config(
        config: &AppConfig,
        api: Arc<dyn RegistrationApi>,
        events: Arc<dyn EventApi>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::new(api, events, notifier).with_refresh_delay(config.registration_refresh_delay)
    }

    pub fn with_refresh_delay(mut self, delay: Duration) -> Self {
        self.refresh_delay = delay;
        self
    }

    pub async fn mount(&self) -> CacheResult<RegistrationRow> {
        let (registrations, _) = tokio::join!(self.registrations.refresh(), self.events.refresh());
        registrations
    }

    pub fn registrations(&self) -> &ReadCache<AllRegistrations> {
        &self.registrations
    }

    pub fn rows(&self) -> Vec<RegistrationView> {
        self.registrations
            .records()
            .iter()
            .map(build_registration_view)
            .collect()
    }

    pub fn event_options(&self) -> Vec<SelectOption> {
        self.events
            .records()
            .into_iter()
            .map(|EventRow { id, name, .. }| SelectOption {
                label: name,
                value: id,
            })
            .collect()
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn set_participant_name(&mut self, value: impl Into<String>) {
        self.form.participant_name = value.into();
    }

    pub fn set_participant_email(&mut self, value: impl Into<String>) {
        self.form.participant_email = value.into();
    }

    pub fn set_event(&mut self, value: impl Into<String>) {
        self.form.event_id = value.into();
    }

    pub fn set_team_members_count(&mut self, value: impl Into<String>) {
        self.form.team_members_count = value.into();
    }

    pub fn pipeline_state(&self) -> PipelineState {
        self.pipeline.state()
    }

    /// Waits for the delayed refresh scheduled by the last successful submit.
    pub async fn wait_for_refresh(&mut self) {
        if let Some(handle) = self.pending_refresh.take() {
            if let Err(e) = handle.await {
                warn!(error = %e, "delayed registration refresh did not complete");
            }
        }
    }

    fn validated_fields(&self) -> Result<(NewParticipant, RecordId), &'static str> {
        let (Some(name), Some(event_id)) = (
            required(&self.form.participant_name),
            required(&self.form.event_id),
        ) else {
            return Err("Please enter participant name and select an event");
        };
        let team_members_count = match required(&self.form.team_members_count) {
            None => 1,
            Some(raw) => {
                parse_count(raw).ok_or("Team members must be a positive whole number")?
            }
        };
        let participant = NewParticipant {
            name: name.to_string(),
            email: self.form.participant_email.trim().to_string(),
            team_members_count,
        };
        Ok((participant, RecordId::from(event_id)))
    }

    /// Creates the participant, then the registration pointing at it.
    ///
    /// A failure in the second step leaves the participant in place with no
    /// registration; it is reported like any other write failure.
    pub async fn submit(&mut self) -> SubmitOutcome {
        self.pipeline.begin();
        let (participant, event_id) = match self.validated_fields() {
            Ok(fields) => fields,
            Err(message) => return self.pipeline.reject(message),
        };

        let fallback = "Error during registration";
        let call = self.api.create_participant(participant);
        let participant_id = match self.pipeline.dispatch(call, fallback).await {
            Ok(id) => id,
            Err(outcome) => return outcome,
        };

        let call = self.api.create_registration(NewRegistration {
            name: PENDING_TEAM_NAME.to_string(),
            participant_id: participant_id.clone(),
            event_id: event_id.clone(),
        });
        let registration_id = match self.pipeline.dispatch(call, fallback).await {
            Ok(id) => id,
            Err(outcome) => {
                warn!(
                    participant_id = %participant_id,
                    event_id = %event_id,
                    "participant left without a registration"
                );
                return outcome;
            }
        };

        info!(
            registration_id = %registration_id,
            participant_id = %participant_id,
            event_id = %event_id,
            "participant registered"
        );
        self.pipeline.succeed("Success", "Registered successfully!");
        self.form = RegistrationForm::default();
        self.schedule_refresh();
        self.pipeline.finish();
        SubmitOutcome::Created(registration_id)
    }

    fn schedule_refresh(&mut self) {
        let cache = Arc::clone(&self.registrations);
        let delay = self.refresh_delay;
        self.pending_refresh = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            cache.refresh().await;
        }));
    }

    pub async fn handle_row_action(
        &mut self,
        action: &str,
        row: &RegistrationView,
    ) -> Option<SubmitOutcome> {
        match RowAction::from_name(action)? {
            RowAction::Delete => Some(self.delete(&row.id).await),
        }
    }

    pub async fn delete(&mut self, id: &RecordId) -> SubmitOutcome {
        self.pipeline.begin();
        let call = self.api.delete_registration(id);
        if let Err(outcome) = self
            .pipeline
            .dispatch(call, "Error deleting registration")
            .await
        {
            return outcome;
        }

        info!(registration_id = %id, "registration deleted");
        self.pipeline
            .succeed("Deleted", "Registration deleted successfully!");
        self.registrations.refresh().await;
        self.pipeline.finish();
        SubmitOutcome::Deleted(id.clone())
    }
}
