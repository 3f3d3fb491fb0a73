use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::info;

use crate::models::{ClubRow, EventRow, NewEvent, RecordId};
use crate::remote::{ClubApi, EventApi, RemoteResult};
use crate::services::club_manager::AllClubs;
use crate::services::notification::Notifier;
use crate::services::pipeline::{parse_count, required, Pipeline, PipelineState, SubmitOutcome};
use crate::services::read_cache::{CacheResult, ListQuery, ReadCache};
use crate::services::row_action::RowAction;

pub const NOT_ASSIGNED: &str = "Not Assigned";

pub struct AllEvents(pub Arc<dyn EventApi>);

#[async_trait]
impl ListQuery for AllEvents {
    type Record = EventRow;

    async fn fetch_all(&self) -> RemoteResult<Vec<EventRow>> {
        self.0.list_events().await
    }
}

/// Event as shown in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventView {
    pub id: RecordId,
    pub name: String,
    pub club_name: String,
    pub registered_participants: i64,
    pub max_participants: i64,
}

pub fn build_event_view(row: &EventRow) -> EventView {
    let club_name = row
        .club_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(NOT_ASSIGNED)
        .to_string();

    EventView {
        id: row.id.clone(),
        name: row.name.clone(),
        club_name,
        registered_participants: row.registered_participants.unwrap_or(0),
        max_participants: row.max_participants.unwrap_or(0),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: RecordId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub name: String,
    pub max_participants: String,
    pub club_id: String,
}

pub struct EventManager {
    api: Arc<dyn EventApi>,
    events: ReadCache<AllEvents>,
    clubs: ReadCache<AllClubs>,
    form: EventForm,
    pipeline: Pipeline,
}

impl EventManager {
    pub fn new(
        api: Arc<dyn EventApi>,
        clubs: Arc<dyn ClubApi>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let events = ReadCache::new(AllEvents(api.clone()), notifier.clone(), "Error loading events");
        Self {
            api,
            events,
            clubs: ReadCache::new(AllClubs(clubs), notifier.clone(), "Error loading clubs"),
            form: EventForm::default(),
            pipeline: Pipeline::new("event", notifier),
        }
    }

    pub async fn mount(&self) -> CacheResult<EventRow> {
        let (events, _) = tokio::join!(self.events.refresh(), self.clubs.refresh());
        events
    }

    pub fn events(&self) -> &ReadCache<AllEvents> {
        &self.events
    }

    pub fn rows(&self) -> Vec<EventView> {
        self.events.records().iter().map(build_event_view).collect()
    }

    /// Options for the club selector; read-only.
    pub fn club_options(&self) -> Vec<SelectOption> {
        self.clubs
            .records()
            .into_iter()
            .map(|ClubRow { id, name }| SelectOption {
                label: name,
                value: id,
            })
            .collect()
    }

    pub fn form(&self) -> &EventForm {
        &self.form
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.form.name = value.into();
    }

    pub fn set_max_participants(&mut self, value: impl Into<String>) {
        self.form.max_participants = value.into();
    }

    pub fn set_club(&mut self, value: impl Into<String>) {
        self.form.club_id = value.into();
    }

    pub fn pipeline_state(&self) -> PipelineState {
        self.pipeline.state()
    }

    fn validated_fields(&self) -> Result<NewEvent, &'static str> {
        let (Some(name), Some(club_id), Some(max)) = (
            required(&self.form.name),
            required(&self.form.club_id),
            required(&self.form.max_participants),
        ) else {
            return Err("Please fill all fields");
        };
        let max_participants =
            parse_count(max).ok_or("Max participants must be a positive whole number")?;
        Ok(NewEvent {
            name: name.to_string(),
            club_id: RecordId::from(club_id),
            max_participants,
        })
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        self.pipeline.begin();
        let fields = match self.validated_fields() {
            Ok(fields) => fields,
            Err(message) => return self.pipeline.reject(message),
        };

        let call = self.api.create_event(fields);
        let id = match self.pipeline.dispatch(call, "Error creating event").await {
            Ok(id) => id,
            Err(outcome) => return outcome,
        };

        info!(event_id = %id, "event created");
        self.pipeline.succeed("Success", "Event added successfully!");
        self.form = EventForm::default();
        self.events.refresh().await;
        self.pipeline.finish();
        SubmitOutcome::Created(id)
    }

    pub async fn handle_row_action(
        &mut self,
        action: &str,
        row: &EventView,
    ) -> Option<SubmitOutcome> {
        match RowAction::from_name(action)? {
            RowAction::Delete => Some(self.delete(&row.id).await),
        }
    }

    pub async fn delete(&mut self, id: &RecordId) -> SubmitOutcome {
        self.pipeline.begin();
        let call = self.api.delete_event(id);
        if let Err(outcome) = self.pipeline.dispatch(call, "Error deleting event").await {
            return outcome;
        }

        info!(event_id = %id, "event deleted");
        self.pipeline.succeed("Deleted", "Event deleted successfully");
        self.events.refresh().await;
        self.pipeline.finish();
        SubmitOutcome::Deleted(id.clone())
    }
}
