use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::models::{ClubRow, NewClub, RecordId};
use crate::remote::{ClubApi, RemoteResult};
use crate::services::notification::Notifier;
use crate::services::pipeline::{required, Pipeline, PipelineState, SubmitOutcome};
use crate::services::read_cache::{CacheResult, ListQuery, ReadCache};
use crate::services::row_action::RowAction;

/// "List all clubs", shared by every manager that shows clubs.
pub struct AllClubs(pub Arc<dyn ClubApi>);

#[async_trait]
impl ListQuery for AllClubs {
    type Record = ClubRow;

    async fn fetch_all(&self) -> RemoteResult<Vec<ClubRow>> {
        self.0.list_clubs().await
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClubForm {
    pub name: String,
}

pub struct ClubManager {
    api: Arc<dyn ClubApi>,
    clubs: ReadCache<AllClubs>,
    form: ClubForm,
    pipeline: Pipeline,
}

impl ClubManager {
    pub fn new(api: Arc<dyn ClubApi>, notifier: Arc<dyn Notifier>) -> Self {
        let clubs = ReadCache::new(AllClubs(api.clone()), notifier.clone(), "Error loading clubs");
        Self {
            api,
            clubs,
            form: ClubForm::default(),
            pipeline: Pipeline::new("club", notifier),
        }
    }

    pub async fn mount(&self) -> CacheResult<ClubRow> {
        self.clubs.refresh().await
    }

    pub fn clubs(&self) -> &ReadCache<AllClubs> {
        &self.clubs
    }

    pub fn rows(&self) -> Vec<ClubRow> {
        self.clubs.records()
    }

    pub fn form(&self) -> &ClubForm {
        &self.form
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.form.name = value.into();
    }

    pub fn pipeline_state(&self) -> PipelineState {
        self.pipeline.state()
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        self.pipeline.begin();
        let Some(name) = required(&self.form.name).map(str::to_string) else {
            return self.pipeline.reject("Please enter a club name");
        };

        let call = self.api.create_club(NewClub { name });
        let id = match self.pipeline.dispatch(call, "Error creating club").await {
            Ok(id) => id,
            Err(outcome) => return outcome,
        };

        info!(club_id = %id, "club created");
        self.pipeline.succeed("Success", "Club added successfully!");
        self.form = ClubForm::default();
        self.clubs.refresh().await;
        self.pipeline.finish();
        SubmitOutcome::Created(id)
    }

    pub async fn handle_row_action(
        &mut self,
        action: &str,
        row: &ClubRow,
    ) -> Option<SubmitOutcome> {
        match RowAction::from_name(action)? {
            RowAction::Delete => Some(self.delete(&row.id).await),
        }
    }

    pub async fn delete(&mut self, id: &RecordId) -> SubmitOutcome {
        self.pipeline.begin();
        let call = self.api.delete_club(id);
        if let Err(outcome) = self.pipeline.dispatch(call, "Error deleting club").await {
            return outcome;
        }

        info!(club_id = %id, "club deleted");
        self.pipeline.succeed("Deleted", "Club deleted successfully");
        self.clubs.refresh().await;
        self.pipeline.finish();
        SubmitOutcome::Deleted(id.clone())
    }
}
