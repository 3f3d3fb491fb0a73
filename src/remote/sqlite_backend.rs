use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use super::{ClubApi, EventApi, RegistrationApi, RemoteError, RemoteResult};
use crate::database::{clubs_repo, events_repo, participants_repo, registrations_repo};
use crate::models::{
    ClubRow, EventRow, NewClub, NewEvent, NewParticipant, NewRegistration, ParticipantRow,
    RecordId, RegistrationRow,
};

/// Answers every remote call directly from the SQLite store.
#[derive(Clone)]
pub struct SqliteBackend {
    pool: SqlitePool,
}

impl SqliteBackend {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// A dangling foreign key means the caller named a record that does not exist.
fn missing_reference(err: sqlx::Error, detail: &str) -> RemoteError {
    let dangling = err
        .as_database_error()
        .is_some_and(|db| db.is_foreign_key_violation());
    if dangling {
        RemoteError::Rejected {
            status: 422,
            message: Some(detail.to_string()),
        }
    } else {
        RemoteError::Storage(err)
    }
}

fn ensure_deleted(affected: u64, id: &RecordId) -> RemoteResult<()> {
    if affected == 0 {
        return Err(RemoteError::NotFound(id.clone()));
    }
    Ok(())
}

#[async_trait]
impl ClubApi for SqliteBackend {
    async fn list_clubs(&self) -> RemoteResult<Vec<ClubRow>> {
        Ok(clubs_repo::list_clubs(&self.pool).await?)
    }

    async fn create_club(&self, fields: NewClub) -> RemoteResult<RecordId> {
        let id = new_id();
        clubs_repo::insert_club(&self.pool, &id, fields.name.trim()).await?;
        Ok(RecordId(id))
    }

    async fn delete_club(&self, id: &RecordId) -> RemoteResult<()> {
        let affected = clubs_repo::delete_club(&self.pool, id.as_str()).await?;
        ensure_deleted(affected, id)
    }
}

#[async_trait]
impl EventApi for SqliteBackend {
    async fn list_events(&self) -> RemoteResult<Vec<EventRow>> {
        Ok(events_repo::list_events(&self.pool).await?)
    }

    async fn create_event(&self, fields: NewEvent) -> RemoteResult<RecordId> {
        let id = new_id();
        events_repo::insert_event(
            &self.pool,
            events_repo::NewEventRecord {
                id: &id,
                name: fields.name.trim(),
                club_id: fields.club_id.as_str(),
                max_participants: fields.max_participants,
            },
        )
        .await
        .map_err(|e| missing_reference(e, "Club not found"))?;
        Ok(RecordId(id))
    }

    async fn delete_event(&self, id: &RecordId) -> RemoteResult<()> {
        let affected = events_repo::delete_event(&self.pool, id.as_str()).await?;
        ensure_deleted(affected, id)
    }
}

#[async_trait]
impl RegistrationApi for SqliteBackend {
    async fn list_registrations(&self) -> RemoteResult<Vec<RegistrationRow>> {
        Ok(registrations_repo::list_registrations(&self.pool).await?)
    }

    async fn list_participants(&self) -> RemoteResult<Vec<ParticipantRow>> {
        Ok(participants_repo::list_participants(&self.pool).await?)
    }

    async fn create_participant(&self, fields: NewParticipant) -> RemoteResult<RecordId> {
        let id = new_id();
        let email = Some(fields.email.trim()).filter(|e| !e.is_empty());
        participants_repo::insert_participant(
            &self.pool,
            participants_repo::NewParticipantRecord {
                id: &id,
                name: fields.name.trim(),
                email,
                team_members_count: fields.team_members_count,
            },
        )
        .await?;
        Ok(RecordId(id))
    }

    async fn create_registration(&self, fields: NewRegistration) -> RemoteResult<RecordId> {
        let id = new_id();
        registrations_repo::insert_registration(
            &self.pool,
            registrations_repo::NewRegistrationRecord {
                id: &id,
                name: &fields.name,
                participant_id: fields.participant_id.as_str(),
                event_id: fields.event_id.as_str(),
            },
        )
        .await
        .map_err(|e| missing_reference(e, "Event or participant not found"))?;
        Ok(RecordId(id))
    }

    async fn delete_registration(&self, id: &RecordId) -> RemoteResult<()> {
        let affected = registrations_repo::delete_registration(&self.pool, id.as_str()).await?;
        ensure_deleted(affected, id)
    }
}
