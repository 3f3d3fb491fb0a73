//! Contract of the remote service each manager talks to.
//!
//! Managers only see these traits. `SqliteBackend` answers them in-process;
//! `HttpBackend` forwards them to the REST surface served by `crate::web`.

pub mod http_backend;
pub mod sqlite_backend;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    ClubRow, EventRow, NewClub, NewEvent, NewParticipant, NewRegistration, ParticipantRow,
    RecordId, RegistrationRow,
};

pub use http_backend::HttpBackend;
pub use sqlite_backend::SqliteBackend;

pub type RemoteResult<T> = Result<T, RemoteError>;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error(
        "remote service rejected the call ({status}): {}",
        .message.as_deref().unwrap_or("no detail")
    )]
    Rejected { status: u16, message: Option<String> },
    #[error("record {0} not found")]
    NotFound(RecordId),
    #[error("remote service unreachable: {0}")]
    Transport(String),
    #[error("could not decode remote response: {0}")]
    Decode(String),
    #[error("storage failure: {0}")]
    Storage(#[from] sqlx::Error),
}

impl RemoteError {
    /// Detail supplied by the service itself, if any. Transport, decode and
    /// raw storage failures never carry one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            RemoteError::Rejected { message, .. } => message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty()),
            RemoteError::NotFound(_)
            | RemoteError::Transport(_)
            | RemoteError::Decode(_)
            | RemoteError::Storage(_) => None,
        }
    }
}

#[async_trait]
pub trait ClubApi: Send + Sync {
    async fn list_clubs(&self) -> RemoteResult<Vec<ClubRow>>;
    async fn create_club(&self, fields: NewClub) -> RemoteResult<RecordId>;
    async fn delete_club(&self, id: &RecordId) -> RemoteResult<()>;
}

#[async_trait]
pub trait EventApi: Send + Sync {
    async fn list_events(&self) -> RemoteResult<Vec<EventRow>>;
    async fn create_event(&self, fields: NewEvent) -> RemoteResult<RecordId>;
    async fn delete_event(&self, id: &RecordId) -> RemoteResult<()>;
}

/// Registration needs the participant written first; the two creates are
/// separate calls with no transaction spanning them.
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    async fn list_registrations(&self) -> RemoteResult<Vec<RegistrationRow>>;
    async fn list_participants(&self) -> RemoteResult<Vec<ParticipantRow>>;
    async fn create_participant(&self, fields: NewParticipant) -> RemoteResult<RecordId>;
    async fn create_registration(&self, fields: NewRegistration) -> RemoteResult<RecordId>;
    async fn delete_registration(&self, id: &RecordId) -> RemoteResult<()>;
}
