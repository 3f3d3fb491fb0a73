use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::{ClubApi, EventApi, RegistrationApi, RemoteError, RemoteResult};
use crate::config::AppConfig;
use crate::models::{
    ClubRow, EventRow, NewClub, NewEvent, NewParticipant, NewRegistration, ParticipantRow,
    RecordId, RegistrationRow,
};

/// Body of every successful create call.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedBody {
    pub id: RecordId,
}

/// Client for the REST surface in `crate::web`.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Points at `REMOTE_API_URL`.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.remote_api_url.as_str())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> RemoteResult<T> {
        let url = self.url(path);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_failed(&url, e))?;
        decode(check_status(resp).await?).await
    }

    async fn post_create<B>(&self, path: &str, body: &B) -> RemoteResult<RecordId>
    where
        B: Serialize + Sync,
    {
        let url = self.url(path);
        let resp = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| transport_failed(&url, e))?;
        let created: CreatedBody = decode(check_status(resp).await?).await?;
        Ok(created.id)
    }

    async fn delete(&self, path: &str) -> RemoteResult<()> {
        let url = self.url(path);
        let resp = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| transport_failed(&url, e))?;
        check_status(resp).await?;
        Ok(())
    }
}

fn transport_failed(url: &str, err: reqwest::Error) -> RemoteError {
    warn!(url = %url, error = %err, "remote call did not reach the service");
    RemoteError::Transport(err.to_string())
}

async fn check_status(resp: Response) -> RemoteResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body: Option<Value> = resp.json().await.ok();
    Err(rejection(status, body))
}

fn rejection(status: StatusCode, body: Option<Value>) -> RemoteError {
    let message = body
        .as_ref()
        .and_then(|b| b.get("message"))
        .and_then(|m| m.as_str())
        .map(|m| m.to_string());
    RemoteError::Rejected {
        status: status.as_u16(),
        message,
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> RemoteResult<T> {
    resp.json::<T>()
        .await
        .map_err(|e| RemoteError::Decode(e.to_string()))
}

#[async_trait]
impl ClubApi for HttpBackend {
    async fn list_clubs(&self) -> RemoteResult<Vec<ClubRow>> {
        self.get_json("/api/clubs").await
    }

    async fn create_club(&self, fields: NewClub) -> RemoteResult<RecordId> {
        self.post_create("/api/clubs", &fields).await
    }

    async fn delete_club(&self, id: &RecordId) -> RemoteResult<()> {
        self.delete(&format!("/api/clubs/{}", id)).await
    }
}

#[async_trait]
impl EventApi for HttpBackend {
    async fn list_events(&self) -> RemoteResult<Vec<EventRow>> {
        self.get_json("/api/events").await
    }

    async fn create_event(&self, fields: NewEvent) -> RemoteResult<RecordId> {
        self.post_create("/api/events", &fields).await
    }

    async fn delete_event(&self, id: &RecordId) -> RemoteResult<()> {
        self.delete(&format!("/api/events/{}", id)).await
    }
}

#[async_trait]
impl RegistrationApi for HttpBackend {
    async fn list_registrations(&self) -> RemoteResult<Vec<RegistrationRow>> {
        self.get_json("/api/registrations").await
    }

    async fn list_participants(&self) -> RemoteResult<Vec<ParticipantRow>> {
        self.get_json("/api/participants").await
    }

    async fn create_participant(&self, fields: NewParticipant) -> RemoteResult<RecordId> {
        self.post_create("/api/participants", &fields).await
    }

    async fn create_registration(&self, fields: NewRegistration) -> RemoteResult<RecordId> {
        self.post_create("/api/registrations", &fields).await
    }

    async fn delete_registration(&self, id: &RecordId) -> RemoteResult<()> {
        self.delete(&format!("/api/registrations/{}", id)).await
    }
}
