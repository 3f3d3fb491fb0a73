use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{api_error, ApiError};
use crate::models::{NewParticipant, NewRegistration, ParticipantRow, RecordId, RegistrationRow};
use crate::remote::http_backend::CreatedBody;
use crate::remote::{RegistrationApi, SqliteBackend};

pub async fn list_registrations_handler(
    State(backend): State<SqliteBackend>,
) -> Result<Json<Vec<RegistrationRow>>, ApiError> {
    backend
        .list_registrations()
        .await
        .map(Json)
        .map_err(api_error)
}

pub async fn list_participants_handler(
    State(backend): State<SqliteBackend>,
) -> Result<Json<Vec<ParticipantRow>>, ApiError> {
    backend
        .list_participants()
        .await
        .map(Json)
        .map_err(api_error)
}

pub async fn create_participant_handler(
    State(backend): State<SqliteBackend>,
    Json(body): Json<NewParticipant>,
) -> Result<(StatusCode, Json<CreatedBody>), ApiError> {
    let id = backend.create_participant(body).await.map_err(api_error)?;
    Ok((StatusCode::CREATED, Json(CreatedBody { id })))
}

pub async fn create_registration_handler(
    State(backend): State<SqliteBackend>,
    Json(body): Json<NewRegistration>,
) -> Result<(StatusCode, Json<CreatedBody>), ApiError> {
    let id = backend.create_registration(body).await.map_err(api_error)?;
    Ok((StatusCode::CREATED, Json(CreatedBody { id })))
}

pub async fn delete_registration_handler(
    State(backend): State<SqliteBackend>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    backend
        .delete_registration(&RecordId(id))
        .await
        .map_err(api_error)?;
    Ok(StatusCode::NO_CONTENT)
}
