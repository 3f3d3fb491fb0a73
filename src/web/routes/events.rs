use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{api_error, ApiError};
use crate::models::{EventRow, NewEvent, RecordId};
use crate::remote::http_backend::CreatedBody;
use crate::remote::{EventApi, SqliteBackend};

pub async fn list_events_handler(
    State(backend): State<SqliteBackend>,
) -> Result<Json<Vec<EventRow>>, ApiError> {
    backend.list_events().await.map(Json).map_err(api_error)
}

pub async fn create_event_handler(
    State(backend): State<SqliteBackend>,
    Json(body): Json<NewEvent>,
) -> Result<(StatusCode, Json<CreatedBody>), ApiError> {
    let id = backend.create_event(body).await.map_err(api_error)?;
    Ok((StatusCode::CREATED, Json(CreatedBody { id })))
}

pub async fn delete_event_handler(
    State(backend): State<SqliteBackend>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    backend
        .delete_event(&RecordId(id))
        .await
        .map_err(api_error)?;
    Ok(StatusCode::NO_CONTENT)
}
