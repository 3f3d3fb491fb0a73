use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{api_error, ApiError};
use crate::models::{ClubRow, NewClub, RecordId};
use crate::remote::http_backend::CreatedBody;
use crate::remote::{ClubApi, SqliteBackend};

pub async fn list_clubs_handler(
    State(backend): State<SqliteBackend>,
) -> Result<Json<Vec<ClubRow>>, ApiError> {
    backend.list_clubs().await.map(Json).map_err(api_error)
}

pub async fn create_club_handler(
    State(backend): State<SqliteBackend>,
    Json(body): Json<NewClub>,
) -> Result<(StatusCode, Json<CreatedBody>), ApiError> {
    let id = backend.create_club(body).await.map_err(api_error)?;
    Ok((StatusCode::CREATED, Json(CreatedBody { id })))
}

pub async fn delete_club_handler(
    State(backend): State<SqliteBackend>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    backend
        .delete_club(&RecordId(id))
        .await
        .map_err(api_error)?;
    Ok(StatusCode::NO_CONTENT)
}
