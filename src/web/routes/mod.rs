pub mod clubs;
pub mod events;
pub mod registrations;

use axum::{http::StatusCode, Json};
use serde_json::Value;
use tracing::warn;

use crate::remote::RemoteError;

pub type ApiError = (StatusCode, Json<Value>);

pub fn api_error(err: RemoteError) -> ApiError {
    let status = match &err {
        RemoteError::NotFound(_) => StatusCode::NOT_FOUND,
        RemoteError::Rejected { status, .. } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        RemoteError::Storage(sqlx::Error::Database(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        RemoteError::Transport(_) | RemoteError::Decode(_) | RemoteError::Storage(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    warn!(status = %status, error = %err, "api call failed");
    let message = err
        .server_message()
        .map(str::to_string)
        .unwrap_or_else(|| err.to_string());
    (status, Json(serde_json::json!({ "message": message })))
}
