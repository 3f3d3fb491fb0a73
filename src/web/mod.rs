pub mod routes;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::remote::SqliteBackend;
use routes::{clubs, events, registrations};

/// REST surface answering the calls made by `HttpBackend`.
pub fn router(backend: SqliteBackend) -> Router {
    Router::new()
        .route(
            "/api/clubs",
            get(clubs::list_clubs_handler).post(clubs::create_club_handler),
        )
        .route("/api/clubs/:id", delete(clubs::delete_club_handler))
        .route(
            "/api/events",
            get(events::list_events_handler).post(events::create_event_handler),
        )
        .route("/api/events/:id", delete(events::delete_event_handler))
        .route(
            "/api/participants",
            get(registrations::list_participants_handler)
                .post(registrations::create_participant_handler),
        )
        .route(
            "/api/registrations",
            get(registrations::list_registrations_handler)
                .post(registrations::create_registration_handler),
        )
        .route(
            "/api/registrations/:id",
            delete(registrations::delete_registration_handler),
        )
        .with_state(backend)
}
