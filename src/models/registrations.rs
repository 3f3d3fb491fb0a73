use serde::{Deserialize, Serialize};

use super::RecordId;

/// Registration joined with its participant and event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct RegistrationRow {
    pub id: RecordId,
    pub name: String,
    pub participant_id: RecordId,
    pub event_id: RecordId,
    #[serde(default)]
    pub participant_name: Option<String>,
    #[serde(default)]
    pub participant_email: Option<String>,
    #[serde(default)]
    pub team_members_count: Option<i64>,
    #[serde(default)]
    pub event_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRegistration {
    pub name: String,
    pub participant_id: RecordId,
    pub event_id: RecordId,
}
