use serde::{Deserialize, Serialize};

use super::RecordId;

// Club name and registered count are resolved by the store; either may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRow {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub club_id: Option<RecordId>,
    #[serde(default)]
    pub club_name: Option<String>,
    #[serde(default)]
    pub max_participants: Option<i64>,
    #[serde(default)]
    pub registered_participants: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub name: String,
    pub club_id: RecordId,
    pub max_participants: i64,
}
