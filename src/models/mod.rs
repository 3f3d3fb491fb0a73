pub mod clubs;
pub mod events;
pub mod participants;
pub mod registrations;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use clubs::{ClubRow, NewClub};
pub use events::{EventRow, NewEvent};
pub use participants::{NewParticipant, ParticipantRow};
pub use registrations::{NewRegistration, RegistrationRow};

/// Opaque identifier assigned by the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
