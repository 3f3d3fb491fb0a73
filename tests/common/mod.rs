#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use club_admin::models::{
    ClubRow, EventRow, NewClub, NewEvent, NewParticipant, NewRegistration, ParticipantRow,
    RecordId, RegistrationRow,
};
use club_admin::remote::{ClubApi, EventApi, RegistrationApi, RemoteError, RemoteResult};
use club_admin::services::{Notification, RecordingNotifier, Severity};

#[derive(Debug, Clone)]
struct StoredEvent {
    id: RecordId,
    name: String,
    club_id: Option<RecordId>,
    max_participants: i64,
}

#[derive(Default)]
struct State {
    next_id: u64,
    clubs: Vec<ClubRow>,
    events: Vec<StoredEvent>,
    participants: Vec<ParticipantRow>,
    registrations: Vec<NewRegistrationStored>,
    failing: HashSet<&'static str>,
    failure_message: Option<String>,
    calls: Vec<&'static str>,
}

#[derive(Debug, Clone)]
struct NewRegistrationStored {
    id: RecordId,
    name: String,
    participant_id: RecordId,
    event_id: RecordId,
}

/// In-memory stand-in for the remote service, with per-call failure switches.
#[derive(Default)]
pub struct MemoryBackend {
    state: Mutex<State>,
}

impl MemoryBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Makes every later call named `op` fail; `message` is the server detail.
    pub fn fail(&self, op: &'static str, message: Option<&str>) {
        let mut state = self.state.lock().unwrap();
        state.failing.insert(op);
        state.failure_message = message.map(str::to_string);
    }

    pub fn recover(&self, op: &'static str) {
        self.state.lock().unwrap().failing.remove(op);
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Calls received so far, without the list queries.
    pub fn writes(&self) -> Vec<&'static str> {
        self.calls()
            .into_iter()
            .filter(|c| !c.starts_with("list_"))
            .collect()
    }

    pub fn stored_registrations(&self) -> Vec<(RecordId, RecordId)> {
        self.state
            .lock()
            .unwrap()
            .registrations
            .iter()
            .map(|r| (r.participant_id.clone(), r.event_id.clone()))
            .collect()
    }

    fn enter(&self, op: &'static str) -> Result<std::sync::MutexGuard<'_, State>, RemoteError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(op);
        if state.failing.contains(op) {
            return Err(RemoteError::Rejected {
                status: 500,
                message: state.failure_message.clone(),
            });
        }
        Ok(state)
    }
}

impl State {
    fn new_id(&mut self, prefix: &str) -> RecordId {
        self.next_id += 1;
        RecordId(format!("{}-{}", prefix, self.next_id))
    }
}

#[async_trait]
impl ClubApi for MemoryBackend {
    async fn list_clubs(&self) -> RemoteResult<Vec<ClubRow>> {
        Ok(self.enter("list_clubs")?.clubs.clone())
    }

    async fn create_club(&self, fields: NewClub) -> RemoteResult<RecordId> {
        let mut state = self.enter("create_club")?;
        let id = state.new_id("club");
        state.clubs.push(ClubRow {
            id: id.clone(),
            name: fields.name,
        });
        Ok(id)
    }

    async fn delete_club(&self, id: &RecordId) -> RemoteResult<()> {
        let mut state = self.enter("delete_club")?;
        let before = state.clubs.len();
        state.clubs.retain(|c| &c.id != id);
        if state.clubs.len() == before {
            return Err(RemoteError::NotFound(id.clone()));
        }
        Ok(())
    }
}

#[async_trait]
impl EventApi for MemoryBackend {
    async fn list_events(&self) -> RemoteResult<Vec<EventRow>> {
        let state = self.enter("list_events")?;
        let rows = state
            .events
            .iter()
            .map(|e| EventRow {
                id: e.id.clone(),
                name: e.name.clone(),
                club_id: e.club_id.clone(),
                club_name: state
                    .clubs
                    .iter()
                    .find(|c| Some(&c.id) == e.club_id.as_ref())
                    .map(|c| c.name.clone()),
                max_participants: Some(e.max_participants),
                registered_participants: None,
            })
            .collect();
        Ok(rows)
    }

    async fn create_event(&self, fields: NewEvent) -> RemoteResult<RecordId> {
        let mut state = self.enter("create_event")?;
        let id = state.new_id("event");
        state.events.push(StoredEvent {
            id: id.clone(),
            name: fields.name,
            club_id: Some(fields.club_id),
            max_participants: fields.max_participants,
        });
        Ok(id)
    }

    async fn delete_event(&self, id: &RecordId) -> RemoteResult<()> {
        let mut state = self.enter("delete_event")?;
        let before = state.events.len();
        state.events.retain(|e| &e.id != id);
        if state.events.len() == before {
            return Err(RemoteError::NotFound(id.clone()));
        }
        Ok(())
    }
}

#[async_trait]
impl RegistrationApi for MemoryBackend {
    async fn list_registrations(&self) -> RemoteResult<Vec<RegistrationRow>> {
        let state = self.enter("list_registrations")?;
        let rows = state
            .registrations
            .iter()
            .map(|r| {
                let participant = state.participants.iter().find(|p| p.id == r.participant_id);
                let event = state.events.iter().find(|e| e.id == r.event_id);
                RegistrationRow {
                    id: r.id.clone(),
                    name: r.name.clone(),
                    participant_id: r.participant_id.clone(),
                    event_id: r.event_id.clone(),
                    participant_name: participant.map(|p| p.name.clone()),
                    participant_email: participant.and_then(|p| p.email.clone()),
                    team_members_count: participant.and_then(|p| p.team_members_count),
                    event_name: event.map(|e| e.name.clone()),
                }
            })
            .collect();
        Ok(rows)
    }

    async fn list_participants(&self) -> RemoteResult<Vec<ParticipantRow>> {
        Ok(self.enter("list_participants")?.participants.clone())
    }

    async fn create_participant(&self, fields: NewParticipant) -> RemoteResult<RecordId> {
        let mut state = self.enter("create_participant")?;
        let id = state.new_id("participant");
        state.participants.push(ParticipantRow {
            id: id.clone(),
            name: fields.name,
            email: Some(fields.email).filter(|e| !e.is_empty()),
            team_members_count: Some(fields.team_members_count),
        });
        Ok(id)
    }

    async fn create_registration(&self, fields: NewRegistration) -> RemoteResult<RecordId> {
        let mut state = self.enter("create_registration")?;
        let id = state.new_id("registration");
        state.registrations.push(NewRegistrationStored {
            id: id.clone(),
            name: fields.name,
            participant_id: fields.participant_id,
            event_id: fields.event_id,
        });
        Ok(id)
    }

    async fn delete_registration(&self, id: &RecordId) -> RemoteResult<()> {
        let mut state = self.enter("delete_registration")?;
        let before = state.registrations.len();
        state.registrations.retain(|r| &r.id != id);
        if state.registrations.len() == before {
            return Err(RemoteError::NotFound(id.clone()));
        }
        Ok(())
    }
}

pub fn notifier() -> Arc<RecordingNotifier> {
    Arc::new(RecordingNotifier::new())
}

pub fn assert_single(notifier: &RecordingNotifier, title: &str, message: &str, severity: Severity) {
    let seen = notifier.take();
    assert_eq!(
        seen,
        vec![Notification::new(title, message, severity)],
        "unexpected notifications"
    );
}
