//! Live holder of one "list all" query result.
//!
//! A cache keeps the last successful record list. A failed fetch records the
//! error and raises one notification but leaves the list untouched, so a
//! transient read failure never blanks the table.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::remote::RemoteResult;
use crate::services::notification::{Notification, Notifier, Severity};

#[async_trait]
pub trait ListQuery: Send + Sync + 'static {
    type Record: Clone + Send + Sync + 'static;

    async fn fetch_all(&self) -> RemoteResult<Vec<Self::Record>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheResult<T> {
    /// No fetch has completed yet.
    Pending,
    Data(Vec<T>),
    Error(String),
}

impl<T> CacheResult<T> {
    pub fn data(&self) -> Option<&[T]> {
        match self {
            CacheResult::Data(records) => Some(records),
            CacheResult::Pending | CacheResult::Error(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, CacheResult::Error(_))
    }
}

#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    /// Last successful list.
    pub records: Vec<T>,
    /// Set when the most recent fetch failed.
    pub error: Option<String>,
    /// Number of completed fetches, successful or not.
    pub revision: u64,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            error: None,
            revision: 0,
        }
    }
}

impl<T: Clone> Snapshot<T> {
    pub fn result(&self) -> CacheResult<T> {
        if let Some(err) = &self.error {
            return CacheResult::Error(err.clone());
        }
        if self.revision == 0 {
            return CacheResult::Pending;
        }
        CacheResult::Data(self.records.clone())
    }
}

pub struct ReadCache<Q: ListQuery> {
    query: Q,
    state: watch::Sender<Snapshot<Q::Record>>,
    notifier: Arc<dyn Notifier>,
    load_error: &'static str,
}

impl<Q: ListQuery> ReadCache<Q> {
    /// `load_error` is the generic text shown when a fetch fails.
    pub fn new(query: Q, notifier: Arc<dyn Notifier>, load_error: &'static str) -> Self {
        let (state, _) = watch::channel(Snapshot::default());
        Self {
            query,
            state,
            notifier,
            load_error,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot<Q::Record>> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> Snapshot<Q::Record> {
        self.state.borrow().clone()
    }

    pub fn current_result(&self) -> CacheResult<Q::Record> {
        self.state.borrow().result()
    }

    /// Last successful list, kept across failed fetches.
    pub fn records(&self) -> Vec<Q::Record> {
        self.state.borrow().records.clone()
    }

    /// Re-runs the query and resolves with the result it observed.
    ///
    /// Overlapping calls are allowed; whichever fetch completes last is what
    /// the cache ends up holding.
    pub async fn refresh(&self) -> CacheResult<Q::Record> {
        match self.query.fetch_all().await {
            Ok(records) => {
                debug!(count = records.len(), "read cache refreshed");
                self.state.send_modify(|snap| {
                    snap.records = records.clone();
                    snap.error = None;
                    snap.revision += 1;
                });
                CacheResult::Data(records)
            }
            Err(e) => {
                warn!(error = %e, "{}", self.load_error);
                let message = e.to_string();
                self.state.send_modify(|snap| {
                    snap.error = Some(message.clone());
                    snap.revision += 1;
                });
                self.notifier
                    .notify(Notification::new("Error", self.load_error, Severity::Error));
                CacheResult::Error(message)
            }
        }
    }
}
