//! Shared application state

use crate::domain::ParoleViolation;
use crate::ParoleeDb;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;

/// Capacity of the violation channel; slow subscribers skip older violations
const VIOLATION_CHANNEL_CAPACITY: usize = 64;

/// State handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// The parolee store
    pub db: Arc<ParoleeDb>,

    /// Parole violations, published as movements are recorded
    pub violations: broadcast::Sender<ParoleViolation>,

    /// Base URI for `Location` and `Link` headers
    pub base_uri: Arc<str>,

    /// How long a violation subscription waits
    pub violation_timeout: Duration,
}

impl AppState {
    pub fn new(db: Arc<ParoleeDb>, base_uri: impl Into<Arc<str>>, violation_timeout: Duration) -> Self {
        let (violations, _) = broadcast::channel(VIOLATION_CHANNEL_CAPACITY);
        AppState {
            db,
            violations,
            base_uri: base_uri.into(),
            violation_timeout,
        }
    }

    /// URI of the parolee collection
    pub fn collection_uri(&self) -> String {
        format!("{}/services/parolees", self.base_uri)
    }

    /// URI of a single parolee
    pub fn parolee_uri(&self, id: u64) -> String {
        format!("{}/{}", self.collection_uri(), id)
    }
}
