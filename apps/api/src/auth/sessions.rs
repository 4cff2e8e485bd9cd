//! In-memory session store, keyed by token, with idle-TTL eviction. Stale
//! sessions are pruned on every store access, so the map cannot grow without
//! bound across the process lifetime.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockWriteGuard};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::session::SavedJob;

#[derive(Debug)]
struct Session {
    username: String,
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
    last_seen: Instant,
    saved_jobs: Vec<SavedJob>,
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Creates a session for a freshly logged-in user and returns its token.
    pub fn create(&self, username: &str) -> Uuid {
        let token = Uuid::new_v4();
        let mut sessions = self.write();
        Self::prune(&mut sessions, self.ttl);
        sessions.insert(
            token,
            Session {
                username: username.to_string(),
                created_at: Utc::now(),
                last_seen: Instant::now(),
                saved_jobs: Vec::new(),
            },
        );
        token
    }

    /// Refreshes the session's idle clock and returns its username, or `None`
    /// when the token is unknown or expired.
    pub fn touch(&self, token: Uuid) -> Option<String> {
        let mut sessions = self.write();
        Self::prune(&mut sessions, self.ttl);
        let session = sessions.get_mut(&token)?;
        session.last_seen = Instant::now();
        Some(session.username.clone())
    }

    /// Removes a session eagerly (logout). Returns whether it existed.
    pub fn remove(&self, token: Uuid) -> bool {
        self.write().remove(&token).is_some()
    }

    /// Appends a saved job to the session. Returns false when the session is
    /// gone.
    pub fn save_job(&self, token: Uuid, job: SavedJob) -> bool {
        let mut sessions = self.write();
        Self::prune(&mut sessions, self.ttl);
        match sessions.get_mut(&token) {
            Some(session) => {
                session.saved_jobs.push(job);
                true
            }
            None => false,
        }
    }

    /// The session's saved jobs, oldest first.
    pub fn saved_jobs(&self, token: Uuid) -> Option<Vec<SavedJob>> {
        let mut sessions = self.write();
        Self::prune(&mut sessions, self.ttl);
        sessions.get(&token).map(|s| s.saved_jobs.clone())
    }

    fn prune(sessions: &mut HashMap<Uuid, Session>, ttl: Duration) {
        sessions.retain(|_, session| session.last_seen.elapsed() <= ttl);
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Uuid, Session>> {
        // A poisoned lock only means another thread panicked mid-write;
        // the map itself is still usable.
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}
