use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job bookmarked by a logged-in user. Lives only inside the session store
/// and is evicted with the session — there is no persisted copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub saved_at: DateTime<Utc>,
}
