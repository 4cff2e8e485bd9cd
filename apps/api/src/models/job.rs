use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A normalized job posting produced by a job source, not yet persisted.
/// The adapter's copy is transient; the store owns the durable one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
}

/// A persisted job row. (title, company, location) is unique in the store;
/// rows are never updated or deleted once inserted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
}
