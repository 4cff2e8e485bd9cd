//! Job Store — the SQLite-backed cache of every posting ever fetched.
//! Rows are insert-only: no updates, no deletes, no eviction. Uniqueness on
//! (title, company, location) is enforced by the table constraint, so
//! concurrent inserts need no application-level locking.

use sqlx::SqlitePool;
use tracing::debug;

use crate::models::job::{JobRow, NewJob};

#[derive(Clone)]
pub struct JobStore {
    pool: SqlitePool,
}

impl JobStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the jobs table if it does not exist. Safe to call repeatedly.
    pub async fn initialize(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS jobs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                company TEXT NOT NULL,
                location TEXT NOT NULL,
                description TEXT NOT NULL,
                UNIQUE(title, company, location)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Inserts each record whose (title, company, location) triple is not
    /// already present; duplicates are skipped silently, so the first write
    /// wins even when descriptions differ. Each insert is independently
    /// idempotent — no transaction spans the batch.
    /// Returns the number of rows actually inserted.
    pub async fn upsert(&self, records: &[NewJob]) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;

        for job in records {
            let result = sqlx::query(
                r#"
                INSERT OR IGNORE INTO jobs (title, company, location, description)
                VALUES (?, ?, ?, ?)
                "#,
            )
            .bind(&job.title)
            .bind(&job.company)
            .bind(&job.location)
            .bind(&job.description)
            .execute(&self.pool)
            .await?;

            inserted += result.rows_affected();
        }

        debug!("Upserted {} records ({} new)", records.len(), inserted);
        Ok(inserted)
    }

    /// Every stored job, most recently inserted first.
    pub async fn list_all(&self) -> Result<Vec<JobRow>, sqlx::Error> {
        sqlx::query_as::<_, JobRow>(
            "SELECT id, title, company, location, description FROM jobs ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Single row by id, for a job details view.
    pub async fn get(&self, id: i64) -> Result<Option<JobRow>, sqlx::Error> {
        sqlx::query_as::<_, JobRow>(
            "SELECT id, title, company, location, description FROM jobs WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_store() -> JobStore {
        // A single connection keeps the in-memory database alive and shared.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let store = JobStore::new(pool);
        store.initialize().await.unwrap();
        store
    }

    fn job(title: &str, company: &str, location: &str, description: &str) -> NewJob {
        NewJob {
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            description: description.to_string(),
        }
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let store = test_store().await;
        store.initialize().await.unwrap();
        store.initialize().await.unwrap();
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upsert_and_list() {
        let store = test_store().await;
        let inserted = store
            .upsert(&[job("Backend Engineer", "Acme", "Toronto", "Build APIs")])
            .await
            .unwrap();
        assert_eq!(inserted, 1);

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Backend Engineer");
        assert_eq!(all[0].company, "Acme");
        assert_eq!(all[0].location, "Toronto");
        assert_eq!(all[0].description, "Build APIs");
    }

    #[tokio::test]
    async fn test_duplicate_triple_keeps_first_description() {
        let store = test_store().await;
        store
            .upsert(&[job("Backend Engineer", "Acme", "Toronto", "first")])
            .await
            .unwrap();
        let inserted = store
            .upsert(&[job("Backend Engineer", "Acme", "Toronto", "second")])
            .await
            .unwrap();
        assert_eq!(inserted, 0);

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].description, "first");
    }

    #[tokio::test]
    async fn test_list_all_is_newest_first() {
        let store = test_store().await;
        store.upsert(&[job("A", "Acme", "Toronto", "-")]).await.unwrap();
        store.upsert(&[job("B", "Acme", "Toronto", "-")]).await.unwrap();
        store.upsert(&[job("C", "Acme", "Toronto", "-")]).await.unwrap();

        let titles: Vec<String> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|j| j.title)
            .collect();
        assert_eq!(titles, vec!["C", "B", "A"]);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let store = test_store().await;
        store
            .upsert(&[job("Backend Engineer", "Acme", "Toronto", "Build APIs")])
            .await
            .unwrap();
        let id = store.list_all().await.unwrap()[0].id;

        let found = store.get(id).await.unwrap().unwrap();
        assert_eq!(found.title, "Backend Engineer");
        assert!(store.get(id + 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_initialize_on_file_database() {
        // Re-opening an existing database file must be a no-op.
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("jobs.db").display());

        let pool = crate::db::create_pool(&url).await.unwrap();
        let store = JobStore::new(pool);
        store.initialize().await.unwrap();
        store
            .upsert(&[job("Backend Engineer", "Acme", "Toronto", "-")])
            .await
            .unwrap();

        let pool = crate::db::create_pool(&url).await.unwrap();
        let store = JobStore::new(pool);
        store.initialize().await.unwrap();
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }
}
