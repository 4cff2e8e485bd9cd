//! Ingestion Pipeline — fetch candidates from the job source, persist the new
//! ones, then read back the store's full contents. The returned set is the
//! union of every search ever run, not a view scoped to the current query.

use tracing::warn;

use crate::jobs::source::{JobSource, SearchQuery};
use crate::jobs::store::JobStore;
use crate::models::job::JobRow;

/// What one search produced. `jobs` is always the complete store, newest
/// first; `upstream_error` is set when the source failed and nothing could be
/// fetched, so callers can distinguish that from a genuine zero-match search.
#[derive(Debug)]
pub struct SearchOutcome {
    pub jobs: Vec<JobRow>,
    pub fetched: usize,
    pub inserted: u64,
    pub upstream_error: Option<String>,
}

/// Runs one search end to end. Source failures degrade to an empty fetch and
/// are recorded on the outcome; store failures propagate.
pub async fn search(
    store: &JobStore,
    source: &dyn JobSource,
    query: &SearchQuery,
) -> Result<SearchOutcome, sqlx::Error> {
    let (records, upstream_error) = match source.fetch(query).await {
        Ok(records) => (records, None),
        Err(e) => {
            warn!(
                "Job source failed for query '{}': {e}",
                query.to_query_string()
            );
            (Vec::new(), Some(e.to_string()))
        }
    };

    let fetched = records.len();
    let inserted = store.upsert(&records).await?;
    let jobs = store.list_all().await?;

    Ok(SearchOutcome {
        jobs,
        fetched,
        inserted,
        upstream_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sqlx::sqlite::SqlitePoolOptions;

    use crate::jobs::source::SourceError;
    use crate::models::job::NewJob;

    struct FixedSource(Vec<NewJob>);

    #[async_trait]
    impl JobSource for FixedSource {
        async fn fetch(&self, _query: &SearchQuery) -> Result<Vec<NewJob>, SourceError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl JobSource for FailingSource {
        async fn fetch(&self, _query: &SearchQuery) -> Result<Vec<NewJob>, SourceError> {
            Err(SourceError::Api {
                status: 503,
                message: "upstream down".to_string(),
            })
        }
    }

    async fn test_store() -> JobStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let store = JobStore::new(pool);
        store.initialize().await.unwrap();
        store
    }

    fn query(keyword: &str) -> SearchQuery {
        SearchQuery {
            keyword: keyword.to_string(),
            city: String::new(),
            postal: String::new(),
        }
    }

    fn job(title: &str) -> NewJob {
        NewJob {
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Toronto".to_string(),
            description: "Build APIs".to_string(),
        }
    }

    #[tokio::test]
    async fn test_search_persists_and_returns_store() {
        let store = test_store().await;
        let source = FixedSource(vec![job("Backend Engineer")]);

        let outcome = search(&store, &source, &query("developer")).await.unwrap();
        assert_eq!(outcome.fetched, 1);
        assert_eq!(outcome.inserted, 1);
        assert_eq!(outcome.jobs.len(), 1);
        assert!(outcome.upstream_error.is_none());
    }

    #[tokio::test]
    async fn test_repeated_search_is_idempotent() {
        let store = test_store().await;
        let source = FixedSource(vec![job("Backend Engineer")]);

        search(&store, &source, &query("developer")).await.unwrap();
        let second = search(&store, &source, &query("developer")).await.unwrap();

        assert_eq!(second.fetched, 1);
        assert_eq!(second.inserted, 0);
        assert_eq!(second.jobs.len(), 1);
    }

    #[tokio::test]
    async fn test_search_returns_union_of_history() {
        // A later unrelated search still surfaces earlier results.
        let store = test_store().await;

        let first = FixedSource(vec![job("Backend Engineer")]);
        search(&store, &first, &query("backend")).await.unwrap();

        let second = FixedSource(vec![job("Data Analyst")]);
        let outcome = search(&store, &second, &query("analyst")).await.unwrap();

        assert_eq!(outcome.jobs.len(), 2);
        assert_eq!(outcome.jobs[0].title, "Data Analyst");
        assert_eq!(outcome.jobs[1].title, "Backend Engineer");
    }

    #[tokio::test]
    async fn test_source_failure_degrades_to_history() {
        let store = test_store().await;

        let good = FixedSource(vec![job("Backend Engineer")]);
        search(&store, &good, &query("backend")).await.unwrap();

        let outcome = search(&store, &FailingSource, &query("backend"))
            .await
            .unwrap();
        assert_eq!(outcome.fetched, 0);
        assert_eq!(outcome.jobs.len(), 1);
        assert!(outcome.upstream_error.unwrap().contains("503"));
    }
}
