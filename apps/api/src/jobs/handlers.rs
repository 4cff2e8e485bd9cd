//! Axum route handlers for the job search API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::jobs::pipeline::{self, SearchOutcome};
use crate::jobs::source::SearchQuery;
use crate::models::job::JobRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub keyword: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub jobs: Vec<JobRow>,
    pub fetched: usize,
    pub inserted: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JobsResponse {
    pub jobs: Vec<JobRow>,
}

/// POST /api/v1/jobs/search
///
/// Fetches postings for the query, persists the new ones, and returns the
/// store's full contents (the union of all historical searches).
pub async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    if request.keyword.trim().is_empty() {
        return Err(AppError::Validation("keyword cannot be empty".to_string()));
    }

    let query = SearchQuery {
        keyword: request.keyword.trim().to_string(),
        city: request.city.trim().to_string(),
        postal: request.postal.trim().to_string(),
    };

    let outcome = pipeline::search(&state.store, state.source.as_ref(), &query).await?;
    let message = outcome_message(&query, &outcome);

    Ok(Json(SearchResponse {
        jobs: outcome.jobs,
        fetched: outcome.fetched,
        inserted: outcome.inserted,
        message,
    }))
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<JobsResponse>, AppError> {
    let jobs = state.store.list_all().await?;
    Ok(Json(JobsResponse { jobs }))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<JobRow>, AppError> {
    let job = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    Ok(Json(job))
}

/// A user-facing note for searches that produced nothing new, distinguishing
/// an unavailable upstream from a legitimate zero-match search.
fn outcome_message(query: &SearchQuery, outcome: &SearchOutcome) -> Option<String> {
    if outcome.upstream_error.is_some() {
        return Some(
            "Job search is temporarily unavailable. Showing previously fetched jobs.".to_string(),
        );
    }
    if outcome.fetched == 0 {
        let location = format!("{} {}", query.city, query.postal);
        return Some(format!(
            "No jobs found for '{}' in '{}'. Try another search.",
            query.keyword,
            location.trim()
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> SearchQuery {
        SearchQuery {
            keyword: "developer".to_string(),
            city: "Toronto".to_string(),
            postal: String::new(),
        }
    }

    fn outcome(fetched: usize, upstream_error: Option<&str>) -> SearchOutcome {
        SearchOutcome {
            jobs: Vec::new(),
            fetched,
            inserted: 0,
            upstream_error: upstream_error.map(String::from),
        }
    }

    #[test]
    fn test_no_message_when_jobs_fetched() {
        assert!(outcome_message(&query(), &outcome(3, None)).is_none());
    }

    #[test]
    fn test_zero_matches_message_names_the_query() {
        let message = outcome_message(&query(), &outcome(0, None)).unwrap();
        assert_eq!(
            message,
            "No jobs found for 'developer' in 'Toronto'. Try another search."
        );
    }

    #[test]
    fn test_upstream_failure_message_wins() {
        let message = outcome_message(&query(), &outcome(0, Some("API error"))).unwrap();
        assert!(message.contains("temporarily unavailable"));
    }
}
