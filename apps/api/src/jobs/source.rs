//! Job Source Adapter — fetches postings from the JSearch (RapidAPI) search
//! endpoint and maps its loosely-shaped payload into normalized `NewJob`
//! records. Failures are typed so callers can tell "upstream is down" apart
//! from "zero matches".

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::models::job::NewJob;

const JSEARCH_URL: &str = "https://jsearch.p.rapidapi.com/search";
const JSEARCH_HOST: &str = "jsearch.p.rapidapi.com";
// One page per search, no retries. On timeout the caller degrades the same
// way as for any other transport error.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum stored description length, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 5000;
pub const TRUNCATION_MARKER: &str = "...\n\n[Description truncated]";
pub const UNKNOWN_LOCATION: &str = "Unknown Location";
pub const NO_DESCRIPTION: &str = "No description available.";

/// The free-text search a user submitted.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub keyword: String,
    pub city: String,
    pub postal: String,
}

impl SearchQuery {
    /// Builds the single query string the upstream endpoint expects:
    /// `"{keyword} in {city} {postal}"`, skipping empty parts.
    pub fn to_query_string(&self) -> String {
        let mut query = self.keyword.clone();
        if !self.city.is_empty() {
            query.push_str(&format!(" in {}", self.city));
        }
        if !self.postal.is_empty() {
            query.push_str(&format!(" {}", self.postal));
        }
        query
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// A provider of job postings. Implemented by `JSearchSource` in production
/// and by in-memory fakes in pipeline tests.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn fetch(&self, query: &SearchQuery) -> Result<Vec<NewJob>, SourceError>;
}

#[derive(Debug, Deserialize)]
struct JSearchResponse {
    #[serde(default)]
    data: Vec<JSearchItem>,
}

/// One upstream item. Every field is optional — the payload shape is not
/// under our control.
#[derive(Debug, Default, Deserialize)]
struct JSearchItem {
    job_title: Option<String>,
    employer_name: Option<String>,
    job_city: Option<String>,
    job_country: Option<String>,
    job_description: Option<String>,
}

/// The production job source, backed by the JSearch API on RapidAPI.
pub struct JSearchSource {
    client: Client,
    api_key: String,
}

impl JSearchSource {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl JobSource for JSearchSource {
    async fn fetch(&self, query: &SearchQuery) -> Result<Vec<NewJob>, SourceError> {
        let query_string = query.to_query_string();
        info!("Fetching jobs for query '{query_string}' via JSearch");

        let response = self
            .client
            .get(JSEARCH_URL)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", JSEARCH_HOST)
            .query(&[
                ("query", query_string.as_str()),
                ("page", "1"),
                ("num_pages", "1"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SourceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let payload: JSearchResponse = response.json().await?;
        let jobs: Vec<NewJob> = payload.data.into_iter().filter_map(normalize).collect();

        info!("Found {} jobs", jobs.len());
        Ok(jobs)
    }
}

/// Maps one upstream item into a `NewJob`, or drops it when the title or
/// employer is missing.
fn normalize(item: JSearchItem) -> Option<NewJob> {
    let title = item.job_title.filter(|s| !s.trim().is_empty())?;
    let company = item.employer_name.filter(|s| !s.trim().is_empty())?;

    let location = item
        .job_city
        .filter(|s| !s.trim().is_empty())
        .or(item.job_country.filter(|s| !s.trim().is_empty()))
        .unwrap_or_else(|| UNKNOWN_LOCATION.to_string());

    let description = clean_description(item.job_description.as_deref().unwrap_or(""));

    Some(NewJob {
        title,
        company,
        location,
        description,
    })
}

/// Strips carriage returns and tabs, trims, substitutes a placeholder for an
/// empty result, and truncates very large descriptions at a character
/// boundary.
fn clean_description(raw: &str) -> String {
    let cleaned = raw.replace(['\r', '\t'], "");
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return NO_DESCRIPTION.to_string();
    }

    if cleaned.chars().count() > MAX_DESCRIPTION_CHARS {
        let truncated: String = cleaned.chars().take(MAX_DESCRIPTION_CHARS).collect();
        return format!("{truncated}{TRUNCATION_MARKER}");
    }

    cleaned.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: Option<&str>, company: Option<&str>) -> JSearchItem {
        JSearchItem {
            job_title: title.map(String::from),
            employer_name: company.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_query_string_full() {
        let query = SearchQuery {
            keyword: "developer".to_string(),
            city: "Toronto".to_string(),
            postal: "M5V".to_string(),
        };
        assert_eq!(query.to_query_string(), "developer in Toronto M5V");
    }

    #[test]
    fn test_query_string_keyword_only() {
        let query = SearchQuery {
            keyword: "developer".to_string(),
            city: String::new(),
            postal: String::new(),
        };
        assert_eq!(query.to_query_string(), "developer");
    }

    #[test]
    fn test_normalize_drops_item_without_company() {
        assert!(normalize(item(Some("Backend Engineer"), None)).is_none());
        assert!(normalize(item(Some("Backend Engineer"), Some("  "))).is_none());
    }

    #[test]
    fn test_normalize_drops_item_without_title() {
        assert!(normalize(item(None, Some("Acme"))).is_none());
    }

    #[test]
    fn test_normalize_location_fallbacks() {
        let mut it = item(Some("Backend Engineer"), Some("Acme"));
        it.job_city = Some("Toronto".to_string());
        it.job_country = Some("Canada".to_string());
        assert_eq!(normalize(it).unwrap().location, "Toronto");

        let mut it = item(Some("Backend Engineer"), Some("Acme"));
        it.job_country = Some("Canada".to_string());
        assert_eq!(normalize(it).unwrap().location, "Canada");

        let it = item(Some("Backend Engineer"), Some("Acme"));
        assert_eq!(normalize(it).unwrap().location, UNKNOWN_LOCATION);
    }

    #[test]
    fn test_clean_description_strips_and_trims() {
        assert_eq!(clean_description("  Build\rAPIs\there  "), "BuildAPIshere");
    }

    #[test]
    fn test_clean_description_empty_placeholder() {
        assert_eq!(clean_description(""), NO_DESCRIPTION);
        assert_eq!(clean_description("\r\t \r"), NO_DESCRIPTION);
    }

    #[test]
    fn test_clean_description_truncates_past_limit() {
        let long = "x".repeat(6000);
        let cleaned = clean_description(&long);
        assert_eq!(
            cleaned,
            format!("{}{}", "x".repeat(MAX_DESCRIPTION_CHARS), TRUNCATION_MARKER)
        );
    }

    #[test]
    fn test_clean_description_exact_limit_untouched() {
        let exact = "x".repeat(MAX_DESCRIPTION_CHARS);
        assert_eq!(clean_description(&exact), exact);
    }

    #[test]
    fn test_clean_description_truncates_on_char_boundary() {
        // Multi-byte input must not split a character.
        let long = "é".repeat(6000);
        let cleaned = clean_description(&long);
        assert!(cleaned.starts_with(&"é".repeat(MAX_DESCRIPTION_CHARS)));
        assert!(cleaned.ends_with(TRUNCATION_MARKER));
    }
}
