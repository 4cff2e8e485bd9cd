use std::sync::Arc;

use crate::auth::sessions::SessionStore;
use crate::config::Config;
use crate::jobs::source::JobSource;
use crate::jobs::store::JobStore;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: JobStore,
    /// Pluggable job source. Production wires `JSearchSource`; pipeline tests
    /// substitute in-memory fakes.
    pub source: Arc<dyn JobSource>,
    pub llm: LlmClient,
    pub sessions: SessionStore,
    pub config: Config,
}
