use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing — there are no fallback
/// literals for secrets (the JSearch and Anthropic keys fail closed).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rapidapi_key: String,
    pub anthropic_api_key: String,
    pub demo_username: String,
    pub demo_password: String,
    pub port: u16,
    pub session_ttl_minutes: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            rapidapi_key: require_env("RAPIDAPI_KEY")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            demo_username: require_env("DEMO_USERNAME")?,
            demo_password: require_env("DEMO_PASSWORD")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            session_ttl_minutes: std::env::var("SESSION_TTL_MINUTES")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .context("SESSION_TTL_MINUTES must be a number of minutes")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
