// src/config.rs
//! Relay configuration, loaded once at startup from the environment.

/// Where to reach the Langflow flow and how to authenticate against it.
///
/// Both values are optional here on purpose: a missing variable becomes a
/// per-request error inside the relay call rather than a startup panic, so
/// the rest of the app (static pages, health check) keeps working.
#[derive(Clone, Debug, Default)]
pub struct RelayConfig {
    pub langflow_url: Option<String>,
    pub langflow_api_key: Option<String>,
}

impl RelayConfig {
    pub fn from_env() -> Self {
        Self {
            langflow_url: std::env::var("LANGFLOW_API_URL").ok(),
            langflow_api_key: std::env::var("LANGFLOW_API_KEY").ok(),
        }
    }
}
