// src/services/langflow.rs
//! Outbound call to the Langflow flow that holds the real conversation
//! state. The relay keeps nothing; the session id is forwarded verbatim.

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::config::RelayConfig;
use crate::error::AppError;

/// The exact payload shape the flow expects.
#[derive(Serialize)]
struct FlowPayload<'a> {
    output_type: &'static str,
    input_type: &'static str,
    input_value: &'a str,
    session_id: &'a str,
}

#[derive(Clone, Debug)]
pub struct LangflowClient {
    http: Client,
    config: RelayConfig,
}

impl LangflowClient {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Forward one prompt to Langflow and return the extracted reply text.
    ///
    /// Missing configuration fails here, before any network I/O. No retries
    /// and no timeout beyond what reqwest defaults to.
    pub async fn send(&self, prompt: &str, session_id: &str) -> Result<String, AppError> {
        let url = self
            .config
            .langflow_url
            .as_deref()
            .ok_or(AppError::MissingConfig("LANGFLOW_API_URL"))?;
        let api_key = self
            .config
            .langflow_api_key
            .as_deref()
            .ok_or(AppError::MissingConfig("LANGFLOW_API_KEY"))?;

        let payload = FlowPayload {
            output_type: "text",
            input_type: "text",
            input_value: prompt,
            session_id,
        };

        let response = self
            .http
            .post(url)
            .header("x-api-key", api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, %body, "Langflow API error");
            return Err(AppError::UpstreamStatus(status.as_u16()));
        }

        let data: Value = response.json().await?;
        debug!(response = %data, "full Langflow response");

        extract_reply(&data).map(str::to_owned)
    }
}

/// Descend `outputs[0].outputs[0].results.text.text`. Anything other than a
/// string at that path is a structure error, never an empty reply.
pub fn extract_reply(data: &Value) -> Result<&str, AppError> {
    data.pointer("/outputs/0/outputs/0/results/text/text")
        .and_then(Value::as_str)
        .ok_or(AppError::UpstreamShape)
}
