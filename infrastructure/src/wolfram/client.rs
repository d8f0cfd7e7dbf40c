//! HTTP client for the v2 query API

use super::protocol::decode_answer;
use async_trait::async_trait;
use podlens_application::{AnswerService, TransportError};
use podlens_domain::{Question, RawAnswer};
use std::time::Duration;
use tracing::{debug, info};

/// Default v2 query endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.wolframalpha.com/v2/query";

/// Connection settings for [`WolframAlphaClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WolframSettings {
    pub app_id: String,
    pub endpoint: String,
    /// Result formats to request, e.g. `plaintext`, `image`
    pub formats: Vec<String>,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl WolframSettings {
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            formats: vec!["plaintext".to_string()],
            timeout: Some(Duration::from_secs(30)),
            user_agent: concat!("podlens/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// [`AnswerService`] adapter for the Wolfram|Alpha v2 query API
pub struct WolframAlphaClient {
    http: reqwest::Client,
    settings: WolframSettings,
}

impl WolframAlphaClient {
    pub fn new(settings: WolframSettings) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder().user_agent(settings.user_agent.clone());
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            settings,
        })
    }

    pub fn settings(&self) -> &WolframSettings {
        &self.settings
    }

    /// Query-string parameters for one question.
    ///
    /// The question is passed through untouched, empty or not.
    pub fn request_params(&self, question: &Question) -> Vec<(&'static str, String)> {
        vec![
            ("appid", self.settings.app_id.clone()),
            ("input", question.content().to_string()),
            ("format", self.settings.formats.join(",")),
            ("output", "json".to_string()),
        ]
    }
}

#[async_trait]
impl AnswerService for WolframAlphaClient {
    async fn query(&self, question: &Question) -> Result<RawAnswer, TransportError> {
        debug!("GET {} input={:?}", self.settings.endpoint, question.content());

        let response = self
            .http
            .get(&self.settings.endpoint)
            .query(&self.request_params(question))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        info!("Answer service responded with HTTP {}", status.as_u16());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("Unknown").to_string()
            } else {
                body.trim().to_string()
            };
            return Err(TransportError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.map_err(transport_error)?;
        decode_answer(&body).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

fn transport_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_decode() || err.is_body() {
        TransportError::Decode(err.to_string())
    } else {
        TransportError::Connection(err.to_string())
    }
}
