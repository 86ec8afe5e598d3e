//! Submission of the form payload to the inference endpoint.
//!
//! `SubmissionGateway` serializes a payload, issues exactly one POST, and
//! maps the response into a `SubmissionResult`. HTTP itself sits behind the
//! `Transport` trait; `ReqwestTransport` is the real implementation and
//! works both natively and in the browser.

use crate::error::{Result, SubmitError};
use crate::payload::SubmissionPayload;
use crate::result::SubmissionResult;
use log::{info, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

/// Inference endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://scale-api.wamatamuriu.org/submit-user-data";

/// Status code and body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a JSON body to a URL with `POST`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse>;
}

/// `Transport` backed by a `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            // The body of a failed response is never shown
            return Ok(HttpResponse {
                status: status.as_u16(),
                body: String::new(),
            });
        }
        Ok(HttpResponse {
            status: status.as_u16(),
            body: response.text().await?,
        })
    }
}

/// Where submissions are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub endpoint: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

/// Posts payloads to the configured endpoint.
#[derive(Debug, Clone)]
pub struct SubmissionGateway<T = ReqwestTransport> {
    config: GatewayConfig,
    transport: T,
}

impl SubmissionGateway<ReqwestTransport> {
    /// Gateway using a fresh `reqwest::Client`.
    pub fn with_config(config: GatewayConfig) -> Self {
        Self::new(config, ReqwestTransport::default())
    }
}

impl<T: Transport> SubmissionGateway<T> {
    pub fn new(config: GatewayConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Submit one payload. No retry is attempted on failure.
    pub async fn submit(&self, payload: &SubmissionPayload) -> Result<SubmissionResult> {
        let body = payload.to_json()?;
        info!("Submitting form data to {}", self.config.endpoint);

        let response = match self.transport.post_json(&self.config.endpoint, body).await {
            Ok(r) => r,
            Err(e) => {
                warn!("Request to {} failed: {}", self.config.endpoint, e);
                return Err(e);
            }
        };

        if !response.is_success() {
            warn!(
                "Bad response status from {}: {}",
                self.config.endpoint, response.status
            );
            return Err(SubmitError::Status(response.status));
        }

        SubmissionResult::from_json_str(&response.body).map_err(|e| {
            warn!("Failed to parse response from {}: {}", self.config.endpoint, e);
            e
        })
    }
}
