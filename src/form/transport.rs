//! Remote form endpoint.

use super::state::Submission;
use super::validation::Field;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Web3Forms submit URL.
pub const DEFAULT_ENDPOINT: &str = "https://api.web3forms.com/submit";
/// Subject line sent with every message.
pub const DEFAULT_SUBJECT: &str = "New Contact Form Submission";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Body returned by the form endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubmitResponse {
    /// Whether the endpoint accepted the message.
    pub success: bool,
    /// Endpoint's explanation, shown on rejection.
    #[serde(default)]
    pub message: Option<String>,
}

impl SubmitResponse {
    /// Successful reply without a message.
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// Failed reply carrying the endpoint's message.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

/// The request never produced a usable response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request could not be built or sent.
    #[error("request failed: {0}")]
    Request(String),

    /// The reply body was not the expected JSON.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The submit worker has exited.
    #[error("submit worker is not running")]
    WorkerStopped,
}

/// Sends one submission and reports the endpoint's verdict.
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    /// Send one submission and return the endpoint's verdict.
    async fn submit(&self, submission: &Submission) -> Result<SubmitResponse, TransportError>;
}

/// Where and how submissions are posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormEndpoint {
    /// Submit URL.
    pub url: String,
    /// Key identifying the form owner to the endpoint.
    pub access_key: String,
    /// Subject line of the delivered email.
    pub subject: String,
}

impl Default for FormEndpoint {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.to_string(),
            access_key: String::new(),
            subject: DEFAULT_SUBJECT.to_string(),
        }
    }
}

/// Multipart POST to a Web3Forms-compatible endpoint.
#[derive(Debug, Clone)]
pub struct Web3FormsTransport {
    http: reqwest::Client,
    endpoint: FormEndpoint,
}

impl Web3FormsTransport {
    /// Build the HTTP client with the request timeout applied.
    pub fn new(endpoint: FormEndpoint) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(Self { http, endpoint })
    }

    /// Key/value pairs of the multipart body, in send order.
    pub fn multipart_fields(&self, submission: &Submission) -> Vec<(&'static str, String)> {
        let mut fields: Vec<(&'static str, String)> = Field::ALL
            .iter()
            .map(|&field| (field.key(), submission.value(field).to_string()))
            .collect();
        fields.push(("access_key", self.endpoint.access_key.clone()));
        fields.push(("subject", self.endpoint.subject.clone()));
        fields
    }
}

#[async_trait]
impl SubmitTransport for Web3FormsTransport {
    async fn submit(&self, submission: &Submission) -> Result<SubmitResponse, TransportError> {
        let form = self
            .multipart_fields(submission)
            .into_iter()
            .fold(reqwest::multipart::Form::new(), |form, (key, value)| {
                form.text(key, value)
            });

        let response = self
            .http
            .post(&self.endpoint.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        debug!(%status, "form endpoint responded");

        let mut body: SubmitResponse = response
            .json()
            .await
            .map_err(|e| TransportError::InvalidResponse(e.to_string()))?;
        if !status.is_success() {
            body.success = false;
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> Submission {
        Submission {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello from the engine".to_string(),
        }
    }

    #[test]
    fn multipart_fields_carry_values_and_credentials() {
        let transport = Web3FormsTransport::new(FormEndpoint {
            access_key: "key-123".to_string(),
            ..FormEndpoint::default()
        })
        .unwrap();

        let fields = transport.multipart_fields(&submission());

        assert_eq!(
            fields,
            vec![
                ("name", "Ada Lovelace".to_string()),
                ("email", "ada@example.com".to_string()),
                ("message", "Hello from the engine".to_string()),
                ("access_key", "key-123".to_string()),
                ("subject", DEFAULT_SUBJECT.to_string()),
            ]
        );
    }

    #[test]
    fn response_message_is_optional() {
        let ok: SubmitResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(ok, SubmitResponse::accepted());

        let rejected: SubmitResponse =
            serde_json::from_str(r#"{"success": false, "message": "Invalid access key"}"#).unwrap();
        assert_eq!(rejected, SubmitResponse::rejected("Invalid access key"));
    }

    #[test]
    fn default_endpoint() {
        let endpoint = FormEndpoint::default();
        assert_eq!(endpoint.url, "https://api.web3forms.com/submit");
        assert!(endpoint.access_key.is_empty());
    }
}
