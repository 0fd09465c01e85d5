//! Registration endpoint client.
//!
//! One POST per submission, no retries. The response body decides the
//! outcome; the HTTP status is only logged, since the endpoint reports
//! business failures in the JSON body.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::RegistrationError;
use crate::form::{PaymentStatus, RegistrationDraft};

/// Outcome of a successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationResult {
    pub ticket_id: String,
    pub payment_status: PaymentStatus,
    /// Whether the server managed to send the confirmation email, if it said.
    pub email_sent: Option<bool>,
}

/// Something that can register a draft.
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// Submit a draft and wait for the server's verdict.
    async fn register(
        &self,
        draft: &RegistrationDraft,
    ) -> Result<RegistrationResult, RegistrationError>;

    /// Check that the endpoint is reachable.
    async fn health_check(&self) -> Result<(), RegistrationError>;
}

/// Response body of the registration endpoint.
#[derive(Debug, Deserialize)]
struct RegisterResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    ticket_id: Option<String>,
    /// A string for business errors, a list for request validation errors.
    #[serde(default)]
    detail: Option<serde_json::Value>,
    #[serde(default)]
    payment_status: Option<String>,
    #[serde(default)]
    email_sent: Option<bool>,
}

/// Turn a response body into a result.
///
/// `sent_status` is the payment status attached to the draft; the server's
/// own `payment_status` wins when it reports a known value.
pub fn parse_register_response(
    body: &str,
    sent_status: PaymentStatus,
) -> Result<RegistrationResult, RegistrationError> {
    let parsed: RegisterResponse = serde_json::from_str(body)
        .map_err(|e| RegistrationError::MalformedResponse(e.to_string()))?;

    if parsed.status.as_deref() != Some("success") {
        let detail = match parsed.detail {
            Some(serde_json::Value::String(s)) => Some(s),
            _ => None,
        };
        return Err(RegistrationError::Rejected { detail });
    }

    let ticket_id = parsed
        .ticket_id
        .filter(|id| !id.is_empty())
        .ok_or(RegistrationError::MissingTicketId)?;

    let payment_status = match parsed.payment_status.as_deref() {
        Some("paid") => PaymentStatus::Paid,
        Some("pending") => PaymentStatus::Pending,
        _ => sent_status,
    };

    Ok(RegistrationResult {
        ticket_id,
        payment_status,
        email_sent: parsed.email_sent,
    })
}

/// HTTP client for the registration endpoint.
pub struct HttpRegistrationClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpRegistrationClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// `health` resolved next to the registration path.
    fn health_url(&self) -> Result<reqwest::Url, RegistrationError> {
        reqwest::Url::parse(&self.endpoint)
            .and_then(|url| url.join("health"))
            .map_err(|e| RegistrationError::Transport(format!("invalid endpoint URL: {e}")))
    }
}

#[async_trait]
impl RegistrationApi for HttpRegistrationClient {
    async fn register(
        &self,
        draft: &RegistrationDraft,
    ) -> Result<RegistrationResult, RegistrationError> {
        let sent_status = draft.payment_status.unwrap_or(PaymentStatus::Pending);

        let resp = self
            .client
            .post(&self.endpoint)
            .json(draft)
            .send()
            .await
            .map_err(|e| RegistrationError::Transport(e.to_string()))?;

        let http_status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| RegistrationError::Transport(e.to_string()))?;

        if !http_status.is_success() {
            tracing::warn!(status = %http_status, "Registration endpoint returned non-success status");
        }

        parse_register_response(&body, sent_status)
    }

    async fn health_check(&self) -> Result<(), RegistrationError> {
        let url = self.health_url()?;
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RegistrationError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(RegistrationError::Transport(format!(
                "health check returned {}",
                resp.status()
            )));
        }
        Ok(())
    }
}
