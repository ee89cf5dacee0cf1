use crate::utils::error::{ErrorKind, Result, SubmitterError};
use crate::utils::logger::mask_token;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Candidate identity sent to the webhook generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRequest {
    pub name: String,
    #[serde(rename = "regNo")]
    pub registration_id: String,
    pub email: String,
}

impl IdentityRequest {
    pub fn new(
        name: impl Into<String>,
        registration_id: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            registration_id: registration_id.into(),
            email: email.into(),
        }
    }

    /// Fails on the first empty field, using its wire name.
    pub fn ensure_complete(&self) -> Result<()> {
        let fields = [
            ("name", &self.name),
            ("regNo", &self.registration_id),
            ("email", &self.email),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(SubmitterError::invalid_input(field, "must not be empty"));
            }
        }
        Ok(())
    }
}

/// URL and bearer token issued by the webhook endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WebhookGrantWire")]
pub struct WebhookGrant {
    #[serde(rename = "webhookUrl")]
    pub webhook_url: String,
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// Response body as sent by the service. Older deployments use `webhook`,
/// some send both keys; `webhookUrl` wins when it is non-blank.
#[derive(Deserialize)]
struct WebhookGrantWire {
    #[serde(rename = "webhookUrl")]
    webhook_url: Option<String>,
    webhook: Option<String>,
    #[serde(rename = "accessToken")]
    access_token: Option<String>,
}

impl From<WebhookGrantWire> for WebhookGrant {
    fn from(wire: WebhookGrantWire) -> Self {
        let webhook_url = wire
            .webhook_url
            .filter(|url| !url.trim().is_empty())
            .or(wire.webhook)
            .unwrap_or_default();
        Self {
            webhook_url,
            access_token: wire.access_token.unwrap_or_default(),
        }
    }
}

impl WebhookGrant {
    pub fn new(webhook_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            access_token: access_token.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.webhook_url.trim().is_empty() && !self.access_token.trim().is_empty()
    }
}

impl std::fmt::Debug for WebhookGrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookGrant")
            .field("webhook_url", &self.webhook_url)
            .field("access_token", &mask_token(&self.access_token))
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    #[serde(rename = "finalQuery")]
    query: String,
}

impl SubmissionPayload {
    pub fn new(query: impl Into<String>) -> Result<Self> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(SubmitterError::invalid_input(
                "finalQuery",
                "solution query must not be empty",
            ));
        }
        Ok(Self { query })
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted { status: u16 },
    /// The endpoint answered, but not with 2xx.
    Rejected { status: u16, body: String },
    /// The request never completed.
    Unreachable { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Start,
    WebhookPending,
    WebhookAcquired,
    Submitting,
    Succeeded,
    Warned,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalState {
    Succeeded,
    Warned {
        status: u16,
    },
    Failed {
        kind: ErrorKind,
        status: Option<u16>,
        message: String,
    },
}

impl TerminalState {
    pub fn failed(err: &SubmitterError) -> Self {
        TerminalState::Failed {
            kind: err.kind(),
            status: err.status(),
            message: err.to_string(),
        }
    }

    pub fn phase(&self) -> RunPhase {
        match self {
            TerminalState::Succeeded => RunPhase::Succeeded,
            TerminalState::Warned { .. } => RunPhase::Warned,
            TerminalState::Failed { .. } => RunPhase::Failed,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            TerminalState::Succeeded | TerminalState::Warned { .. } => 0,
            TerminalState::Failed { .. } => 1,
        }
    }
}

/// Record of a single run: the phases walked through and where it ended.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub phases: Vec<RunPhase>,
    pub terminal: TerminalState,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}
