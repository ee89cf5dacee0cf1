use crate::domain::model::{IdentityRequest, WebhookGrant};
use crate::domain::ports::HttpTransport;
use crate::utils::error::{Result, SubmitterError};
use crate::utils::logger::mask_token;

/// Exchanges a candidate identity for a webhook grant.
pub struct WebhookClient<T: HttpTransport> {
    transport: T,
    endpoint: String,
}

impl<T: HttpTransport> WebhookClient<T> {
    pub fn new(transport: T, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Single unauthenticated POST. No retries.
    pub async fn generate(&self, identity: &IdentityRequest) -> Result<WebhookGrant> {
        identity.ensure_complete()?;

        tracing::info!("🔗 Requesting webhook for candidate: {}", identity.name);
        let body = serde_json::to_value(identity)?;
        tracing::debug!("Webhook request payload: {}", body);

        let response = self.transport.post_json(&self.endpoint, None, &body).await?;

        if !response.is_success() {
            tracing::error!(
                "❌ Webhook generation rejected with status {}: {}",
                response.status,
                response.body
            );
            return Err(SubmitterError::RemoteRejected {
                status: response.status,
                body: response.body,
            });
        }

        let grant: WebhookGrant =
            serde_json::from_str(&response.body).map_err(|e| SubmitterError::InvalidResponse {
                endpoint: self.endpoint.clone(),
                message: format!("unparseable body: {}", e),
            })?;

        if !grant.is_valid() {
            return Err(SubmitterError::InvalidResponse {
                endpoint: self.endpoint.clone(),
                message: "response is missing webhookUrl or accessToken".to_string(),
            });
        }

        tracing::info!("✅ Webhook URL received: {}", grant.webhook_url);
        tracing::debug!("Access token: {}", mask_token(&grant.access_token));
        Ok(grant)
    }
}
