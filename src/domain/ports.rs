use crate::domain::model::TransportResponse;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Outbound HTTP seam shared by the webhook and submission clients.
///
/// Implementations send one JSON POST and return the status and raw body for
/// any completed exchange, whatever the status code. Network failures and
/// timeouts surface as `SubmitterError::Unreachable`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_json(
        &self,
        url: &str,
        bearer_token: Option<&str>,
        body: &serde_json::Value,
    ) -> Result<TransportResponse>;
}

pub trait SolutionProvider: Send + Sync {
    fn query(&self) -> &str;

    fn explanation(&self) -> Option<&str> {
        None
    }
}
