use crate::domain::model::TransportResponse;
use crate::domain::ports::HttpTransport;
use crate::utils::error::{Result, SubmitterError};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// `HttpTransport` backed by a `reqwest::Client` with fixed timeouts.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(connect_timeout: Duration, request_timeout: Duration) -> Result<Self> {
        let builder = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout);
        Ok(Self {
            client: build_client(builder)?,
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT)
    }
}

// Client construction errors are reported on their own; request-level builder
// errors go through `From<reqwest::Error>`.
fn build_client(builder: ClientBuilder) -> Result<Client> {
    builder.build().map_err(|e| SubmitterError::HttpClientError {
        message: e.to_string(),
    })
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        bearer_token: Option<&str>,
        body: &serde_json::Value,
    ) -> Result<TransportResponse> {
        let mut request = self.client.post(url).json(body);
        if let Some(token) = bearer_token {
            request = request.bearer_auth(token);
        }

        tracing::debug!("📡 POST {}", url);
        let response = request.send().await?;
        let status = response.status().as_u16();
        tracing::debug!("📡 Response status from {}: {}", url, status);

        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}
