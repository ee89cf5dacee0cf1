use crate::domain::model::{SubmissionOutcome, SubmissionPayload, WebhookGrant};
use crate::domain::ports::HttpTransport;
use crate::utils::error::{Result, SubmitterError};
use crate::utils::logger::mask_token;

/// Posts the solution to a granted webhook URL.
pub struct SubmissionClient<T: HttpTransport> {
    transport: T,
}

impl<T: HttpTransport> SubmissionClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// A non-2xx answer is an outcome, not an error. Errors are reserved for
    /// requests that could not be issued at all.
    pub async fn submit(
        &self,
        grant: &WebhookGrant,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionOutcome> {
        if !grant.is_valid() {
            return Err(SubmitterError::invalid_input(
                "grant",
                "webhook URL and access token are required",
            ));
        }

        tracing::info!("📤 Submitting solution to: {}", grant.webhook_url);
        tracing::debug!("Authorization: Bearer {}", mask_token(&grant.access_token));
        tracing::debug!("Query being submitted: {}", payload.query().trim());

        let body = serde_json::to_value(payload)?;
        let result = self
            .transport
            .post_json(&grant.webhook_url, Some(&grant.access_token), &body)
            .await;

        let outcome = match result {
            Ok(response) if response.is_success() => {
                tracing::info!("✅ Solution accepted with status {}", response.status);
                tracing::debug!("Response body: {}", response.body);
                SubmissionOutcome::Accepted {
                    status: response.status,
                }
            }
            Ok(response) => {
                tracing::warn!(
                    "⚠️ Solution rejected with status {}: {}",
                    response.status,
                    response.body
                );
                SubmissionOutcome::Rejected {
                    status: response.status,
                    body: response.body,
                }
            }
            Err(SubmitterError::Unreachable { message }) => {
                tracing::error!("❌ Submission endpoint unreachable: {}", message);
                SubmissionOutcome::Unreachable { message }
            }
            Err(e) => return Err(e),
        };

        Ok(outcome)
    }
}
