use crate::core::submission::SubmissionClient;
use crate::core::webhook::WebhookClient;
use crate::domain::model::{
    IdentityRequest, RunPhase, RunReport, SubmissionOutcome, SubmissionPayload, TerminalState,
};
use crate::domain::ports::{HttpTransport, SolutionProvider};
use crate::utils::error::{ErrorKind, SubmitterError};
use chrono::{DateTime, Utc};

/// How a submission answered with a non-2xx status ends the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RejectionPolicy {
    /// Rejection ends in `Warned`. Sandboxes answer 401 to every submission.
    #[default]
    Lenient,
    /// Rejection ends in `Failed`.
    Strict,
}

/// Drives webhook acquisition followed by the authenticated submission.
pub struct Orchestrator<T: HttpTransport, P: SolutionProvider> {
    webhook: WebhookClient<T>,
    submission: SubmissionClient<T>,
    solution: P,
    policy: RejectionPolicy,
}

impl<T: HttpTransport + Clone, P: SolutionProvider> Orchestrator<T, P> {
    pub fn new(transport: T, webhook_endpoint: impl Into<String>, solution: P) -> Self {
        Self::from_parts(
            WebhookClient::new(transport.clone(), webhook_endpoint),
            SubmissionClient::new(transport),
            solution,
        )
    }
}

impl<T: HttpTransport, P: SolutionProvider> Orchestrator<T, P> {
    pub fn from_parts(
        webhook: WebhookClient<T>,
        submission: SubmissionClient<T>,
        solution: P,
    ) -> Self {
        Self {
            webhook,
            submission,
            solution,
            policy: RejectionPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RejectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn webhook_endpoint(&self) -> &str {
        self.webhook.endpoint()
    }

    /// Runs the flow once. Every error is folded into the terminal state.
    pub async fn run(&self, identity: &IdentityRequest) -> RunReport {
        let mut run = RunTracker::start();

        // Step 1: exchange the identity for a webhook grant
        run.advance(RunPhase::WebhookPending);
        let grant = match self.webhook.generate(identity).await {
            Ok(grant) => grant,
            Err(e) => return run.fail(&e),
        };
        run.advance(RunPhase::WebhookAcquired);

        // Step 2: wrap the solution text
        let payload = match SubmissionPayload::new(self.solution.query()) {
            Ok(payload) => payload,
            Err(e) => return run.fail(&e),
        };
        if let Some(explanation) = self.solution.explanation() {
            tracing::debug!("Solution approach: {}", explanation);
        }

        // Step 3: submit with the granted token
        run.advance(RunPhase::Submitting);
        match self.submission.submit(&grant, &payload).await {
            Ok(outcome) => {
                let terminal = self.classify(outcome);
                run.finish(terminal)
            }
            Err(e) => run.fail(&e),
        }
    }

    fn classify(&self, outcome: SubmissionOutcome) -> TerminalState {
        match outcome {
            SubmissionOutcome::Accepted { .. } => TerminalState::Succeeded,
            SubmissionOutcome::Rejected { status, body } => match self.policy {
                RejectionPolicy::Lenient => TerminalState::Warned { status },
                RejectionPolicy::Strict => TerminalState::Failed {
                    kind: ErrorKind::Rejected,
                    status: Some(status),
                    message: format!("submission rejected with status {}: {}", status, body),
                },
            },
            SubmissionOutcome::Unreachable { message } => {
                TerminalState::failed(&SubmitterError::Unreachable { message })
            }
        }
    }
}

struct RunTracker {
    phases: Vec<RunPhase>,
    started_at: DateTime<Utc>,
}

impl RunTracker {
    fn start() -> Self {
        tracing::debug!("Run phase: {:?}", RunPhase::Start);
        Self {
            phases: vec![RunPhase::Start],
            started_at: Utc::now(),
        }
    }

    fn advance(&mut self, phase: RunPhase) {
        tracing::info!("➡️ {:?}", phase);
        self.phases.push(phase);
    }

    fn fail(self, err: &SubmitterError) -> RunReport {
        tracing::error!("❌ {}", err.user_friendly_message());
        tracing::error!("💡 Suggestion: {}", err.recovery_suggestion());
        self.finish(TerminalState::failed(err))
    }

    fn finish(mut self, terminal: TerminalState) -> RunReport {
        match &terminal {
            TerminalState::Succeeded => tracing::info!("🏁 Run finished: Succeeded"),
            TerminalState::Warned { status } => {
                tracing::warn!("🏁 Run finished: Warned (status {})", status)
            }
            TerminalState::Failed { kind, message, .. } => {
                tracing::error!("🏁 Run finished: Failed ({}): {}", kind, message)
            }
        }
        self.phases.push(terminal.phase());
        RunReport {
            phases: self.phases,
            terminal,
            started_at: self.started_at,
            finished_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::solution::StaticSolution;
    use crate::core::test_support::{FakeReply, FakeTransport};
    use serde_json::json;

    const ENDPOINT: &str = "https://hiring.example.com/generateWebhook";

    fn identity() -> IdentityRequest {
        IdentityRequest::new("A", "1", "a@b.c")
    }

    fn grant_reply() -> FakeReply {
        FakeTransport::json(200, json!({"webhookUrl": "https://ep/sub", "accessToken": "tok"}))
    }

    fn orchestrator(transport: &FakeTransport) -> Orchestrator<FakeTransport, StaticSolution> {
        Orchestrator::new(transport.clone(), ENDPOINT, StaticSolution::new("SELECT 1;"))
    }

    #[test]
    fn test_webhook_endpoint_comes_from_client() {
        let transport = FakeTransport::new(vec![]);
        assert_eq!(orchestrator(&transport).webhook_endpoint(), ENDPOINT);
    }

    #[tokio::test]
    async fn test_accepted_submission_succeeds() {
        let transport =
            FakeTransport::new(vec![grant_reply(), FakeReply::Status(200, "ok".to_string())]);

        let report = orchestrator(&transport).run(&identity()).await;

        assert_eq!(report.terminal, TerminalState::Succeeded);
        assert_eq!(
            report.phases,
            vec![
                RunPhase::Start,
                RunPhase::WebhookPending,
                RunPhase::WebhookAcquired,
                RunPhase::Submitting,
                RunPhase::Succeeded,
            ]
        );
        assert!(report.finished_at >= report.started_at);
    }

    #[tokio::test]
    async fn test_unauthorized_submission_warns() {
        let transport = FakeTransport::new(vec![
            grant_reply(),
            FakeReply::Status(401, "Unauthorized".to_string()),
        ]);

        let report = orchestrator(&transport).run(&identity()).await;

        assert_eq!(report.terminal, TerminalState::Warned { status: 401 });
        assert_eq!(report.terminal.exit_code(), 0);
    }

    #[tokio::test]
    async fn test_strict_policy_fails_on_rejection() {
        let transport = FakeTransport::new(vec![
            grant_reply(),
            FakeReply::Status(401, "Unauthorized".to_string()),
        ]);

        let report = orchestrator(&transport)
            .with_policy(RejectionPolicy::Strict)
            .run(&identity())
            .await;

        match report.terminal {
            TerminalState::Failed { kind, status, .. } => {
                assert_eq!(kind, ErrorKind::Rejected);
                assert_eq!(status, Some(401));
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_submission_fails() {
        let transport = FakeTransport::new(vec![grant_reply(), FakeReply::Unreachable]);

        let report = orchestrator(&transport).run(&identity()).await;

        assert!(matches!(
            report.terminal,
            TerminalState::Failed {
                kind: ErrorKind::Unreachable,
                ..
            }
        ));
        assert_eq!(report.phases.last(), Some(&RunPhase::Failed));
    }

    #[tokio::test]
    async fn test_webhook_failure_skips_submission() {
        let transport = FakeTransport::new(vec![FakeReply::Status(500, "down".to_string())]);

        let report = orchestrator(&transport).run(&identity()).await;

        assert_eq!(transport.call_count(), 1);
        assert_eq!(
            report.phases,
            vec![RunPhase::Start, RunPhase::WebhookPending, RunPhase::Failed]
        );
        match report.terminal {
            TerminalState::Failed { kind, status, .. } => {
                assert_eq!(kind, ErrorKind::RemoteRejected);
                assert_eq!(status, Some(500));
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_identity_fails_without_calls() {
        let transport = FakeTransport::new(vec![]);

        let report = orchestrator(&transport)
            .run(&IdentityRequest::new("A", "1", ""))
            .await;

        assert_eq!(transport.call_count(), 0);
        assert!(matches!(
            report.terminal,
            TerminalState::Failed {
                kind: ErrorKind::InvalidInput,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_empty_solution_fails_before_submitting() {
        let transport = FakeTransport::new(vec![grant_reply()]);
        let orchestrator = Orchestrator::new(transport.clone(), ENDPOINT, StaticSolution::new(""));

        let report = orchestrator.run(&identity()).await;

        assert_eq!(transport.call_count(), 1);
        assert_eq!(
            report.phases,
            vec![
                RunPhase::Start,
                RunPhase::WebhookPending,
                RunPhase::WebhookAcquired,
                RunPhase::Failed,
            ]
        );
    }

    #[tokio::test]
    async fn test_submission_request_matches_grant() {
        let transport =
            FakeTransport::new(vec![grant_reply(), FakeReply::Status(200, "ok".to_string())]);

        let report = orchestrator(&transport).run(&identity()).await;

        assert_eq!(report.terminal, TerminalState::Succeeded);
        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].url, "https://ep/sub");
        assert_eq!(requests[1].bearer_token.as_deref(), Some("tok"));
        assert_eq!(requests[1].body, json!({"finalQuery": "SELECT 1;"}));
    }
}
