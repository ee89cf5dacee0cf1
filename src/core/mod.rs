pub mod orchestrator;
pub mod report;
pub mod solution;
pub mod submission;
pub mod webhook;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::model::{
    IdentityRequest, RunPhase, RunReport, SubmissionOutcome, SubmissionPayload, TerminalState,
    WebhookGrant,
};
pub use crate::domain::ports::{HttpTransport, SolutionProvider};
pub use crate::utils::error::Result;
