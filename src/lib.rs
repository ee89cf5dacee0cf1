pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::http::ReqwestTransport;
pub use crate::config::{toml_config::TomlConfig, CliArgs};
pub use crate::core::{
    orchestrator::{Orchestrator, RejectionPolicy},
    solution::StaticSolution,
    submission::SubmissionClient,
    webhook::WebhookClient,
};
pub use crate::domain::model::{
    IdentityRequest, RunPhase, RunReport, SubmissionOutcome, SubmissionPayload, TerminalState,
    WebhookGrant,
};
pub use crate::domain::ports::{HttpTransport, SolutionProvider};
pub use crate::utils::error::{ErrorKind, Result, SubmitterError};
