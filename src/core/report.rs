use crate::domain::model::{IdentityRequest, RunReport, TerminalState};
use crate::utils::error::ErrorKind;

const RULE: &str =
    "================================================================================";

pub fn log_run_header(identity: &IdentityRequest, endpoint: &str) {
    tracing::info!("{}", RULE);
    tracing::info!("🚀 ASSESSMENT SUBMISSION STARTED");
    tracing::info!("{}", RULE);
    tracing::info!("Candidate: {}", identity.name);
    tracing::info!("Registration Number: {}", identity.registration_id);
    tracing::info!("Email: {}", identity.email);
    tracing::info!("Webhook endpoint: {}", endpoint);
    tracing::info!("{}", RULE);
}

pub fn log_run_footer(report: &RunReport) {
    tracing::info!("{}", RULE);
    match &report.terminal {
        TerminalState::Succeeded => {
            tracing::info!("✅ ASSESSMENT COMPLETED SUCCESSFULLY");
            tracing::info!("Webhook URL generated, solution submitted and accepted");
        }
        TerminalState::Warned { status } => {
            tracing::warn!("⚠️ ASSESSMENT COMPLETED WITH WARNINGS");
            tracing::info!("Webhook URL generated and solution sent");
            tracing::warn!(
                "Submission endpoint answered {} (a sandbox answers 401 to every submission)",
                status
            );
            tracing::warn!("💡 Suggestion: {}", ErrorKind::Rejected.recovery_suggestion());
        }
        TerminalState::Failed {
            kind,
            status,
            message,
        } => {
            tracing::error!("❌ ASSESSMENT EXECUTION FAILED");
            match status {
                Some(code) => tracing::error!("Kind: {} (status {})", kind, code),
                None => tracing::error!("Kind: {}", kind),
            }
            tracing::error!("Cause: {}", message);
            tracing::error!("💡 Suggestion: {}", kind.recovery_suggestion());
        }
    }
    tracing::info!("Elapsed: {} ms", report.elapsed().num_milliseconds());
    tracing::info!("{}", RULE);
}

/// One-line summary printed to stdout when the process ends.
pub fn summary_line(terminal: &TerminalState) -> String {
    match terminal {
        TerminalState::Succeeded => "✅ Succeeded: solution accepted".to_string(),
        TerminalState::Warned { status } => {
            format!("⚠️ Warned: submission rejected with status {}", status)
        }
        TerminalState::Failed {
            kind,
            status: Some(code),
            message,
        } => format!(
            "❌ Failed ({}, status {}): {}\n💡 {}",
            kind,
            code,
            message,
            kind.recovery_suggestion()
        ),
        TerminalState::Failed {
            kind,
            status: None,
            message,
        } => format!(
            "❌ Failed ({}): {}\n💡 {}",
            kind,
            message,
            kind.recovery_suggestion()
        ),
    }
}
