use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const TOKEN_PREVIEW_CHARS: usize = 10;

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("assessment_submitter=debug,info")
        } else {
            EnvFilter::new("assessment_submitter=info")
        }
    })
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// JSON lines output for log collectors.
pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

/// Short preview of a bearer token that is safe to put in logs.
pub fn mask_token(token: &str) -> String {
    let preview: String = token.chars().take(TOKEN_PREVIEW_CHARS).collect();
    format!("{}... ({} chars)", preview, token.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_token_truncates() {
        let masked = mask_token("eyJhbGciOiJIUzI1NiJ9.payload.sig");
        assert!(masked.starts_with("eyJhbGciOi..."));
        assert!(!masked.contains("payload"));
        assert!(masked.ends_with("(32 chars)"));
    }

    #[test]
    fn test_mask_short_token() {
        assert_eq!(mask_token("abc"), "abc... (3 chars)");
    }
}
