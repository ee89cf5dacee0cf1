use crate::utils::error::{Result, SubmitterError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SubmitterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SubmitterError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SubmitterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SubmitterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SubmitterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SubmitterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Rejects values that still carry an unresolved `${VAR}` placeholder.
pub fn validate_resolved(field_name: &str, value: &str) -> Result<()> {
    if value.contains("${") {
        return Err(SubmitterError::MissingConfigError {
            field: format!("{} (unset environment variable in '{}')", field_name, value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SubmitterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("webhook.generate_url", "https://example.com").is_ok());
        assert!(validate_url("webhook.generate_url", "http://example.com").is_ok());
        assert!(validate_url("webhook.generate_url", "").is_err());
        assert!(validate_url("webhook.generate_url", "invalid-url").is_err());
        assert!(validate_url("webhook.generate_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("candidate.name", "A").is_ok());
        assert!(validate_non_empty_string("candidate.name", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("http.request_timeout_seconds", 30u64, 1, 300).is_ok());
        assert!(validate_range("http.request_timeout_seconds", 0u64, 1, 300).is_err());
        assert!(validate_range("http.request_timeout_seconds", 301u64, 1, 300).is_err());
    }

    #[test]
    fn test_validate_resolved() {
        assert!(validate_resolved("candidate.email", "a@b.c").is_ok());
        let err = validate_resolved("candidate.email", "${CANDIDATE_EMAIL}").unwrap_err();
        assert!(matches!(err, SubmitterError::MissingConfigError { .. }));
    }
}
