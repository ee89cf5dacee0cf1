use crate::adapters::http::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT};
use crate::core::orchestrator::RejectionPolicy;
use crate::domain::model::IdentityRequest;
use crate::utils::error::{Result, SubmitterError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const MAX_TIMEOUT_SECONDS: u64 = 300;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub candidate: CandidateConfig,
    pub webhook: WebhookConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub submission: SubmissionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateConfig {
    pub name: String,
    pub reg_no: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    pub generate_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub connect_timeout_seconds: u64,
    pub request_timeout_seconds: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_seconds: DEFAULT_CONNECT_TIMEOUT.as_secs(),
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT.as_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// Treat a non-2xx submission answer as a failure instead of a warning.
    #[serde(default)]
    pub strict: bool,
    pub query_file: Option<String>,
}

impl TomlConfig {
    /// Loads and parses a TOML file, substituting `${VAR}` references.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SubmitterError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SubmitterError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` references with environment values. Unset variables are left as-is
    /// and caught later by validation.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SubmitterError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        let candidate_fields = [
            ("candidate.name", &self.candidate.name),
            ("candidate.reg_no", &self.candidate.reg_no),
            ("candidate.email", &self.candidate.email),
        ];
        for (field, value) in candidate_fields {
            validation::validate_resolved(field, value)?;
            validation::validate_non_empty_string(field, value)?;
        }

        validation::validate_resolved("webhook.generate_url", &self.webhook.generate_url)?;
        validation::validate_url("webhook.generate_url", &self.webhook.generate_url)?;

        validation::validate_range(
            "http.connect_timeout_seconds",
            self.http.connect_timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;
        validation::validate_range(
            "http.request_timeout_seconds",
            self.http.request_timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;

        if let Some(path) = &self.submission.query_file {
            validation::validate_path("submission.query_file", path)?;
        }

        Ok(())
    }

    pub fn identity(&self) -> IdentityRequest {
        IdentityRequest::new(
            self.candidate.name.clone(),
            self.candidate.reg_no.clone(),
            self.candidate.email.clone(),
        )
    }

    pub fn webhook_endpoint(&self) -> &str {
        &self.webhook.generate_url
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.http.connect_timeout_seconds)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http.request_timeout_seconds)
    }

    pub fn rejection_policy(&self) -> RejectionPolicy {
        if self.submission.strict {
            RejectionPolicy::Strict
        } else {
            RejectionPolicy::Lenient
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
