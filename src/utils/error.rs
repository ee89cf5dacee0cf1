use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubmitterError {
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid response from {endpoint}: {message}")]
    InvalidResponse { endpoint: String, message: String },

    #[error("Remote endpoint rejected the request with status {status}")]
    RemoteRejected { status: u16, body: String },

    #[error("Endpoint unreachable: {message}")]
    Unreachable { message: String },

    #[error("HTTP client could not be built: {message}")]
    HttpClientError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

/// Coarse classification used in run reports and exit handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    InvalidResponse,
    RemoteRejected,
    Unreachable,
    /// Submission endpoint answered with a non-2xx status.
    Rejected,
    Configuration,
    Serialization,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::InvalidInput => "InvalidInput",
            ErrorKind::InvalidResponse => "InvalidResponse",
            ErrorKind::RemoteRejected => "RemoteRejected",
            ErrorKind::Unreachable => "Unreachable",
            ErrorKind::Rejected => "Rejected",
            ErrorKind::Configuration => "Configuration",
            ErrorKind::Serialization => "Serialization",
        };
        f.write_str(name)
    }
}

impl ErrorKind {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "Check the candidate name, registration number and email",
            ErrorKind::InvalidResponse => "Verify the webhook endpoint URL points at the generation API",
            ErrorKind::RemoteRejected => "Confirm the candidate details are accepted by the service",
            ErrorKind::Unreachable => "Check network connectivity or raise the HTTP timeouts",
            ErrorKind::Rejected => "The submission was declined; inspect the response body (sandboxes answer 401 to every submission)",
            ErrorKind::Configuration => "Fix the configuration file and run again",
            ErrorKind::Serialization => "Report this as a bug",
        }
    }
}

impl SubmitterError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        SubmitterError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SubmitterError::InvalidInput { .. } => ErrorKind::InvalidInput,
            SubmitterError::InvalidResponse { .. } => ErrorKind::InvalidResponse,
            SubmitterError::RemoteRejected { .. } => ErrorKind::RemoteRejected,
            SubmitterError::Unreachable { .. } => ErrorKind::Unreachable,
            SubmitterError::SerializationError(_) => ErrorKind::Serialization,
            SubmitterError::HttpClientError { .. }
            | SubmitterError::IoError(_)
            | SubmitterError::ConfigValidationError { .. }
            | SubmitterError::InvalidConfigValueError { .. }
            | SubmitterError::MissingConfigError { .. } => ErrorKind::Configuration,
        }
    }

    /// HTTP status attached to the failure, if the remote side answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            SubmitterError::RemoteRejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SubmitterError::InvalidInput { field, .. } => {
                format!("The value for '{}' is missing or malformed", field)
            }
            SubmitterError::InvalidResponse { .. } => {
                "The webhook service returned a response without a usable URL and token".to_string()
            }
            SubmitterError::RemoteRejected { status, .. } => {
                format!("The webhook service refused the request (HTTP {})", status)
            }
            SubmitterError::Unreachable { .. } => {
                "Could not reach the remote service before the timeout".to_string()
            }
            SubmitterError::HttpClientError { .. } => {
                "The HTTP client could not be initialised with the configured timeouts".to_string()
            }
            SubmitterError::IoError(e) => format!("File access failed: {}", e),
            SubmitterError::SerializationError(_) => {
                "Failed to encode the request body as JSON".to_string()
            }
            SubmitterError::ConfigValidationError { field, .. }
            | SubmitterError::InvalidConfigValueError { field, .. }
            | SubmitterError::MissingConfigError { field } => {
                format!("Configuration problem in '{}'", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        self.kind().recovery_suggestion()
    }
}

impl From<reqwest::Error> for SubmitterError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            let value = err.url().map(|u| u.to_string()).unwrap_or_default();
            return SubmitterError::InvalidInput {
                field: "url".to_string(),
                reason: format!("cannot build request for '{}': {}", value, err),
            };
        }

        let message = if err.is_timeout() {
            format!("request timed out: {}", err)
        } else if err.is_connect() {
            format!("connection failed: {}", err)
        } else {
            err.to_string()
        };
        SubmitterError::Unreachable { message }
    }
}

pub type Result<T> = std::result::Result<T, SubmitterError>;
