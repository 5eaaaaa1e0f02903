use thiserror::Error;

#[derive(Error, Debug)]
pub enum OracleError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Generator returned HTTP {status}: {message}")]
    RemoteError { status: u16, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Unknown zodiac sign: {input}")]
    UnknownSign { input: String },

    #[error("Invalid narrative request: {message}")]
    InvalidRequest { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Input,
    Programming,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl OracleError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            OracleError::ApiError(_)
            | OracleError::RemoteError { .. }
            | OracleError::SerializationError(_) => ErrorCategory::Network,
            OracleError::ConfigError { .. }
            | OracleError::ConfigValidationError { .. }
            | OracleError::InvalidConfigValueError { .. }
            | OracleError::MissingConfigError { .. } => ErrorCategory::Configuration,
            OracleError::ValidationError { .. } => ErrorCategory::Input,
            OracleError::UnknownSign { .. } | OracleError::InvalidRequest { .. } => {
                ErrorCategory::Programming
            }
            OracleError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Input | ErrorCategory::Programming => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Whether the error is a caller defect rather than a runtime condition.
    pub fn is_programming_error(&self) -> bool {
        self.category() == ErrorCategory::Programming
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            OracleError::ApiError(_) | OracleError::RemoteError { .. } => {
                "Could not reach the text generation service".to_string()
            }
            OracleError::SerializationError(_) => {
                "The text generation service sent an unreadable response".to_string()
            }
            OracleError::UnknownSign { input } => format!("'{}' is not a zodiac sign", input),
            OracleError::ValidationError { message } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            OracleError::UnknownSign { .. } => {
                "Use one of the 12 sign names, e.g. aries, taurus, or an Arabic name such as الحمل"
            }
            OracleError::InvalidRequest { .. } => {
                "Compatibility takes exactly two signs; the other narratives take one"
            }
            other => match other.category() {
                ErrorCategory::Network => "Check your network connection and try again",
                ErrorCategory::Configuration => {
                    "Review the configuration file, environment variables and command-line flags"
                }
                ErrorCategory::Input => "Check the dates you entered (format YYYY-MM-DD)",
                ErrorCategory::Programming => "Report this as a bug",
                ErrorCategory::System => "Check file permissions and available disk space",
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, OracleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_follows_category() {
        let remote = OracleError::RemoteError {
            status: 503,
            message: "overloaded".to_string(),
        };
        assert_eq!(remote.category(), ErrorCategory::Network);
        assert_eq!(remote.severity(), ErrorSeverity::Medium);

        let unknown = OracleError::UnknownSign {
            input: "ophiuchus".to_string(),
        };
        assert!(unknown.is_programming_error());
        assert_eq!(unknown.severity(), ErrorSeverity::High);
        assert!(unknown.user_friendly_message().contains("ophiuchus"));
    }

    #[test]
    fn test_recovery_suggestion_matches_variant() {
        let unknown = OracleError::UnknownSign {
            input: "ophiuchus".to_string(),
        };
        assert!(unknown.recovery_suggestion().contains("sign names"));

        let mismatch = OracleError::InvalidRequest {
            message: "compatibility needs 2 signs, got 1".to_string(),
        };
        assert!(mismatch.is_programming_error());
        assert!(!mismatch.recovery_suggestion().contains("sign names"));
        assert!(mismatch.recovery_suggestion().contains("exactly two signs"));
    }

    #[test]
    fn test_every_error_is_at_least_medium() {
        let errors = [
            OracleError::RemoteError {
                status: 429,
                message: "quota".to_string(),
            },
            OracleError::ValidationError {
                message: "bad date".to_string(),
            },
            OracleError::MissingConfigError {
                field: "api_key".to_string(),
            },
        ];
        for err in errors {
            assert!(err.severity() >= ErrorSeverity::Medium);
        }
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = OracleError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
