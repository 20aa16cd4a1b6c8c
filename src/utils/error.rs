use thiserror::Error;

#[derive(Error, Debug)]
pub enum KitError {
    #[error("Invalid input parameters.")]
    InvalidInput,

    #[error("Invalid user ID.")]
    InvalidUserId { user_id: i64 },

    #[error("Connection failure: {status}")]
    ConnectionFailure { status: u16 },

    #[error("HTTP transport error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller input broke a precondition; nothing was sent anywhere.
    Validation,
    /// The remote side answered badly or could not be reached.
    Transport,
    Configuration,
    Internal,
}

impl KitError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            KitError::InvalidInput | KitError::InvalidUserId { .. } => ErrorCategory::Validation,
            KitError::ConnectionFailure { .. } | KitError::HttpError(_) => {
                ErrorCategory::Transport
            }
            KitError::ConfigError { .. } | KitError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            KitError::SerializationError(_) | KitError::IoError(_) => ErrorCategory::Internal,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Validation => 2,
            ErrorCategory::Transport => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, KitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_fixed() {
        assert_eq!(KitError::InvalidInput.to_string(), "Invalid input parameters.");
        assert_eq!(
            KitError::InvalidUserId { user_id: -5 }.to_string(),
            "Invalid user ID."
        );
        assert_eq!(
            KitError::ConnectionFailure { status: 500 }.to_string(),
            "Connection failure: 500"
        );
    }

    #[test]
    fn test_category_and_exit_code() {
        assert_eq!(KitError::InvalidInput.category(), ErrorCategory::Validation);
        assert_eq!(
            KitError::ConnectionFailure { status: 404 }.category(),
            ErrorCategory::Transport
        );
        let config = KitError::ConfigError {
            message: "missing".to_string(),
        };
        assert_eq!(config.category(), ErrorCategory::Configuration);
        assert_eq!(config.exit_code(), 4);
        assert_eq!(KitError::InvalidUserId { user_id: 0 }.exit_code(), 2);
    }
}
