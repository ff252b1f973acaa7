use thiserror::Error;

#[derive(Error, Debug)]
pub enum RandomUserError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API returned an error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Server returned an empty list of users")]
    EmptyResult,

    #[error("No cached user with uuid '{uuid}'")]
    UserNotFound { uuid: String },

    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    #[error("Store error: {message}")]
    StoreError { message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Storage,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RandomUserError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HttpError(_) | Self::ApiError { .. } => ErrorCategory::Network,
            Self::EmptyResult
            | Self::UserNotFound { .. }
            | Self::SerializationError(_)
            | Self::CsvError(_) => ErrorCategory::Data,
            Self::DatabaseError(_) | Self::StoreError { .. } => ErrorCategory::Storage,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    /// Medium means a retry may succeed.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyResult => ErrorSeverity::Medium,
            Self::HttpError(e) if e.is_timeout() || e.is_connect() => ErrorSeverity::Medium,
            Self::HttpError(_) => ErrorSeverity::High,
            Self::ApiError { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            Self::ApiError { .. } => ErrorSeverity::High,
            Self::UserNotFound { .. } | Self::SerializationError(_) | Self::CsvError(_) => {
                ErrorSeverity::High
            }
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorSeverity::High,
            Self::DatabaseError(_) | Self::StoreError { .. } | Self::IoError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::HttpError(_) => "Could not reach the random user service".to_string(),
            Self::ApiError { status, message } => {
                format!("The random user service rejected the request ({}): {}", status, message)
            }
            Self::EmptyResult => "The server returned no users for this selection".to_string(),
            Self::UserNotFound { uuid } => format!("No user with uuid {} in the local list", uuid),
            Self::DatabaseError(_) | Self::StoreError { .. } => {
                "The local user cache could not be accessed".to_string()
            }
            Self::SerializationError(_) => {
                "The server response could not be understood".to_string()
            }
            Self::CsvError(_) => "Failed to write CSV output".to_string(),
            Self::IoError(e) => format!("File system error: {}", e),
            Self::ConfigError { message } => format!("Invalid configuration: {}", message),
            Self::ConfigValidationError { field, message } => {
                format!("Invalid configuration for {}: {}", field, message)
            }
            Self::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid {}: {}", value, field, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        if let Self::UserNotFound { .. } = self {
            return "Run `randomuser list` to see the uuids of cached users";
        }
        match self.category() {
            ErrorCategory::Network => "Check your network connection and the API base URL, then try again",
            ErrorCategory::Data => "Try again, or choose a different gender/nationality combination",
            ErrorCategory::Storage => "Check the database path, or run with --no-cache",
            ErrorCategory::Configuration => "Run `randomuser options` to list accepted values and check your config file",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, RandomUserError>;
