use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Remote read failed with status {status}: {description}")]
    RetrievalError { status: u16, description: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

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

    #[error("Unknown content domain: {label}")]
    UnknownDomainError { label: String },

    #[error("No {kind} with id '{id}'")]
    NotFoundError { kind: String, id: String },

    #[error("Unsupported language code: {code}")]
    UnsupportedLanguageError { code: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Storage,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SyncError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SyncError::ApiError(_) | SyncError::RetrievalError { .. } => ErrorCategory::Network,
            SyncError::CsvError(_)
            | SyncError::SerializationError(_)
            | SyncError::ProcessingError { .. } => ErrorCategory::Data,
            SyncError::IoError(_) => ErrorCategory::Storage,
            SyncError::ConfigValidationError { .. } | SyncError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            SyncError::UnknownDomainError { .. }
            | SyncError::NotFoundError { .. }
            | SyncError::UnsupportedLanguageError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration | ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    /// Whether retrying the same read later could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            SyncError::ApiError(e) => e.is_timeout() || e.is_connect(),
            SyncError::RetrievalError { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SyncError::ApiError(_) => {
                "Check network connectivity and the source.base_url setting".to_string()
            }
            SyncError::RetrievalError { status: 403, .. } => {
                "Check that source.api_key is valid and the spreadsheet is shared publicly"
                    .to_string()
            }
            SyncError::RetrievalError { status: 404, .. } => {
                "Check source.spreadsheet_id and the configured range names".to_string()
            }
            SyncError::RetrievalError { .. } => "Retry later; the remote service rejected the read".to_string(),
            SyncError::CsvError(_) | SyncError::SerializationError(_) => {
                "The response did not have the expected tabular shape".to_string()
            }
            SyncError::IoError(_) => {
                "Check that the preferences path is writable".to_string()
            }
            SyncError::ConfigValidationError { field, .. }
            | SyncError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in the configuration file", field)
            }
            SyncError::UnknownDomainError { .. } => {
                "Use one of: projects, skills, posts, all".to_string()
            }
            SyncError::NotFoundError { kind, .. } => {
                format!("Run `portfolio-sync fetch` to list the available {} ids", kind)
            }
            SyncError::UnsupportedLanguageError { .. } => "Use one of: en, vi".to_string(),
            SyncError::ProcessingError { .. } => "Re-run with --verbose for details".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not read portfolio content: {}", self),
            ErrorCategory::Data => format!("Portfolio content could not be processed: {}", self),
            ErrorCategory::Storage => format!("Local storage failed: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Input => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
