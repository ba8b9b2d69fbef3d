use thiserror::Error;

#[derive(Error, Debug)]
pub enum StarwError {
    #[error("{message}")]
    NotFound { message: String },

    #[error("Upstream request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Upstream returned status {status} for {url}")]
    UpstreamStatus { url: String, status: u16 },

    #[error("API returned status {status}: {message}")]
    ApiStatus { status: u16, message: String },

    #[error("Upstream page {page} returned no body")]
    EmptyPage { page: u32 },

    #[error("Page limit of {limit} exceeded while walking {url}")]
    PageLimitExceeded { url: String, limit: u32 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    UpstreamUnavailable,
    Configuration,
    System,
}

impl StarwError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::ApiError(_)
            | Self::UpstreamStatus { .. }
            | Self::ApiStatus { .. }
            | Self::EmptyPage { .. }
            | Self::PageLimitExceeded { .. }
            | Self::SerializationError(_) => ErrorCategory::UpstreamUnavailable,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.category() == ErrorCategory::NotFound
    }
}

pub type Result<T> = std::result::Result<T, StarwError>;
