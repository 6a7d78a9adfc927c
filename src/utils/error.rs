use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("HTTP request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("HTTP request to {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Storage,
    Data,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::ApiError(_) | EtlError::HttpStatus { .. } => ErrorCategory::Network,
            EtlError::ConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            EtlError::IoError(_) => ErrorCategory::Storage,
            EtlError::CsvError(_)
            | EtlError::SerializationError(_)
            | EtlError::ProcessingError { .. } => ErrorCategory::Data,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not fetch the catalog page: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Storage => format!("Could not write output files: {}", self),
            ErrorCategory::Data => format!("Could not process scraped data: {}", self),
        }
    }

    /// Storage failures end the run without crashing the process.
    pub fn is_fatal(&self) -> bool {
        self.category() != ErrorCategory::Storage
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check network connectivity and that the catalog URL is reachable",
            ErrorCategory::Configuration => "Review the command line flags or the TOML config file",
            ErrorCategory::Storage => "Make sure the output directory exists and is writable",
            ErrorCategory::Data => "Run with --verbose to see which items failed to serialize",
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let err = EtlError::HttpStatus {
            url: "http://example.com".to_string(),
            status: 503,
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert!(err.to_string().contains("503"));

        let err = EtlError::ConfigError {
            message: "bad selector".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);

        let err = EtlError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.category(), ErrorCategory::Storage);
        assert!(err.user_friendly_message().starts_with("Could not write"));
    }

    #[test]
    fn test_only_storage_errors_are_non_fatal() {
        let write_failure = EtlError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only file system",
        ));
        assert!(!write_failure.is_fatal());

        let config_failure = EtlError::InvalidConfigValueError {
            field: "timeout_secs".to_string(),
            value: "0".to_string(),
            reason: "Value must be between 1 and 300".to_string(),
        };
        assert!(config_failure.is_fatal());

        let data_failure = EtlError::ProcessingError {
            message: "no records to save".to_string(),
        };
        assert!(data_failure.is_fatal());
    }
}
