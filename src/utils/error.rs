use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status} for postcode {postcode}")]
    ApiStatusError { status: u16, postcode: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid time format: '{input}' (expected HH:MM:SS)")]
    InvalidTimeFormat { input: String },

    #[error("No court of type '{court_type}' found near {postcode}")]
    NoMatchingCourt { postcode: String, court_type: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
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
    Data,
    Config,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FinderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FinderError::ApiError(_) | FinderError::ApiStatusError { .. } => ErrorCategory::Network,
            FinderError::CsvError(_)
            | FinderError::SerializationError(_)
            | FinderError::InvalidTimeFormat { .. }
            | FinderError::NoMatchingCourt { .. }
            | FinderError::ProcessingError { .. } => ErrorCategory::Data,
            FinderError::TomlError(_)
            | FinderError::ConfigError { .. }
            | FinderError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            FinderError::IoError(_) | FinderError::ZipError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 單人查無法院不算嚴重，整批仍可繼續
            FinderError::NoMatchingCourt { .. } => ErrorSeverity::Low,
            FinderError::ApiError(_) | FinderError::ApiStatusError { .. } => ErrorSeverity::Medium,
            FinderError::CsvError(_)
            | FinderError::SerializationError(_)
            | FinderError::InvalidTimeFormat { .. }
            | FinderError::ProcessingError { .. }
            | FinderError::TomlError(_)
            | FinderError::ConfigError { .. }
            | FinderError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            FinderError::IoError(_) | FinderError::ZipError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FinderError::ApiError(e) => format!("Could not reach the courts finder API: {}", e),
            FinderError::ApiStatusError { status, postcode } => format!(
                "The courts finder API rejected the lookup for {} (HTTP {})",
                postcode, status
            ),
            FinderError::CsvError(e) => format!("The people file could not be parsed: {}", e),
            FinderError::IoError(e) => format!("File operation failed: {}", e),
            FinderError::SerializationError(e) => format!("Report serialization failed: {}", e),
            FinderError::ZipError(e) => format!("Report bundle could not be written: {}", e),
            FinderError::TomlError(e) => format!("The config file is not valid TOML: {}", e),
            FinderError::InvalidTimeFormat { input } => {
                format!("'{}' is not a valid HH:MM:SS time", input)
            }
            FinderError::NoMatchingCourt {
                postcode,
                court_type,
            } => format!("No '{}' court was found near {}", court_type, postcode),
            FinderError::ConfigError { message } | FinderError::ProcessingError { message } => {
                message.clone()
            }
            FinderError::InvalidConfigValueError { field, reason, .. } => {
                format!("The configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Network => {
                "Check your network connection and the --api-endpoint URL, then retry".to_string()
            }
            ErrorCategory::Data => {
                "Check the people file has person_name, home_postcode and looking_for_court_type columns with valid values"
                    .to_string()
            }
            ErrorCategory::Config => {
                "Run with --help to see the expected flags, or fix the TOML config file".to_string()
            }
            ErrorCategory::Io => "Check the output directory exists and is writable".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FinderError>;
