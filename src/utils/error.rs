use thiserror::Error;

/// 表單驗證失敗的種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    MissingField,
    InvalidEmail,
}

impl ValidationKind {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationKind::MissingField => "All fields are required",
            ValidationKind::InvalidEmail => "Invalid email format",
        }
    }
}

impl std::fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Validation error: {kind}")]
    ValidationError { kind: ValidationKind },

    #[error("Notification sink error: {message}")]
    SinkError { message: String },

    #[error("Relay error: {message}")]
    RelayError { message: String },

    #[error("Request body rejected ({status}): {message}")]
    RequestBodyError { status: u16, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Network,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn validation(kind: ValidationKind) -> Self {
        AppError::ValidationError { kind }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::ConfigError { .. }
            | AppError::MissingConfigError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::ConfigValidationError { .. }
            | AppError::TomlError(_) => ErrorCategory::Configuration,
            AppError::ValidationError { .. }
            | AppError::SerializationError(_)
            | AppError::RequestBodyError { .. } => ErrorCategory::Input,
            AppError::ApiError(_) | AppError::SinkError { .. } | AppError::RelayError { .. } => {
                ErrorCategory::Network
            }
            AppError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息，不含內部細節
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::ValidationError { kind } => kind.message().to_string(),
            AppError::RelayError { message } => message.clone(),
            AppError::SinkError { .. } | AppError::ApiError(_) => {
                "Failed to deliver the notification".to_string()
            }
            AppError::MissingConfigError { field } => {
                format!("Missing required configuration '{}'", field)
            }
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration '{}': {}", field, reason)
            }
            AppError::ConfigValidationError { field, message } => {
                format!("Invalid configuration '{}': {}", field, message)
            }
            AppError::ConfigError { message } => message.clone(),
            AppError::TomlError(_) => "Configuration file is not valid TOML".to_string(),
            AppError::SerializationError(_) => "Malformed JSON payload".to_string(),
            AppError::RequestBodyError { .. } => "Request body could not be read".to_string(),
            AppError::IoError(e) => format!("File system error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the configuration file and the environment variables it references"
            }
            ErrorCategory::Input => "Correct the submitted data and try again",
            ErrorCategory::Network => {
                "Verify the notification sink endpoint is reachable and try again later"
            }
            ErrorCategory::System => "Check file paths and permissions",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
