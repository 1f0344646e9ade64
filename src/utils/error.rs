use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

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

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Demonstration '{demo}' failed: {details}")]
    DemoExecutionError { demo: String, details: String },
}

/// 錯誤嚴重程度，決定 CLI 的退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Demo,
    System,
}

impl DemoError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // stdout 不可寫屬於系統層級問題
            DemoError::IoError(_) => ErrorSeverity::Critical,
            DemoError::ConfigError { .. }
            | DemoError::ConfigValidationError { .. }
            | DemoError::InvalidConfigValueError { .. }
            | DemoError::MissingConfigError { .. } => ErrorSeverity::High,
            DemoError::DemoExecutionError { .. } => ErrorSeverity::High,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            DemoError::IoError(_) => ErrorCategory::System,
            DemoError::ConfigError { .. }
            | DemoError::ConfigValidationError { .. }
            | DemoError::InvalidConfigValueError { .. }
            | DemoError::MissingConfigError { .. } => ErrorCategory::Config,
            DemoError::DemoExecutionError { .. } => ErrorCategory::Demo,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DemoError::IoError(_) => {
                "Check that stdout is writable and not closed by the caller".to_string()
            }
            DemoError::ConfigError { .. } => {
                "Review the configuration file syntax and try again".to_string()
            }
            DemoError::ConfigValidationError { field, .. } => {
                format!("Fix the '{}' setting and re-run", field)
            }
            DemoError::InvalidConfigValueError { field, .. } => {
                format!("Adjust '{}' to satisfy the stated constraint", field)
            }
            DemoError::MissingConfigError { field } => {
                format!("Add the missing '{}' field to the configuration file", field)
            }
            DemoError::DemoExecutionError { .. } => {
                "Re-run with --verbose to see the demonstration logs".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::IoError(e) => format!("Could not write demonstration output: {}", e),
            DemoError::ConfigError { message } => format!("Configuration problem: {}", message),
            DemoError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            DemoError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => {
                format!("'{}' does not accept '{}': {}", field, value, reason)
            }
            DemoError::MissingConfigError { field } => {
                format!("The configuration is missing '{}'", field)
            }
            DemoError::DemoExecutionError { demo, details } => {
                format!("Demonstration '{}' did not complete: {}", demo, details)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
