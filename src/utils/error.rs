use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ProvisionError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProvisionError::CsvError(_) => ErrorCategory::Input,
            ProvisionError::IoError(_) => ErrorCategory::System,
            ProvisionError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ProvisionError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ProvisionError::CsvError(e) => match e.position() {
                Some(pos) => format!("Roster file is malformed at line {}: {}", pos.line(), e),
                None => format!("Roster file is malformed: {}", e),
            },
            ProvisionError::IoError(e) => format!("File system error: {}", e),
            ProvisionError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ProvisionError::CsvError(_) => {
                "Make sure the header row has the columns: last name, first name, username, github username, section number"
            }
            ProvisionError::IoError(_) => "Check file permissions and that the path is readable",
            ProvisionError::InvalidConfigValueError { .. } => {
                "Run with --help to see the expected arguments"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ProvisionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_configuration_category() {
        let err = ProvisionError::InvalidConfigValueError {
            field: "semester".to_string(),
            value: String::new(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("semester"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: ProvisionError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
