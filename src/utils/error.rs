use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input stream closed while waiting for {expecting}")]
    InputClosed { expecting: &'static str },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl InputError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            InputError::IoError(e) => format!("Could not talk to the terminal: {}", e),
            InputError::InputClosed { expecting } => {
                format!("Input ended before a valid {} was entered", expecting)
            }
            InputError::SerializationError(e) => format!("Could not render the result: {}", e),
            InputError::ConfigError { message } => format!("Configuration problem: {}", message),
            InputError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            InputError::IoError(_) => "Check that stdin/stdout are attached to a terminal or pipe",
            InputError::InputClosed { .. } => {
                "Provide one line per answer and keep the input open until every answer is accepted"
            }
            InputError::SerializationError(_) => "Retry without --json",
            InputError::ConfigError { .. } | InputError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or run without --config to use the defaults"
            }
        }
    }

    /// 程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            InputError::ConfigError { .. } | InputError::InvalidConfigValueError { .. } => 1,
            InputError::InputClosed { .. } => 2,
            InputError::IoError(_) | InputError::SerializationError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, InputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_closed_message_names_the_field() {
        let err = InputError::InputClosed {
            expecting: "rover pose",
        };
        assert!(err.to_string().contains("rover pose"));
        assert!(err.user_friendly_message().contains("rover pose"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err: InputError = io.into();
        assert!(matches!(err, InputError::IoError(_)));
        assert_eq!(err.exit_code(), 3);
    }
}
