use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("No valid name parts found: {reason}")]
    EmptyInput { reason: String },

    #[error("Failed to write output file '{path}': {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl ForgeError {
    pub fn empty_input(reason: impl Into<String>) -> Self {
        Self::EmptyInput {
            reason: reason.into(),
        }
    }

    pub fn output(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }

    /// Short message meant for the terminal, without internal detail.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::EmptyInput { .. } => {
                "The supplied name has no alphabetic parts to build candidates from".to_string()
            }
            Self::Output { path, .. } => format!("Could not write output file '{}'", path),
            Self::IoError(_) => "A file system operation failed".to_string(),
            Self::ConfigError { message } => format!("Invalid configuration: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for {}: {}", field, reason)
            }
            Self::MissingConfigError { field } => format!("Missing required value: {}", field),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::EmptyInput { .. } => "Pass a full name such as \"John Michael Smith\"",
            Self::Output { .. } | Self::IoError(_) => {
                "Check that the target directory exists and is writable"
            }
            Self::ConfigError { .. } => "Check the TOML profile syntax",
            Self::InvalidConfigValueError { .. } => "Fix the value and run again",
            Self::MissingConfigError { .. } => {
                "Provide the value with a command line flag or in the profile"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, ForgeError>;
