use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Failed to read input '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unexpected document structure at {path}: {message}")]
    StructureError { path: String, message: String },

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
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Structure,
    Output,
    Config,
}

impl EtlError {
    pub fn structure(path: impl Into<String>, message: impl Into<String>) -> Self {
        EtlError::StructureError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::ReadError { .. } => ErrorCategory::Input,
            EtlError::SerializationError(_) | EtlError::StructureError { .. } => {
                ErrorCategory::Structure
            }
            EtlError::WriteError { .. } => ErrorCategory::Output,
            EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check that the input GeoJSON file exists and is readable",
            ErrorCategory::Structure => {
                "The input must contain features[0].geometry.coordinates[0][0] as a list of [lon, lat] pairs"
            }
            ErrorCategory::Output => {
                "Check that the output directory exists and is writable"
            }
            ErrorCategory::Config => "Review the command line flags and the TOML configuration file",
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
