use thiserror::Error;

use crate::exit_codes::OrchExitCode;

pub mod assemblies;
pub mod behaviour;
pub mod dcim;
pub mod deployment_locations;
pub mod descriptors;
pub mod environments;
pub mod resource_managers;
pub mod utils;

#[derive(Debug, Error)]
pub enum CliActionError {
    #[error("{0}")]
    JsonError(#[from] serde_json::Error),

    #[error("{0}")]
    UsageError(#[from] crate::identifier::IdentifierError),

    #[error("{0}")]
    ValidationError(#[from] crate::validation::ValidationError),

    #[error("{0}")]
    ApiError(#[from] crate::tnco::TncoClientError),

    #[error("{0}")]
    DcimApiError(#[from] crate::dcim::DcimClientError),

    #[error("{0}")]
    ConfigurationError(#[from] crate::config::ConfigurationError),

    #[error("{0}")]
    FormattingError(#[from] crate::format::FormattingError),

    #[error("Missing required argument: {0}")]
    MissingRequiredArgument(String),

    #[error("Failed to read file {path}: {cause}")]
    FileError {
        path: String,
        cause: std::io::Error,
    },

    #[error("Content of {path} is not a valid object: {detail}")]
    InvalidFileContent { path: String, detail: String },

    #[error("Invalid --set value {0:?}, expected key=value")]
    InvalidSetValue(String),

    #[error("Invalid value for {name}: {detail}")]
    InvalidArgumentValue { name: String, detail: String },

    #[error("No {kind} found with name {id}")]
    NotFound { kind: String, id: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CliActionError {
    pub fn exit_code(&self) -> OrchExitCode {
        match self {
            CliActionError::UsageError(_)
            | CliActionError::ValidationError(_)
            | CliActionError::MissingRequiredArgument(_)
            | CliActionError::InvalidSetValue(_)
            | CliActionError::InvalidArgumentValue { .. }
            | CliActionError::NotFound { .. } => OrchExitCode::UsageError,
            CliActionError::ConfigurationError(_) => OrchExitCode::ConfigError,
            CliActionError::JsonError(_)
            | CliActionError::FormattingError(_)
            | CliActionError::InvalidFileContent { .. } => OrchExitCode::DataError,
            CliActionError::FileError { .. } => OrchExitCode::NoInput,
            CliActionError::ApiError(e) => match e {
                crate::tnco::TncoClientError::Auth(_) => OrchExitCode::AuthError,
                crate::tnco::TncoClientError::Transport(_) => OrchExitCode::NetworkError,
                crate::tnco::TncoClientError::Configuration(_) => OrchExitCode::ConfigError,
                _ => OrchExitCode::ApiError,
            },
            CliActionError::DcimApiError(e) => match e {
                crate::dcim::DcimClientError::Transport(_) => OrchExitCode::NetworkError,
                _ => OrchExitCode::ApiError,
            },
            CliActionError::IoError(_) => OrchExitCode::SoftwareError,
        }
    }
}
