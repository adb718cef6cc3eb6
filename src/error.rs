use thiserror::Error;

use crate::{actions::CliActionError, exit_codes::OrchExitCode};

/// Error types that can occur during CLI command execution.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Undefined or unsupported subcommand")]
    UnsupportedSubcommand(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(#[from] crate::config::ConfigurationError),

    #[error("Formatting error: {0}")]
    FormattingError(#[from] crate::format::FormattingError),

    #[error("Missing required argument: {0}")]
    MissingRequiredArgument(String),

    #[error("{0}")]
    ActionError(#[from] CliActionError),
}

impl CliError {
    /// Exit code for this error, for process termination.
    pub fn exit_code(&self) -> OrchExitCode {
        match self {
            CliError::UnsupportedSubcommand(_) => OrchExitCode::UsageError,
            CliError::ConfigurationError(_) => OrchExitCode::ConfigError,
            CliError::FormattingError(_) => OrchExitCode::DataError,
            CliError::MissingRequiredArgument(_) => OrchExitCode::UsageError,
            CliError::ActionError(e) => e.exit_code(),
        }
    }
}
