use thiserror::Error;

use crate::{accounts::AccountError, cli::CliError, config_store::ConfigError};

/// Error types for the sip-settings application.
///
/// Wraps the errors of the individual subsystems so the binary can report
/// any of them through one type.
#[derive(Error, Debug)]
pub enum SipSettingsError {
    /// The settings document could not be located, read or written.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The account directory failed.
    #[error(transparent)]
    Account(#[from] AccountError),

    /// A command failed or was used incorrectly.
    #[error(transparent)]
    Cli(#[from] CliError),

    /// The log subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

impl SipSettingsError {
    /// Whether the error is a misuse of the command line.
    pub fn is_usage(&self) -> bool {
        matches!(self, SipSettingsError::Cli(e) if e.is_usage())
    }
}

/// A specialized `Result` type for sip-settings operations.
///
/// This type alias simplifies error handling by defaulting the error type
/// to `SipSettingsError`.
pub type Result<T> = std::result::Result<T, SipSettingsError>;
