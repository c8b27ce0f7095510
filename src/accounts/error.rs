use thiserror::Error;

use crate::{config_store::ConfigError, settings::ValueError};

/// Errors raised by the account directory.
#[derive(Error, Debug)]
pub enum AccountError {
    /// An account with this identifier is already known.
    #[error("Account {0} already exists")]
    AlreadyExists(String),

    /// No account with this identifier is known.
    #[error("Account {0} does not exist")]
    NotFound(String),

    /// The identifier belongs to an account that cannot be removed.
    #[error("Cannot delete {0} account")]
    Reserved(String),

    /// The identifier is not a usable SIP address.
    #[error("invalid SIP address '{address}': {reason}")]
    InvalidAddress {
        /// The identifier as given
        address: String,
        /// What is wrong with it
        reason: String,
    },

    /// The operation does not apply to this kind of account.
    #[error("{operation} is not supported by account {id}")]
    Unsupported {
        /// What was attempted
        operation: &'static str,
        /// Account identifier
        id: String,
    },

    /// A value was rejected by its setting.
    #[error(transparent)]
    InvalidValue(#[from] ValueError),

    /// Reading or writing the settings document failed.
    #[error(transparent)]
    Store(#[from] ConfigError),
}
