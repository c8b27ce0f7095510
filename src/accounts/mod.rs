//! Account directory.
//!
//! Every account is a settings tree keyed by its SIP address. The discovery
//! account ([`BONJOUR_ACCOUNT_ID`]) always exists and cannot be deleted.

mod account;
mod address;
mod error;
mod manager;


pub use account::{ACCOUNTS_SECTION, Account, AccountKind};
pub use address::SipAddress;
pub use error::AccountError;
pub use manager::AccountManager;

/// Identifier of the local-network discovery account.
pub const BONJOUR_ACCOUNT_ID: &str = "bonjour";
