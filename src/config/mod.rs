//! Settings schema definitions and file locations.
//!
//! Defines the complete settings trees for the global middleware configuration
//! and for accounts. Every node is declared with
//! [`settings_group!`](crate::settings_group), so its schema can be walked by
//! the renderer and the assignment engine.

mod account;
mod general;
mod media;
mod paths;


pub use account::{
    AccountMsrpSettings, AccountRtpSettings, AccountSettings, AccountSipSettings,
    BonjourAccountSettings, BonjourMsrpSettings, BonjourSipSettings, MessageSummarySettings,
    PresenceSettings, XcapSettings,
};
pub use general::{ChatSettings, LogsSettings, SipSettings, SipSimpleSettings, TlsSettings};
pub use media::{AudioSettings, RtpSettings, VideoSettings};
pub use paths::{CONFIG_FILE_ENV, ConfigPaths};
