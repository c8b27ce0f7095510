//! sip-settings - inspect and change the settings of a SIP middleware.
//!
//! The settings live in a single TOML document holding the global settings
//! tree and one tree per account. Every tree is a typed schema that can be
//! rendered for the terminal and changed through `dotted.path=value`
//! assignments.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sip_settings::{config_store::ConfigStore, general::GlobalSettings, settings::assign};
//!
//! let store = ConfigStore::start_default()?;
//! let mut global = GlobalSettings::load(&store)?;
//!
//! let args = vec!["rtp.port_range=40000:40100".to_string()];
//! let report = assign::update(&mut global, &args)?;
//! println!("{} settings changed", report.applied());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Settings schemas and file locations.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Persistent settings document.
pub mod config_store;

/// Typed settings trees, value parsing and path assignment.
pub mod settings;

/// Account directory.
pub mod accounts;

/// The global settings object.
pub mod general;

/// Terminal rendering of settings trees.
pub mod render;

/// Command-line interface for settings management.
pub mod cli;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{Result, SipSettingsError};
