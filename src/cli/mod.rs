//! Command-line interface for settings management.
//!
//! Provides a command system for inspecting and changing the global settings
//! and the account settings. Commands are organized by category and
//! generate their usage lines from metadata.

mod commands;
pub mod formatting;
mod registry;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use registry::CommandRegistry;
pub use service::{CliService, PROGRAM_NAME};
pub use types::{ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult};
