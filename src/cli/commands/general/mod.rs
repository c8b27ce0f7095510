//! Global settings commands.

mod set;
mod show;

pub use set::SetCommand;
pub use show::ShowCommand;

use crate::{cli::CommandRegistry, config_store::ConfigStore};

/// Registers the global settings commands with the command registry.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `config_store` - Store the global settings are loaded from
pub fn register_commands(registry: &mut CommandRegistry, config_store: &ConfigStore) {
    const CATEGORY_NAME: &str = "general";

    registry.register_command(
        CATEGORY_NAME,
        Box::new(ShowCommand::new(config_store.clone())),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(SetCommand::new(config_store.clone())),
    );
}
