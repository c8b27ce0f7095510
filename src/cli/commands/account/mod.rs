//! Account management commands.

mod add;
mod delete;
mod list;
mod set;
mod show;

pub use add::AddCommand;
pub use delete::DeleteCommand;
pub use list::ListCommand;
pub use set::SetCommand;
pub use show::ShowCommand;

use crate::{
    cli::{ArgType, CommandArg, CommandRegistry},
    config_store::ConfigStore,
};

/// Registers all account commands with the command registry.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `config_store` - Store the accounts are loaded from
pub fn register_commands(registry: &mut CommandRegistry, config_store: &ConfigStore) {
    const CATEGORY_NAME: &str = "account";

    registry.register_command(
        CATEGORY_NAME,
        Box::new(ListCommand::new(config_store.clone())),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(AddCommand::new(config_store.clone())),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(DeleteCommand::new(config_store.clone())),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(ShowCommand::new(config_store.clone())),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(SetCommand::new(config_store.clone())),
    );
}

fn address_arg() -> CommandArg {
    CommandArg {
        name: "address".to_string(),
        description: "Account identifier".to_string(),
        required: true,
        variadic: false,
        value_type: ArgType::Address,
    }
}
