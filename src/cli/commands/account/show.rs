use crate::{
    accounts::{AccountError, AccountManager},
    cli::{CliError, Command, CommandResult, types::CommandMetadata},
    config_store::ConfigStore,
    render,
};

use super::address_arg;

/// Display name of an account's settings tree.
const ROOT_NAME: &str = "account";

/// Renders the settings tree of one account.
pub struct ShowCommand {
    config_store: ConfigStore,
}

impl ShowCommand {
    /// Creates a new ShowCommand reading from `config_store`.
    pub fn new(config_store: ConfigStore) -> Self {
        Self { config_store }
    }
}

impl Command for ShowCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let [address] = args else {
            return Err(CliError::IllegalUsage("show".to_string()));
        };

        let manager = AccountManager::start(&self.config_store)?;
        let Some(account) = manager.get_account(address) else {
            return Ok(AccountError::NotFound(address.clone()).to_string());
        };

        Ok(format!(
            "Account {address}:\n{}",
            render::render_object(account.settings(), ROOT_NAME)
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "show".to_string(),
            description: "Show the settings of an account".to_string(),
            category: "account".to_string(),
            args: vec![address_arg()],
            examples: vec!["sip-settings --account show alice@example.com".to_string()],
        }
    }
}
