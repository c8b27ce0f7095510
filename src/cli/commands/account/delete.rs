use crate::{
    accounts::{AccountError, AccountManager},
    cli::{CliError, Command, CommandResult, types::CommandMetadata},
    config_store::ConfigStore,
};

use super::address_arg;

/// Removes an account and its stored settings.
pub struct DeleteCommand {
    config_store: ConfigStore,
}

impl DeleteCommand {
    /// Creates a new DeleteCommand writing to `config_store`.
    pub fn new(config_store: ConfigStore) -> Self {
        Self { config_store }
    }
}

impl Command for DeleteCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let [address] = args else {
            return Err(CliError::IllegalUsage("delete".to_string()));
        };

        let mut manager = AccountManager::start(&self.config_store)?;
        match manager.delete(address) {
            Ok(()) => Ok("Account deleted".to_string()),
            Err(e @ (AccountError::NotFound(_) | AccountError::Reserved(_))) => Ok(e.to_string()),
            Err(e) => Err(e.into()),
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "delete".to_string(),
            description: "Delete an account".to_string(),
            category: "account".to_string(),
            args: vec![address_arg()],
            examples: vec!["sip-settings --account delete alice@example.com".to_string()],
        }
    }
}
