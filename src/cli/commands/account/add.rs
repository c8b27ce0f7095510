use tracing::info;

use crate::{
    accounts::{AccountError, AccountManager},
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config_store::ConfigStore,
};

use super::address_arg;

/// Creates an account with a password and saves it.
///
/// An existing account is never overwritten.
pub struct AddCommand {
    config_store: ConfigStore,
}

impl AddCommand {
    /// Creates a new AddCommand writing to `config_store`.
    pub fn new(config_store: ConfigStore) -> Self {
        Self { config_store }
    }
}

impl Command for AddCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let [address, password] = args else {
            return Err(CliError::IllegalUsage("add".to_string()));
        };

        let mut manager = AccountManager::start(&self.config_store)?;
        let account = match manager.create(address) {
            Ok(account) => account,
            Err(e @ AccountError::AlreadyExists(_)) => return Ok(e.to_string()),
            Err(e @ AccountError::InvalidAddress { .. }) => {
                return Ok(format!("Cannot add SIP account: {e}"));
            }
            Err(e) => return Err(e.into()),
        };

        account.set_password(password)?;
        account.save()?;
        info!(account = %address, "account added");

        Ok("Account added".to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "add".to_string(),
            description: "Add a SIP account".to_string(),
            category: "account".to_string(),
            args: vec![
                address_arg(),
                CommandArg {
                    name: "password".to_string(),
                    description: "Registration password".to_string(),
                    required: true,
                    variadic: false,
                    value_type: ArgType::String,
                },
            ],
            examples: vec!["sip-settings --account add alice@example.com secret".to_string()],
        }
    }
}
