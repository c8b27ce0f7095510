use crate::{
    accounts::{AccountError, AccountManager},
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config_store::ConfigStore,
    settings::assign,
};

use super::{super::assignment_output, address_arg};

/// Applies `dotted.path=value` assignments to one account and saves it.
pub struct SetCommand {
    config_store: ConfigStore,
}

impl SetCommand {
    /// Creates a new SetCommand writing to `config_store`.
    pub fn new(config_store: ConfigStore) -> Self {
        Self { config_store }
    }
}

impl Command for SetCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let Some((address, assignments)) = args.split_first() else {
            return Err(CliError::IllegalUsage("set".to_string()));
        };

        let mut manager = AccountManager::start(&self.config_store)?;
        let Some(account) = manager.get_account_mut(address) else {
            return Ok(AccountError::NotFound(address.clone()).to_string());
        };

        assignment_output(assign::update(account, assignments), "Account updated")
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "set".to_string(),
            description: "Change settings of an account".to_string(),
            category: "account".to_string(),
            args: vec![
                address_arg(),
                CommandArg {
                    name: "assignments".to_string(),
                    description: "Settings to change, as dotted.path=value".to_string(),
                    required: false,
                    variadic: true,
                    value_type: ArgType::Assignment,
                },
            ],
            examples: vec![
                "sip-settings --account set alice@example.com enabled=true".to_string(),
                "sip-settings --account set alice@example.com sip.outbound_proxy=tls:proxy.example.com:5061"
                    .to_string(),
            ],
        }
    }
}
