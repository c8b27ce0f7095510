use crate::{
    accounts::AccountManager,
    cli::{Command, CommandResult, types::CommandMetadata},
    config_store::ConfigStore,
};

/// Lists all accounts with their state, marking the default one.
///
/// # Example Usage
///
/// ```bash
/// sip-settings --account list
/// ```
pub struct ListCommand {
    config_store: ConfigStore,
}

impl ListCommand {
    /// Creates a new ListCommand reading from `config_store`.
    pub fn new(config_store: ConfigStore) -> Self {
        Self { config_store }
    }
}

impl Command for ListCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        let manager = AccountManager::start(&self.config_store)?;
        let default_id = manager.default_account().id();

        let mut lines = vec!["Accounts:".to_string()];
        lines.extend(manager.get_accounts().into_iter().map(|account| {
            format!(
                "  {} ({}){}",
                account.id(),
                if account.enabled() { "enabled" } else { "disabled" },
                if account.id() == default_id {
                    " - default_account"
                } else {
                    ""
                }
            )
        }));

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "list".to_string(),
            description: "List all accounts".to_string(),
            category: "account".to_string(),
            args: vec![],
            examples: vec!["sip-settings --account list".to_string()],
        }
    }
}
