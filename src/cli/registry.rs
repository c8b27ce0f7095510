use std::collections::HashMap;

use tracing::debug;

use crate::config_store::ConfigStore;

use super::{
    CliError, Command,
    commands::{account, general},
    types::CommandMetadata,
};

/// Registry for CLI commands organized by category.
///
/// Commands are grouped under the category selected by the command-line
/// flag, so the same command name may exist in several categories.
///
/// # Example Structure
///
/// ```text
/// registry
/// ├── account
/// │   ├── add
/// │   ├── delete
/// │   ├── list
/// │   ├── set
/// │   └── show
/// └── general
///     ├── set
///     └── show
/// ```
pub struct CommandRegistry {
    /// Nested HashMap structure: category name -> (command name -> command implementation)
    categories: HashMap<String, HashMap<String, Box<dyn Command>>>,
    config_store: ConfigStore,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    ///
    /// The registry starts with no commands registered. Commands must be added
    /// using the `register_command` method, typically during application initialization.
    pub fn new(config_store: ConfigStore) -> Self {
        let categories = HashMap::new();
        Self {
            categories,
            config_store,
        }
    }

    /// Registers a command in the specified category.
    ///
    /// The command's name (from its metadata) is used as the key within the
    /// category. A command with the same name in the same category is
    /// replaced.
    pub fn register_command(&mut self, category: &str, command: Box<dyn Command>) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(command.metadata().name, command);
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    ///
    /// * `CliError::IllegalCommand` - The category has no such command
    /// * `CliError::IllegalUsage` - The argument count does not match the command
    ///
    /// Other errors may be returned by the command's execute method.
    pub fn execute(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        let found_command = self
            .categories
            .get(category)
            .and_then(|commands| commands.get(command_name))
            .ok_or_else(|| CliError::IllegalCommand(command_name.to_string()))?;

        Self::validate_args(&found_command.metadata(), args)?;

        debug!(category, command = command_name, "executing command");
        found_command.execute(args)
    }

    /// Metadata of every registered command, sorted by category and name.
    pub fn metadata(&self) -> Vec<CommandMetadata> {
        let mut all: Vec<CommandMetadata> = self
            .categories
            .values()
            .flat_map(|commands| commands.values().map(|command| command.metadata()))
            .collect();

        all.sort_by(|a, b| (&a.category, &a.name).cmp(&(&b.category, &b.name)));
        all
    }

    fn validate_args(metadata: &CommandMetadata, args: &[String]) -> Result<(), CliError> {
        let too_few = args.len() < metadata.min_args();
        let too_many = metadata.max_args().is_some_and(|max| args.len() > max);

        if too_few || too_many {
            debug!(
                command = %metadata.name,
                given = args.len(),
                "argument count does not match command"
            );
            return Err(CliError::IllegalUsage(metadata.name.clone()));
        }

        Ok(())
    }

    /// Registers all available CLI commands in their respective categories.
    pub fn register_all_commands(&mut self) {
        let config_store = self.config_store.clone();
        account::register_commands(self, &config_store);
        general::register_commands(self, &config_store);
    }
}
