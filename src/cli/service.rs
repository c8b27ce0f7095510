use crate::config_store::ConfigStore;

use super::{CliError, CommandRegistry};

/// Program name shown in usage lines.
pub const PROGRAM_NAME: &str = "sip-settings";

/// High-level service for managing and executing CLI commands.
///
/// Provides a unified interface for command registration, discovery, and execution.
/// Commands are organized by category and can be listed or executed by name.
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a new CLI service with all available commands registered.
    ///
    /// The config store is shared across all commands.
    pub fn new(config_store: ConfigStore) -> Self {
        let mut registry = CommandRegistry::new(config_store);
        registry.register_all_commands();

        CliService { registry }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    /// * `CliError::NoCommand` - If `command_name` is empty
    /// * `CliError::IllegalCommand` - If the command doesn't exist in the category
    /// * `CliError::IllegalUsage` - If the argument count is wrong
    pub fn execute_command(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        if command_name.is_empty() {
            return Err(CliError::NoCommand);
        }
        self.registry.execute(category, command_name, args)
    }

    /// Usage text listing every command form.
    pub fn usage(&self) -> String {
        let mut lines = vec![format!(
            "Usage: {PROGRAM_NAME} [--general|--account] command [arguments]"
        )];
        lines.extend(
            self.registry
                .metadata()
                .iter()
                .map(|metadata| format!("       {PROGRAM_NAME} {}", metadata.usage_line())),
        );
        lines.join("\n")
    }

    /// Usage text followed by every command with its arguments and examples.
    pub fn help(&self) -> String {
        let mut lines = vec![self.usage(), String::new(), "Commands:".to_string()];

        for metadata in self.registry.metadata() {
            lines.push(format!("  {}", metadata.usage_line()));
            lines.push(format!("      {}", metadata.description));
            lines.extend(
                metadata
                    .args
                    .iter()
                    .map(|arg| format!("        {:<14} {}", arg.name, arg.description)),
            );
            lines.extend(
                metadata
                    .examples
                    .iter()
                    .map(|example| format!("        $ {example}")),
            );
        }

        lines.join("\n")
    }
}
