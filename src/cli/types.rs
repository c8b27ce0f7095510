use thiserror::Error;

use crate::{accounts::AccountError, config_store::ConfigError};

/// Errors that can occur during CLI command execution.
///
/// Usage errors are reported together with the usage text and end the
/// process with a non-zero status. Outcomes the user can act on, such as an
/// unknown account, are not errors; commands report them in their output.
#[derive(Error, Debug)]
pub enum CliError {
    /// Neither or both of the category flags were given.
    #[error("exactly one of --general or --account must be given")]
    Usage,

    /// No command followed the category flag.
    #[error("no command specified")]
    NoCommand,

    /// The category has no command with this name.
    #[error("illegal command: {0}")]
    IllegalCommand(String),

    /// The command was given the wrong number of arguments.
    #[error("illegal usage of command {0}")]
    IllegalUsage(String),

    /// The account directory failed.
    #[error(transparent)]
    Account(#[from] AccountError),

    /// The settings document could not be read or written.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Updated settings could not be saved.
    #[error("failed to save settings: {0}")]
    Persist(String),
}

impl CliError {
    /// Whether the error is a misuse of the command line.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            CliError::Usage
                | CliError::NoCommand
                | CliError::IllegalCommand(_)
                | CliError::IllegalUsage(_)
        )
    }
}

/// Type alias for command execution results.
///
/// All CLI commands return this type, providing either the text to print as
/// a String or a CliError describing what went wrong.
pub type CommandResult = Result<String, CliError>;

/// Specification for a single command argument.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument (e.g., "address", "password").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,

    /// Whether this argument absorbs all remaining arguments.
    ///
    /// Only the last argument of a command may be variadic.
    pub variadic: bool,

    /// The expected kind of value, used for the usage placeholder.
    pub value_type: ArgType,
}

impl CommandArg {
    /// Placeholder shown for this argument in usage lines.
    pub fn placeholder(&self) -> String {
        let base = match self.value_type {
            ArgType::Address => "user@domain".to_string(),
            ArgType::Assignment => "key1=value1".to_string(),
            ArgType::String => self.name.clone(),
        };

        match (&self.value_type, self.required, self.variadic) {
            (ArgType::Assignment, _, true) => format!("{base} [key2=value2 ...]"),
            (_, _, true) => format!("[{base} ...]"),
            (_, true, false) => base,
            (_, false, false) => format!("[{base}]"),
        }
    }
}

/// Type classification for command arguments.
#[derive(Debug, Clone)]
pub enum ArgType {
    /// A free-form value.
    String,

    /// A SIP account identifier, `user@domain`.
    Address,

    /// A `dotted.path=value` setting assignment.
    Assignment,
}

/// Complete metadata for a CLI command.
///
/// This struct serves as the single source of truth for a command's
/// identity and arguments. The registry uses it for argument count
/// validation and usage lines.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command name (e.g., "show", "set", "add").
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// Specification of all arguments this command accepts.
    pub args: Vec<CommandArg>,

    /// Example invocations.
    pub examples: Vec<String>,

    /// Category this command belongs to ("account" or "general").
    pub category: String,
}

impl CommandMetadata {
    /// Number of arguments that must be given.
    pub fn min_args(&self) -> usize {
        self.args
            .iter()
            .filter(|arg| arg.required && !arg.variadic)
            .count()
    }

    /// Largest number of arguments accepted, `None` when the last one is variadic.
    pub fn max_args(&self) -> Option<usize> {
        match self.args.last() {
            Some(arg) if arg.variadic => None,
            _ => Some(self.args.len()),
        }
    }

    /// Usage line for this command, e.g. `--account show user@domain`.
    pub fn usage_line(&self) -> String {
        let mut line = format!("--{} {}", self.category, self.name);
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.placeholder());
        }
        line
    }
}

/// Trait defining the interface for all CLI commands.
///
/// Commands receive dependencies through their constructors.
pub trait Command: Send + Sync {
    /// Executes the command with the provided arguments.
    ///
    /// The registry has already checked the argument count against the
    /// command's metadata.
    ///
    /// # Errors
    ///
    /// Returns `CliError` when the settings document cannot be read or
    /// written.
    fn execute(&self, args: &[String]) -> CommandResult;

    /// Returns the complete metadata for this command.
    fn metadata(&self) -> CommandMetadata;
}
