use crate::{
    cli::{
        Command, CommandResult,
        types::CommandMetadata,
    },
    config_store::ConfigStore,
    general::GlobalSettings,
    render,
};

/// Display name of the global settings tree.
const ROOT_NAME: &str = "SIP SIMPLE";

/// Renders the global settings tree.
///
/// # Example Usage
///
/// ```bash
/// sip-settings --general show
/// ```
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
    fn execute(&self, _args: &[String]) -> CommandResult {
        let global = GlobalSettings::load(&self.config_store)?;

        Ok(format!(
            "SIP SIMPLE settings:\n{}",
            render::render_object(global.settings(), ROOT_NAME)
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "show".to_string(),
            description: "Show all global settings".to_string(),
            category: "general".to_string(),
            args: vec![],
            examples: vec!["sip-settings --general show".to_string()],
        }
    }
}
