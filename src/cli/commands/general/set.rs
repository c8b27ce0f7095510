use crate::{
    cli::{
        Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config_store::ConfigStore,
    general::GlobalSettings,
    settings::assign,
};

use super::super::assignment_output;

/// Applies `dotted.path=value` assignments to the global settings and saves them.
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
        let mut global = GlobalSettings::load(&self.config_store)?;

        assignment_output(
            assign::update(&mut global, args),
            "SIP SIMPLE general settings updated",
        )
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "set".to_string(),
            description: "Change global settings".to_string(),
            category: "general".to_string(),
            args: vec![CommandArg {
                name: "assignments".to_string(),
                description: "Settings to change, as dotted.path=value".to_string(),
                required: false,
                variadic: true,
                value_type: ArgType::Assignment,
            }],
            examples: vec![
                "sip-settings --general set rtp.port_range=40000:40100".to_string(),
                "sip-settings --general set sip.transport_list=tls,tcp user_agent=DEFAULT"
                    .to_string(),
            ],
        }
    }
}
