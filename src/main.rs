//! sip-settings - manage the SIP middleware settings from the command line.
//!
//! Exactly one of `--general` or `--account` selects the settings object,
//! followed by a command and its arguments.

use std::{path::PathBuf, process::ExitCode};

use clap::{CommandFactory, Parser};
use tracing::{debug, instrument};

use sip_settings::{
    Result, SipSettingsError,
    cli::{
        CliError, CliService,
        formatting::{format_stderr_error, terminate_output},
    },
    config_store::ConfigStore,
    tracing_config,
};

/// This script is used to manage the SIP SIMPLE middleware settings.
#[derive(Parser, Debug)]
#[command(
    name = "sip-settings",
    version,
    disable_help_flag = true,
    help_template = "{about}\n\nOptions:\n{options}"
)]
struct Cli {
    /// Manage SIP accounts' settings
    #[arg(short, long)]
    account: bool,

    /// Manage general SIP SIMPLE middleware settings
    #[arg(short, long)]
    general: bool,

    /// Settings file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print help
    #[arg(short, long)]
    help: bool,

    /// Command followed by its arguments
    args: Vec<String>,
}

impl Cli {
    /// Category selected by the flags; `None` unless exactly one flag is set.
    fn category(&self) -> Option<&'static str> {
        match (self.account, self.general) {
            (true, false) => Some("account"),
            (false, true) => Some("general"),
            _ => None,
        }
    }
}

fn main() -> ExitCode {
    if let Err(e) = tracing_config::init_cli_mode() {
        eprintln!("{}", format_stderr_error(&e.to_string()));
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let service = match open_store(cli.config.clone()) {
        Ok(store) => CliService::new(store),
        Err(e) => {
            eprintln!("{}", format_stderr_error(&e.to_string()));
            return ExitCode::FAILURE;
        }
    };

    if cli.help {
        println!("{}\n", service.help());
        print!("{}", Cli::command().render_help());
        return ExitCode::SUCCESS;
    }

    match run(&cli, &service) {
        Ok(output) => {
            print!("{}", terminate_output(&output));
            ExitCode::SUCCESS
        }
        Err(e) if e.is_usage() => {
            if !matches!(e, SipSettingsError::Cli(CliError::Usage)) {
                eprintln!("{}", format_stderr_error(&format!("Error: {e}")));
            }
            eprintln!("{}", service.usage());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{}", format_stderr_error(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}

#[instrument(skip_all)]
fn open_store(path: Option<PathBuf>) -> Result<ConfigStore> {
    let store = match path {
        Some(path) => ConfigStore::start(path)?,
        None => ConfigStore::start_default()?,
    };
    debug!(path = %store.path().display(), "settings document opened");
    Ok(store)
}

fn run(cli: &Cli, service: &CliService) -> Result<String> {
    let category = cli.category().ok_or(CliError::Usage)?;

    let (command, args) = match cli.args.split_first() {
        Some((command, args)) => (command.as_str(), args),
        None => ("", &[][..]),
    };

    Ok(service.execute_command(category, command, args)?)
}
