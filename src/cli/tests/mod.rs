//! Unit tests for CLI module
//!
//! Tests command registry, argument validation, formatting and the output of
//! each command against a throwaway settings file.

#![allow(clippy::panic, clippy::unwrap_used)]

use tempfile::TempDir;

use crate::{
    cli::{
        ArgType, CliError, CliService, CommandArg, CommandMetadata,
        formatting::{format_error, terminate_output},
    },
    config_store::ConfigStore,
};

fn service(dir: &TempDir) -> CliService {
    CliService::new(ConfigStore::start(dir.path().join("config.toml")).unwrap())
}

fn run(service: &CliService, category: &str, command: &str, args: &[&str]) -> String {
    let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
    service
        .execute_command(category, command, &args)
        .unwrap_or_else(|e| panic!("{category} {command} failed: {e}"))
}

fn run_err(service: &CliService, category: &str, command: &str, args: &[&str]) -> CliError {
    let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
    match service.execute_command(category, command, &args) {
        Ok(output) => panic!("{category} {command} unexpectedly succeeded: {output}"),
        Err(e) => e,
    }
}

#[test]
fn help_describes_every_command() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);
    let help = service.help();

    assert!(help.starts_with(&service.usage()));
    assert!(help.contains("\nCommands:\n"));
    assert!(help.contains("  --account add user@domain password\n      Add a SIP account\n"));
    assert!(help.contains("password       Registration password"));
    assert!(help.contains("$ sip-settings --account delete alice@example.com"));
    assert!(help.contains("      Show all global settings"));
}

#[test]
fn usage_lists_every_command_form() {
    let dir = TempDir::new().unwrap();
    let usage = service(&dir).usage();

    assert!(usage.starts_with("Usage: sip-settings [--general|--account] command [arguments]"));
    assert!(usage.contains("sip-settings --general show"));
    assert!(usage.contains("sip-settings --general set key1=value1 [key2=value2 ...]"));
    assert!(usage.contains("sip-settings --account add user@domain password"));
    assert!(usage.contains("sip-settings --account set user@domain key1=value1 [key2=value2 ...]"));
}

#[test]
fn empty_command_is_reported() {
    let dir = TempDir::new().unwrap();
    let error = run_err(&service(&dir), "general", "", &[]);

    assert!(matches!(error, CliError::NoCommand));
    assert_eq!(error.to_string(), "no command specified");
}

#[test]
fn unknown_command_is_illegal() {
    let dir = TempDir::new().unwrap();
    let error = run_err(&service(&dir), "general", "list", &[]);

    assert!(error.is_usage());
    assert_eq!(error.to_string(), "illegal command: list");
}

#[test]
fn wrong_argument_count_is_illegal_usage() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);

    let error = run_err(&service, "account", "add", &["alice@example.com"]);
    assert_eq!(error.to_string(), "illegal usage of command add");

    let error = run_err(&service, "general", "show", &["extra"]);
    assert_eq!(error.to_string(), "illegal usage of command show");

    let error = run_err(&service, "account", "set", &[]);
    assert!(matches!(error, CliError::IllegalUsage(name) if name == "set"));
}

#[test]
fn metadata_arity() {
    let metadata = CommandMetadata {
        name: "set".to_string(),
        description: String::new(),
        category: "account".to_string(),
        args: vec![
            CommandArg {
                name: "address".to_string(),
                description: String::new(),
                required: true,
                variadic: false,
                value_type: ArgType::Address,
            },
            CommandArg {
                name: "assignments".to_string(),
                description: String::new(),
                required: false,
                variadic: true,
                value_type: ArgType::Assignment,
            },
        ],
        examples: vec![],
    };

    assert_eq!(metadata.min_args(), 1);
    assert_eq!(metadata.max_args(), None);
    assert_eq!(
        metadata.usage_line(),
        "--account set user@domain key1=value1 [key2=value2 ...]"
    );
}

#[test]
fn account_list_shows_bonjour_as_default() {
    let dir = TempDir::new().unwrap();
    let output = run(&service(&dir), "account", "list", &[]);

    assert_eq!(output, "Accounts:\n  bonjour (enabled) - default_account");
}

#[test]
fn account_add_then_list() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);

    assert_eq!(
        run(&service, "account", "add", &["alice@example.com", "secret"]),
        "Account added"
    );
    assert_eq!(
        run(&service, "account", "list", &[]),
        "Accounts:\n  alice@example.com (disabled)\n  bonjour (enabled) - default_account"
    );
}

#[test]
fn account_add_existing_is_not_overwritten() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);

    run(&service, "account", "add", &["alice@example.com", "first"]);
    run(&service, "account", "set", &["alice@example.com", "display_name=Alice"]);

    assert_eq!(
        run(&service, "account", "add", &["alice@example.com", "second"]),
        "Account alice@example.com already exists"
    );
    let shown = run(&service, "account", "show", &["alice@example.com"]);
    assert!(shown.contains("display_name = Alice"));
    assert!(shown.contains("password = first"));
}

#[test]
fn account_add_rejects_malformed_address() {
    let dir = TempDir::new().unwrap();
    let output = run(&service(&dir), "account", "add", &["alice", "secret"]);

    assert!(output.starts_with("Cannot add SIP account: "));
}

#[test]
fn account_delete_messages() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);

    assert_eq!(
        run(&service, "account", "delete", &["bonjour"]),
        "Cannot delete bonjour account"
    );
    assert_eq!(
        run(&service, "account", "delete", &["bob@example.com"]),
        "Account bob@example.com does not exist"
    );

    run(&service, "account", "add", &["bob@example.com", "pw"]);
    assert_eq!(
        run(&service, "account", "delete", &["bob@example.com"]),
        "Account deleted"
    );
    assert_eq!(
        run(&service, "account", "list", &[]),
        "Accounts:\n  bonjour (enabled) - default_account"
    );
}

#[test]
fn account_show_renders_tree() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);
    run(&service, "account", "add", &["alice@example.com", "secret"]);

    let output = run(&service, "account", "show", &["alice@example.com"]);
    let mut lines = output.lines();

    assert_eq!(lines.next(), Some("Account alice@example.com:"));
    assert_eq!(lines.next(), Some("          +"));
    assert_eq!(lines.next(), Some("account --|-- display_name = None"));
    assert!(output.contains("sip --|--"));
    assert!(output.ends_with("\n\n"));
}

#[test]
fn account_show_unknown() {
    let dir = TempDir::new().unwrap();
    assert_eq!(
        run(&service(&dir), "account", "show", &["bob@example.com"]),
        "Account bob@example.com does not exist"
    );
}

#[test]
fn account_set_reports_failures_and_saves_the_rest() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);
    run(&service, "account", "add", &["alice@example.com", "secret"]);

    let output = run(
        &service,
        "account",
        "set",
        &["alice@example.com", "enabled=true", "sip.nope=1", "sip.register_interval=soon"],
    );
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Unknown setting: sip.nope");
    assert!(lines[1].starts_with("sip.register_interval: "));
    assert_eq!(lines[2], "Account updated");

    assert!(run(&service, "account", "list", &[]).contains("  alice@example.com (enabled)\n"));
}

#[test]
fn account_set_unknown_account() {
    let dir = TempDir::new().unwrap();
    assert_eq!(
        run(&service(&dir), "account", "set", &["bob@example.com", "enabled=true"]),
        "Account bob@example.com does not exist"
    );
}

#[test]
fn account_set_malformed_batch_is_rejected() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);
    run(&service, "account", "add", &["alice@example.com", "secret"]);

    assert_eq!(
        run(&service, "account", "set", &["alice@example.com", "enabled=true", "oops"]),
        "Illegal arguments: enabled=true oops"
    );
    assert!(run(&service, "account", "list", &[]).contains("alice@example.com (disabled)"));
}

#[test]
fn general_show_renders_root_name() {
    let dir = TempDir::new().unwrap();
    let output = run(&service(&dir), "general", "show", &[]);
    let mut lines = output.lines();

    assert_eq!(lines.next(), Some("SIP SIMPLE settings:"));
    assert_eq!(lines.next(), Some("             +"));
    assert_eq!(
        lines.next(),
        Some("SIP SIMPLE --|-- default_account = bonjour")
    );
}

#[test]
fn general_set_then_show() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);

    assert_eq!(
        run(&service, "general", "set", &["rtp.port_range=40000:40100", "user_agent=Test"]),
        "SIP SIMPLE general settings updated"
    );

    let output = run(&service, "general", "show", &[]);
    assert!(output.contains("port_range = 40000:40100"));
    assert!(output.contains("user_agent = Test"));
}

#[test]
fn general_set_without_assignments_still_confirms() {
    let dir = TempDir::new().unwrap();
    assert_eq!(
        run(&service(&dir), "general", "set", &[]),
        "SIP SIMPLE general settings updated"
    );
}

#[test]
fn format_error_wraps_in_color() {
    assert_eq!(format_error("boom"), "\x1b[1m\x1b[31mboom\x1b[0m");
}

#[test]
fn terminate_output_adds_single_newline() {
    assert_eq!(terminate_output("Account added"), "Account added\n");
    assert_eq!(terminate_output("tree\n\n"), "tree\n\n");
}
