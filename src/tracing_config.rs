use std::{
    env,
    io::{self, IsTerminal},
};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::SipSettingsError;

/// Environment variable selecting the log format (`json` or `pretty`).
pub const LOG_FORMAT_ENV: &str = "SIP_SETTINGS_LOG_FORMAT";

/// Initialize tracing for command-line use
///
/// Logs go to stderr so they never mix with command output on stdout.
/// Uses RUST_LOG environment variable if set, otherwise defaults to "warn".
/// Supports both compact console output and JSON output based on
/// `SIP_SETTINGS_LOG_FORMAT`.
///
/// # Errors
/// Returns error if a global subscriber is already installed
pub fn init_cli_mode() -> Result<(), SipSettingsError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let format = env::var(LOG_FORMAT_ENV).unwrap_or_else(|_| "pretty".to_string());

    let ansi = io::stderr().is_terminal();
    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match format.as_str() {
        "json" => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_level(true)
                    .with_ansi(ansi)
                    .with_writer(io::stderr),
            )
            .try_init(),
        _ => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_level(true)
                    .with_ansi(ansi)
                    .with_writer(io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| SipSettingsError::Logging(e.to_string()))
}
