use std::{
    env,
    io::{Error, ErrorKind},
    path::PathBuf,
};

/// Environment variable that points at an explicit settings file.
pub const CONFIG_FILE_ENV: &str = "SIP_SETTINGS_CONFIG";

/// Utility struct for locating the settings file
///
/// Follows the XDG Base Directory specification unless an explicit file is
/// given through [`CONFIG_FILE_ENV`].
pub struct ConfigPaths;

impl ConfigPaths {
    /// Returns the configuration directory path for the application
    ///
    /// - First checks `XDG_CONFIG_HOME`
    /// - Falls back to `$HOME/.config`
    /// - Appends "sip-settings" to the base config directory
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` environment variables are set
    pub fn config_dir() -> Result<PathBuf, Error> {
        let config_home = env::var("XDG_CONFIG_HOME")
            .or_else(|_| env::var("HOME").map(|home| format!("{home}/.config")))
            .map_err(|_| {
                Error::new(
                    ErrorKind::NotFound,
                    "Neither XDG_CONFIG_HOME nor HOME environment variable found",
                )
            })?;

        Ok(PathBuf::from(config_home).join("sip-settings"))
    }

    /// Returns the path to the settings file
    ///
    /// # Errors
    /// Returns an error if no override is set and the config directory cannot be determined
    pub fn main_config() -> Result<PathBuf, Error> {
        if let Ok(explicit) = env::var(CONFIG_FILE_ENV) {
            if !explicit.is_empty() {
                return Ok(PathBuf::from(explicit));
            }
        }

        Ok(Self::config_dir()?.join("config.toml"))
    }
}
