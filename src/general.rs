//! The global middleware settings object.

use tracing::instrument;

use crate::{
    config::SipSimpleSettings,
    config_store::{ConfigError, ConfigStore},
    settings::{SettingsNode, SettingsRoot},
};

/// Document section holding the global settings tree.
pub const GENERAL_SECTION: &str = "general";

/// Global settings bound to the store they were loaded from.
#[derive(Debug, Clone)]
pub struct GlobalSettings {
    settings: SipSimpleSettings,
    store: ConfigStore,
}

impl GlobalSettings {
    /// Builds the settings tree from its defaults and the stored overrides.
    ///
    /// # Errors
    /// * `ConfigError::LockError` - If the document cannot be read
    #[instrument(skip_all)]
    pub fn load(store: &ConfigStore) -> Result<Self, ConfigError> {
        let mut settings = SipSimpleSettings::default();
        store.load_node(&[GENERAL_SECTION], &mut settings)?;

        Ok(Self {
            settings,
            store: store.clone(),
        })
    }

    /// The typed settings tree.
    pub fn settings(&self) -> &SipSimpleSettings {
        &self.settings
    }

    /// Mutable access to the typed settings tree.
    pub fn settings_mut(&mut self) -> &mut SipSimpleSettings {
        &mut self.settings
    }

    /// Writes the whole tree back to the store.
    ///
    /// # Errors
    /// Any `ConfigError` raised while writing the document.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.store.save_node(&[GENERAL_SECTION], &self.settings)
    }
}

impl SettingsRoot for GlobalSettings {
    type Error = ConfigError;

    fn node_mut(&mut self) -> &mut dyn SettingsNode {
        &mut self.settings
    }

    fn save(&self) -> Result<(), ConfigError> {
        GlobalSettings::save(self)
    }
}
