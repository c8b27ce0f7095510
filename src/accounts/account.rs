use tracing::instrument;

use crate::{
    config::{AccountSettings, BonjourAccountSettings},
    config_store::{ConfigError, ConfigStore},
    settings::{SettingState, SettingValue, SettingsNode, SettingsRoot},
};

use super::{AccountError, BONJOUR_ACCOUNT_ID};

/// Document section holding one table per account.
pub const ACCOUNTS_SECTION: &str = "accounts";

/// Settings tree of an account, which depends on its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountKind {
    /// A registered SIP identity.
    Sip(AccountSettings),
    /// The local-network discovery account.
    Bonjour(BonjourAccountSettings),
}

/// An account bound to the store it is persisted in.
#[derive(Debug, Clone)]
pub struct Account {
    id: String,
    kind: AccountKind,
    store: ConfigStore,
}

impl Account {
    /// A SIP account with default settings; nothing is stored until [`save`](Self::save).
    pub(super) fn new_sip(store: &ConfigStore, id: &str) -> Self {
        Self {
            id: id.to_string(),
            kind: AccountKind::Sip(AccountSettings::default()),
            store: store.clone(),
        }
    }

    /// Loads a stored account. The bonjour identifier selects the discovery account.
    pub(super) fn load(store: &ConfigStore, id: &str) -> Result<Self, ConfigError> {
        let mut kind = if id == BONJOUR_ACCOUNT_ID {
            AccountKind::Bonjour(BonjourAccountSettings::default())
        } else {
            AccountKind::Sip(AccountSettings::default())
        };

        let node: &mut dyn SettingsNode = match &mut kind {
            AccountKind::Sip(settings) => settings,
            AccountKind::Bonjour(settings) => settings,
        };
        store.load_node(&[ACCOUNTS_SECTION, id], node)?;

        Ok(Self {
            id: id.to_string(),
            kind,
            store: store.clone(),
        })
    }

    /// The account identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The typed settings tree.
    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    /// Whether this is the discovery account.
    pub fn is_bonjour(&self) -> bool {
        matches!(self.kind, AccountKind::Bonjour(_))
    }

    /// Effective value of the `enabled` leaf.
    pub fn enabled(&self) -> bool {
        match &self.kind {
            AccountKind::Sip(settings) => settings.enabled.as_bool(),
            AccountKind::Bonjour(settings) => settings.enabled.as_bool(),
        }
    }

    /// The settings tree as a generic node.
    pub fn settings(&self) -> &dyn SettingsNode {
        match &self.kind {
            AccountKind::Sip(settings) => settings,
            AccountKind::Bonjour(settings) => settings,
        }
    }

    /// The settings tree as a mutable generic node.
    pub fn settings_mut(&mut self) -> &mut dyn SettingsNode {
        match &mut self.kind {
            AccountKind::Sip(settings) => settings,
            AccountKind::Bonjour(settings) => settings,
        }
    }

    /// Sets the registration password.
    ///
    /// # Errors
    /// * `AccountError::Unsupported` - The discovery account has no password
    pub fn set_password(&mut self, password: &str) -> Result<(), AccountError> {
        let AccountKind::Sip(settings) = &mut self.kind else {
            return Err(AccountError::Unsupported {
                operation: "setting a password",
                id: self.id.clone(),
            });
        };

        settings
            .password
            .assign(SettingState::Value(SettingValue::text(password)))
            .map_err(AccountError::from)
    }

    /// Writes the account's tree back to the store.
    ///
    /// # Errors
    /// Any `ConfigError` raised while writing the document.
    #[instrument(skip(self), fields(id = %self.id))]
    pub fn save(&self) -> Result<(), ConfigError> {
        self.store
            .save_node(&[ACCOUNTS_SECTION, self.id.as_str()], self.settings())
    }

    /// Removes the account's tree from the store.
    pub(super) fn delete(self) -> Result<(), ConfigError> {
        self.store.remove(&[ACCOUNTS_SECTION, self.id.as_str()]).map(|_| ())
    }
}

impl SettingsRoot for Account {
    type Error = ConfigError;

    fn node_mut(&mut self) -> &mut dyn SettingsNode {
        self.settings_mut()
    }

    fn save(&self) -> Result<(), ConfigError> {
        Account::save(self)
    }
}
