use std::collections::BTreeMap;

use tracing::{debug, info, instrument};

use crate::{config_store::ConfigStore, general::GlobalSettings};

use super::{ACCOUNTS_SECTION, Account, AccountError, BONJOUR_ACCOUNT_ID, SipAddress};

/// Directory of all accounts known to the settings document.
///
/// The discovery account always exists, whether or not it has stored settings,
/// and cannot be deleted.
#[derive(Debug)]
pub struct AccountManager {
    store: ConfigStore,
    accounts: BTreeMap<String, Account>,
    bonjour: Account,
    preferred_default: Option<String>,
}

impl AccountManager {
    /// Loads every stored account.
    ///
    /// # Errors
    /// * `AccountError::Store` - If the document cannot be read
    #[instrument(skip_all)]
    pub fn start(store: &ConfigStore) -> Result<Self, AccountError> {
        let mut accounts = BTreeMap::new();

        for id in store.child_tables(&[ACCOUNTS_SECTION])? {
            if id == BONJOUR_ACCOUNT_ID {
                continue;
            }
            let account = Account::load(store, &id)?;
            accounts.insert(id, account);
        }

        let bonjour = Account::load(store, BONJOUR_ACCOUNT_ID)?;
        let preferred_default = GlobalSettings::load(store)?
            .settings()
            .default_account
            .as_str()
            .map(str::to_string);

        debug!(count = accounts.len(), "accounts loaded");

        Ok(Self {
            store: store.clone(),
            accounts,
            bonjour,
            preferred_default,
        })
    }

    /// Whether an account with this identifier exists.
    pub fn has_account(&self, id: &str) -> bool {
        id == BONJOUR_ACCOUNT_ID || self.accounts.contains_key(id)
    }

    /// Account by identifier.
    pub fn get_account(&self, id: &str) -> Option<&Account> {
        if id == BONJOUR_ACCOUNT_ID {
            return Some(&self.bonjour);
        }
        self.accounts.get(id)
    }

    /// Mutable account by identifier.
    pub fn get_account_mut(&mut self, id: &str) -> Option<&mut Account> {
        if id == BONJOUR_ACCOUNT_ID {
            return Some(&mut self.bonjour);
        }
        self.accounts.get_mut(id)
    }

    /// All accounts sorted by identifier, with the discovery account last.
    pub fn get_accounts(&self) -> Vec<&Account> {
        self.accounts
            .values()
            .chain(std::iter::once(&self.bonjour))
            .collect()
    }

    /// The account used when none is selected explicitly.
    ///
    /// That is the account named by the global `default_account` setting if
    /// it exists and is enabled, else the first enabled account, else the
    /// discovery account.
    pub fn default_account(&self) -> &Account {
        self.preferred_default
            .as_deref()
            .and_then(|id| self.get_account(id))
            .filter(|account| account.enabled())
            .or_else(|| self.accounts.values().find(|account| account.enabled()))
            .unwrap_or(&self.bonjour)
    }

    /// Registers a new account with default settings.
    ///
    /// The account is kept in memory only until it is saved.
    ///
    /// # Errors
    /// * `AccountError::AlreadyExists` - The identifier is taken
    /// * `AccountError::InvalidAddress` - The identifier is not `user@domain`
    #[instrument(skip(self))]
    pub fn create(&mut self, id: &str) -> Result<&mut Account, AccountError> {
        if self.has_account(id) {
            return Err(AccountError::AlreadyExists(id.to_string()));
        }
        let address = SipAddress::parse(id)?;
        debug!(user = address.user(), domain = address.domain(), "creating account");

        let account = Account::new_sip(&self.store, id);
        Ok(self.accounts.entry(id.to_string()).or_insert(account))
    }

    /// Removes an account and its stored settings.
    ///
    /// # Errors
    /// * `AccountError::NotFound` - No such account
    /// * `AccountError::Reserved` - The discovery account cannot be removed
    /// * `AccountError::Store` - The document could not be written
    #[instrument(skip(self))]
    pub fn delete(&mut self, id: &str) -> Result<(), AccountError> {
        if !self.has_account(id) {
            return Err(AccountError::NotFound(id.to_string()));
        }
        if id == BONJOUR_ACCOUNT_ID {
            return Err(AccountError::Reserved(id.to_string()));
        }

        if let Some(account) = self.accounts.remove(id) {
            account.delete()?;
            info!("account deleted");
        }
        Ok(())
    }
}
