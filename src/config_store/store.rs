use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use toml::Table;
use tracing::{debug, info, instrument};

use crate::{config::ConfigPaths, settings::SettingsNode};

use super::{
    ConfigError,
    codec::{decode_node, encode_node},
    path_ops::{navigate_table, remove_entry, replace_table},
};

/// A shared handle on the settings document and the file it lives in
///
/// Settings objects read their subtree from the store when they are built and
/// write it back through [`ConfigStore::save_node`].
#[derive(Clone, Debug)]
pub struct ConfigStore {
    path: Arc<PathBuf>,

    document: Arc<RwLock<Table>>,
}

impl ConfigStore {
    /// Loads the settings document from `path`
    ///
    /// A missing file yields an empty document; it is created on the first save.
    ///
    /// # Errors
    /// * `ConfigError::IoError` - If the file exists but cannot be read
    /// * `ConfigError::TomlParseError` - If the file is not valid TOML
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn start(path: PathBuf) -> Result<Self, ConfigError> {
        let document = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                details: e.to_string(),
            })?;

            content
                .parse::<Table>()
                .map_err(|e| ConfigError::TomlParseError {
                    location: path.display().to_string(),
                    details: e.to_string(),
                })?
        } else {
            info!("No settings file found, starting with an empty document");
            Table::new()
        };

        Ok(Self {
            path: Arc::new(path),
            document: Arc::new(RwLock::new(document)),
        })
    }

    /// Loads the settings document from its default location
    ///
    /// # Errors
    /// * `ConfigError::IoError` - If the location cannot be determined or read
    /// * `ConfigError::TomlParseError` - If the file is not valid TOML
    pub fn start_default() -> Result<Self, ConfigError> {
        let path = ConfigPaths::main_config().map_err(|e| ConfigError::IoError {
            path: PathBuf::new(),
            details: e.to_string(),
        })?;

        Self::start(path)
    }

    /// File backing this store
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy of the table at `segments`, if there is one
    ///
    /// # Errors
    /// * `ConfigError::LockError` - If the read lock cannot be acquired
    pub fn subtree(&self, segments: &[&str]) -> Result<Option<Table>, ConfigError> {
        let document = self.read()?;
        Ok(navigate_table(&document, segments).cloned())
    }

    /// Keys of the tables directly below `segments`, sorted
    ///
    /// # Errors
    /// * `ConfigError::LockError` - If the read lock cannot be acquired
    pub fn child_tables(&self, segments: &[&str]) -> Result<Vec<String>, ConfigError> {
        let document = self.read()?;
        let mut keys: Vec<String> = navigate_table(&document, segments)
            .map(|table| {
                table
                    .iter()
                    .filter(|(_, value)| value.is_table())
                    .map(|(key, _)| key.clone())
                    .collect()
            })
            .unwrap_or_default();
        keys.sort();
        Ok(keys)
    }

    /// Applies the stored subtree at `segments` to `node`
    ///
    /// # Errors
    /// * `ConfigError::LockError` - If the read lock cannot be acquired
    pub fn load_node(&self, segments: &[&str], node: &mut dyn SettingsNode) -> Result<(), ConfigError> {
        if let Some(table) = self.subtree(segments)? {
            decode_node(node, &table, &segments.join("."));
        }
        Ok(())
    }

    /// Replaces the subtree at `segments` with `node` and writes the document
    ///
    /// # Errors
    /// * `ConfigError::InvalidPath` - If the path crosses a non-table value
    /// * `ConfigError::LockError` - If the write lock cannot be acquired
    /// * `ConfigError::PersistenceError` - If the document cannot be written
    #[instrument(skip(self, node))]
    pub fn save_node(&self, segments: &[&str], node: &dyn SettingsNode) -> Result<(), ConfigError> {
        let table = encode_node(node);
        {
            let mut document = self.write()?;
            replace_table(&mut document, segments, table)?;
        }
        self.flush()
    }

    /// Removes the subtree at `segments` and writes the document
    ///
    /// # Returns
    /// Whether anything was removed
    ///
    /// # Errors
    /// * `ConfigError::LockError` - If the write lock cannot be acquired
    /// * `ConfigError::PersistenceError` - If the document cannot be written
    #[instrument(skip(self))]
    pub fn remove(&self, segments: &[&str]) -> Result<bool, ConfigError> {
        let removed = {
            let mut document = self.write()?;
            remove_entry(&mut document, segments)
        };

        if removed {
            self.flush()?;
        }
        Ok(removed)
    }

    /// Writes the whole document atomically
    ///
    /// The content goes to a sibling temporary file which is then renamed over
    /// the target.
    ///
    /// # Errors
    /// * `ConfigError::SerializationError` - If the document cannot be serialized
    /// * `ConfigError::PersistenceError` - If the file cannot be written
    pub fn flush(&self) -> Result<(), ConfigError> {
        let content = {
            let document = self.read()?;
            toml::to_string(&*document).map_err(|e| ConfigError::SerializationError {
                content_type: "settings document".to_string(),
                details: e.to_string(),
            })?
        };

        let persistence_error = |e: std::io::Error| ConfigError::PersistenceError {
            path: self.path.to_path_buf(),
            details: e.to_string(),
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(persistence_error)?;
            }
        }

        let staging = self.path.with_extension("toml.tmp");
        fs::write(&staging, content).map_err(persistence_error)?;
        fs::rename(&staging, self.path.as_path()).map_err(persistence_error)?;

        debug!(path = %self.path.display(), "settings document written");
        Ok(())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Table>, ConfigError> {
        self.document.read().map_err(|e| ConfigError::LockError {
            lock_type: "read".to_string(),
            details: e.to_string(),
        })
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Table>, ConfigError> {
        self.document.write().map_err(|e| ConfigError::LockError {
            lock_type: "write".to_string(),
            details: e.to_string(),
        })
    }
}
