use std::path::PathBuf;

/// Errors that can occur while loading or persisting the settings document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A path into the document crosses a non-table value.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to parse TOML content
    #[error("failed to parse TOML from {location}: {details}")]
    TomlParseError {
        /// Location of the TOML (file path, "string", etc.)
        location: String,
        /// Parse error details
        details: String,
    },

    /// Error occurred while serializing the document
    #[error("failed to serialize {content_type}: {details}")]
    SerializationError {
        /// Type of content being serialized
        content_type: String,
        /// Serialization error details
        details: String,
    },

    /// Error occurred while persisting the document to disk
    #[error("failed to persist config to '{path}': {details}")]
    PersistenceError {
        /// Path where persistence failed
        path: PathBuf,
        /// Error details from the persistence operation
        details: String,
    },

    /// Error occurred during file I/O operations
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Error occurred while acquiring locks for thread-safe access
    #[error("failed to acquire {lock_type} lock: {details}")]
    LockError {
        /// Type of lock that failed (read, write)
        lock_type: String,
        /// Lock error details
        details: String,
    },
}
