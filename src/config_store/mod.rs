//! Persistent settings document.
//!
//! Holds the TOML document every settings object is loaded from, and writes
//! subtrees back atomically when an object is saved.

mod codec;
mod error;
mod path_ops;
mod store;


pub use codec::{decode_node, encode_node};
pub use error::ConfigError;
pub use store::ConfigStore;
