//! Typed settings tree.
//!
//! Nodes describe themselves through a static schema ([`SettingsNode`]),
//! leaves hold typed values ([`Setting`]). On top of that sit the raw-value
//! parser registry ([`parser`]), dotted path resolution ([`path`]) and batch
//! assignment ([`assign`]).

pub mod assign;
mod error;
mod node;
pub mod parser;
pub mod path;
pub mod types;
mod value;

#[cfg(test)]
mod tests;

pub use assign::{AssignError, AssignmentReport, KeyOutcome, SettingsRoot};
pub use error::ValueError;
pub use node::{Member, MemberKind, SettingsNode};
pub use value::{Setting, SettingState, SettingValue, ValueShape, ValueType};
