//! Batch application of `dotted.path=value` assignments.

use std::{collections::BTreeMap, fmt};

use thiserror::Error;
use tracing::{debug, instrument};

use super::{
    SettingsNode, ValueError, parser,
    path::{self, PathLookup},
};

/// Separator between a dotted path and its raw value.
pub const ASSIGNMENT_SEPARATOR: char = '=';

/// Errors that abort a whole batch.
#[derive(Error, Debug)]
pub enum AssignError {
    /// An entry has no `=`; nothing was applied.
    #[error("Illegal arguments: {0}")]
    IllegalArguments(String),

    /// The assignments were applied but the root could not be saved.
    #[error("{0}")]
    Persist(String),
}

/// What happened to a single key of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The value was parsed and stored.
    Applied,
    /// The path does not name a leaf of the tree.
    UnknownSetting,
    /// The value was rejected by the leaf's parser.
    InvalidValue(ValueError),
}

/// Per-key outcome of one batch, ordered by dotted path.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AssignmentReport {
    outcomes: Vec<(String, KeyOutcome)>,
}

impl AssignmentReport {
    /// All outcomes, ordered by dotted path.
    pub fn outcomes(&self) -> &[(String, KeyOutcome)] {
        &self.outcomes
    }

    /// Outcome recorded for `path`.
    pub fn outcome(&self, path: &str) -> Option<&KeyOutcome> {
        self.outcomes
            .iter()
            .find(|(key, _)| key == path)
            .map(|(_, outcome)| outcome)
    }

    /// Number of keys that were applied.
    pub fn applied(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| *outcome == KeyOutcome::Applied)
            .count()
    }

    /// User-facing lines for the keys that failed.
    pub fn failure_messages(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .filter_map(|(path, outcome)| match outcome {
                KeyOutcome::Applied => None,
                KeyOutcome::UnknownSetting => Some(format!("Unknown setting: {path}")),
                KeyOutcome::InvalidValue(e) => Some(format!("{path}: {e}")),
            })
            .collect()
    }
}

impl fmt::Display for AssignmentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.failure_messages().join("\n"))
    }
}

/// A settings tree root that can be persisted as a unit.
pub trait SettingsRoot {
    /// Error raised by [`save`](SettingsRoot::save).
    type Error: fmt::Display;

    /// The tree to assign into.
    fn node_mut(&mut self) -> &mut dyn SettingsNode;

    /// Persists the whole tree.
    ///
    /// # Errors
    /// Implementation specific.
    fn save(&self) -> Result<(), Self::Error>;
}

/// Splits every entry on its first `=`.
///
/// Duplicate paths collapse into one entry; the last occurrence wins.
///
/// # Errors
/// Returns `AssignError::IllegalArguments` listing all entries if any of them
/// has no `=`.
pub fn parse_assignments(args: &[String]) -> Result<BTreeMap<&str, &str>, AssignError> {
    args.iter()
        .map(|arg| arg.split_once(ASSIGNMENT_SEPARATOR))
        .collect::<Option<BTreeMap<_, _>>>()
        .ok_or_else(|| AssignError::IllegalArguments(args.join(" ")))
}

/// Applies `args` to `root`, continuing past individual failures.
///
/// Nothing is persisted here; see [`update`].
///
/// # Errors
/// Returns `AssignError::IllegalArguments` before touching the tree if any
/// entry is malformed.
#[instrument(skip(root))]
pub fn apply(root: &mut dyn SettingsNode, args: &[String]) -> Result<AssignmentReport, AssignError> {
    let assignments = parse_assignments(args)?;

    let outcomes = assignments
        .into_iter()
        .map(|(dotted_path, raw)| {
            let outcome = assign_one(root, dotted_path, raw);
            (dotted_path.to_string(), outcome)
        })
        .collect();

    Ok(AssignmentReport { outcomes })
}

fn assign_one(root: &mut dyn SettingsNode, dotted_path: &str, raw: &str) -> KeyOutcome {
    let (node, leaf) = match path::resolve(root, dotted_path) {
        PathLookup::Found { node, leaf } => (node, leaf),
        PathLookup::NotFound { path } => {
            debug!(path, "group segment did not resolve");
            return KeyOutcome::UnknownSetting;
        }
    };

    let Some(value_type) = node.declared_type(leaf) else {
        debug!(path = dotted_path, leaf, "no such leaf");
        return KeyOutcome::UnknownSetting;
    };

    let result = parser::parse(value_type, raw).and_then(|state| match node.setting_mut(leaf) {
        Some(setting) => setting.assign(state).map(|()| KeyOutcome::Applied),
        None => Ok(KeyOutcome::UnknownSetting),
    });

    match result {
        Ok(outcome) => {
            debug!(path = dotted_path, raw, ?outcome, "assignment processed");
            outcome
        }
        Err(e) => {
            debug!(path = dotted_path, raw, error = %e, "rejected value");
            KeyOutcome::InvalidValue(e)
        }
    }
}

/// Applies `args` to the root's tree and then saves the root exactly once.
///
/// The save happens even when some keys failed. A malformed batch is rejected
/// without saving.
///
/// # Errors
/// * `AssignError::IllegalArguments` - An entry has no `=`
/// * `AssignError::Persist` - The root could not be saved
pub fn update<R: SettingsRoot>(
    root: &mut R,
    args: &[String],
) -> Result<AssignmentReport, AssignError> {
    let report = apply(root.node_mut(), args)?;
    root.save().map_err(|e| AssignError::Persist(e.to_string()))?;
    Ok(report)
}
