use toml::{Table, Value};

use super::ConfigError;

/// Navigates to the table at `segments`
///
/// # Returns
/// `None` if a segment is missing or names a non-table value
pub(super) fn navigate_table<'a>(root: &'a Table, segments: &[&str]) -> Option<&'a Table> {
    let mut current = root;

    for segment in segments {
        match current.get(*segment) {
            Some(Value::Table(table)) => current = table,
            _ => return None,
        }
    }

    Some(current)
}

/// Navigates to the table at `segments`, creating missing tables on the way
///
/// # Errors
/// * `ConfigError::InvalidPath` - If a segment names an existing non-table value
pub(super) fn navigate_table_mut<'a>(
    root: &'a mut Table,
    segments: &[&str],
) -> Result<&'a mut Table, ConfigError> {
    let mut current = root;

    for (i, segment) in segments.iter().enumerate() {
        let entry = current
            .entry(segment.to_string())
            .or_insert(Value::Table(Table::new()));

        current = match entry {
            Value::Table(table) => table,
            other => {
                return Err(ConfigError::InvalidPath(format!(
                    "Cannot navigate into {} at path '{}'",
                    other.type_str(),
                    segments[..=i].join(".")
                )));
            }
        };
    }

    Ok(current)
}

/// Replaces the table at `segments` with `table`
///
/// # Errors
/// * `ConfigError::InvalidPath` - If the path is empty or crosses a non-table value
pub(super) fn replace_table(
    root: &mut Table,
    segments: &[&str],
    table: Table,
) -> Result<(), ConfigError> {
    let Some((last, parents)) = segments.split_last() else {
        return Err(ConfigError::InvalidPath("Empty path".to_string()));
    };

    let parent = navigate_table_mut(root, parents)?;
    parent.insert(last.to_string(), Value::Table(table));

    Ok(())
}

/// Removes the entry at `segments`
///
/// # Returns
/// Whether an entry was removed
pub(super) fn remove_entry(root: &mut Table, segments: &[&str]) -> bool {
    let Some((last, parents)) = segments.split_last() else {
        return false;
    };

    let mut current = root;
    for segment in parents {
        match current.get_mut(*segment) {
            Some(Value::Table(table)) => current = table,
            _ => return false,
        }
    }

    current.remove(*last).is_some()
}
