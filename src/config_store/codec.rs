//! Conversion between settings nodes and TOML tables.
//!
//! Leaves are stored in their canonical text form so that loading can go back
//! through the same parser registry the command line uses. Leaves that follow
//! their default are not stored at all.

use toml::{Table, Value};
use tracing::warn;

use crate::settings::{MemberKind, SettingState, SettingsNode, parser};

/// Encodes the explicitly set leaves of `node` and its groups.
///
/// Empty groups are omitted.
pub fn encode_node(node: &dyn SettingsNode) -> Table {
    let mut table = Table::new();

    for member in node.members() {
        match member.kind {
            MemberKind::Leaf(_) => {
                let Some(setting) = node.setting(member.name) else {
                    continue;
                };
                match setting.state() {
                    SettingState::Unset => {
                        table.insert(
                            member.name.to_string(),
                            Value::String(parser::UNSET_TOKEN.to_string()),
                        );
                    }
                    SettingState::Value(value) => {
                        table.insert(member.name.to_string(), Value::String(value.to_string()));
                    }
                    SettingState::UseDefault => {}
                }
            }
            MemberKind::Group => {
                let Some(child) = node.group(member.name) else {
                    continue;
                };
                let child_table = encode_node(child);
                if !child_table.is_empty() {
                    table.insert(member.name.to_string(), Value::Table(child_table));
                }
            }
        }
    }

    table
}

/// Applies the values stored in `table` to `node`.
///
/// Entries that do not match the schema, or whose text no longer parses, are
/// logged and skipped; the affected leaves keep their defaults.
pub fn decode_node(node: &mut dyn SettingsNode, table: &Table, location: &str) {
    for (key, value) in table {
        let kind = node
            .members()
            .iter()
            .find(|member| member.name == key.as_str())
            .map(|member| member.kind);

        match (kind, value) {
            (Some(MemberKind::Leaf(value_type)), _) => {
                let Some(raw) = stored_text(value) else {
                    warn!(location, key = %key, "ignoring non-scalar stored value");
                    continue;
                };

                let result = parser::parse(value_type, &raw).and_then(|state| {
                    node.setting_mut(key)
                        .map_or(Ok(()), |setting| setting.assign(state))
                });

                if let Err(e) = result {
                    warn!(location, key = %key, raw = %raw, error = %e, "stored value rejected, using default");
                }
            }
            (Some(MemberKind::Group), Value::Table(child_table)) => {
                if let Some(child) = node.group_mut(key) {
                    decode_node(child, child_table, &format!("{location}.{key}"));
                }
            }
            (Some(MemberKind::Group), _) => {
                warn!(location, key = %key, "expected a table for settings group");
            }
            (None, _) => {
                warn!(location, key = %key, "ignoring unknown stored setting");
            }
        }
    }
}

/// Text form of a stored value, accepting hand-written TOML scalars and arrays.
fn stored_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Boolean(b) => Some(b.to_string()),
        Value::Integer(i) => Some(i.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Array(items) => items
            .iter()
            .map(stored_text)
            .collect::<Option<Vec<_>>>()
            .map(|items| items.join(", ")),
        Value::Datetime(_) | Value::Table(_) => None,
    }
}
