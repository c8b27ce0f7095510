use std::collections::VecDeque;

use crate::settings::SettingsNode;

/// Width assumed when the terminal size cannot be queried.
pub const FALLBACK_WIDTH: usize = 80;

const ELLIPSIS: &str = "(..)";

/// Columns of the terminal attached to stdout.
pub fn terminal_width() -> usize {
    match crossterm::terminal::size() {
        Ok((columns, _)) if columns > 0 => usize::from(columns),
        _ => FALLBACK_WIDTH,
    }
}

/// Renders `node` and all of its groups for the current terminal.
pub fn render_object(node: &dyn SettingsNode, name: &str) -> String {
    render_tree(node, name, terminal_width())
}

/// Renders `node` as a tree diagram `width` columns wide.
///
/// Each node is drawn as a block: a connector line, the node's name with its
/// first child inline, then one line per remaining child. Leaves come before
/// groups and show their current value. A blank line ends the block, after
/// which every group is rendered the same way, depth first.
///
/// ```text
///         +
/// account --|-- display_name = None
///           |-- enabled = true
///           +-- sip
/// ```
pub fn render_tree(node: &dyn SettingsNode, name: &str, width: usize) -> String {
    let mut out = String::new();
    write_node(&mut out, node, name, width);
    out
}

fn write_node(out: &mut String, node: &dyn SettingsNode, name: &str, width: usize) {
    let name_width = name.chars().count();
    let indent = " ".repeat(name_width + 3);
    let room = width.saturating_sub(name_width + 7);

    let group_names = node.group_names();
    let mut children: VecDeque<&str> = node
        .leaf_names()
        .into_iter()
        .chain(group_names.iter().copied())
        .collect();

    out.push_str(&indent);
    out.push_str("+\n");

    out.push_str(name);
    out.push_str(" --|");
    if let Some(first) = children.pop_front() {
        out.push_str("-- ");
        out.push_str(&format_child(node, first, room));
    }
    out.push('\n');

    if children.is_empty() {
        out.push_str(&indent);
        out.push_str("+\n");
    }
    while let Some(child) = children.pop_front() {
        let connector = if children.is_empty() { '+' } else { '|' };
        out.push_str(&indent);
        out.push(connector);
        out.push_str("-- ");
        out.push_str(&format_child(node, child, room));
        out.push('\n');
    }

    out.push('\n');

    for group_name in group_names {
        if let Some(group) = node.group(group_name) {
            write_node(out, group, group_name, width);
        }
    }
}

/// `name = value` for leaves, the bare name for groups.
fn format_child(node: &dyn SettingsNode, name: &str, room: usize) -> String {
    let Some(setting) = node.setting(name) else {
        return name.to_string();
    };

    let max_chars = room.saturating_sub(name.chars().count() + 4);
    format!("{name} = {}", elide(&setting.to_string(), max_chars))
}

/// Keeps the tail of `text` behind `(..)` when it exceeds `max_chars`.
pub fn elide(text: &str, max_chars: usize) -> String {
    let length = text.chars().count();
    if length <= max_chars {
        return text.to_string();
    }

    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let tail: String = text.chars().skip(length - keep).collect();
    format!("{ELLIPSIS}{tail}")
}
