//! Unit tests for the tree renderer.

#![allow(clippy::unwrap_used)]

use crate::{
    render::{FALLBACK_WIDTH, elide, render_tree, terminal_width},
    settings::{SettingState, SettingValue},
    settings_group,
};

settings_group! {
    struct Single {
        leaves: {
            x: Integer = Some(SettingValue::Integer(42)),
        },
        groups: {},
    }
}

settings_group! {
    struct Empty {
        leaves: {},
        groups: {},
    }
}

settings_group! {
    struct Child {
        leaves: {
            enabled: Boolean = Some(SettingValue::Boolean(true)),
        },
        groups: {},
    }
}

settings_group! {
    struct Parent {
        leaves: {
            name: String = None,
            alpha: String = Some(SettingValue::text("a")),
        },
        groups: {
            sub: Child,
        },
    }
}

#[test]
fn single_leaf_node() {
    let rendered = render_tree(&Single::default(), "node", 80);
    assert_eq!(rendered, "       +\nnode --|-- x = 42\n       +\n\n");
}

#[test]
fn node_without_children() {
    let rendered = render_tree(&Empty::default(), "empty", 80);
    assert_eq!(rendered, "        +\nempty --|\n        +\n\n");
}

#[test]
fn leaves_sorted_before_groups_then_groups_recursed() {
    let rendered = render_tree(&Parent::default(), "root", 80);

    let expected = [
        "       +",
        "root --|-- alpha = a",
        "       |-- name = None",
        "       +-- sub",
        "",
        "      +",
        "sub --|-- enabled = true",
        "      +",
        "",
        "",
    ]
    .join("\n");
    assert_eq!(rendered, expected);
}

#[test]
fn explicit_values_are_rendered() {
    let mut tree = Parent::default();
    tree.name
        .assign(SettingState::Value(SettingValue::text("Alice")))
        .unwrap();

    let rendered = render_tree(&tree, "root", 80);
    assert!(rendered.contains("       |-- name = Alice\n"));
}

#[test]
fn long_values_keep_their_tail() {
    let mut tree = Single::default();
    tree.x
        .assign(SettingState::Value(SettingValue::Integer(1_234_567_890)))
        .unwrap();

    // room = 20 - (4 + 7) = 9; max = 9 - (1 + 4) = 4, which leaves no tail
    let rendered = render_tree(&tree, "node", 20);
    assert!(rendered.contains("node --|-- x = (..)\n"));

    // room = 25 - 11 = 14; max = 14 - 5 = 9, keep 5 characters
    let rendered = render_tree(&tree, "node", 25);
    assert!(rendered.contains("node --|-- x = (..)67890\n"));
}

#[test]
fn elide_leaves_short_text_alone() {
    assert_eq!(elide("short", 10), "short");
    assert_eq!(elide("exactly10!", 10), "exactly10!");
}

#[test]
fn elide_counts_characters_not_bytes() {
    assert_eq!(elide("ééééééé", 6), "(..)éé");
}

#[test]
fn elide_with_no_room() {
    assert_eq!(elide("anything", 0), "(..)");
    assert_eq!(elide("anything", 3), "(..)");
}

#[test]
fn terminal_width_is_positive() {
    let width = terminal_width();
    assert!(width > 0);
}

#[test]
fn fallback_width_fits_a_classic_terminal() {
    let rendered = render_tree(&Single::default(), "node", FALLBACK_WIDTH);
    assert!(rendered.lines().all(|line| line.chars().count() <= FALLBACK_WIDTH));
}
