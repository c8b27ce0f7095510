//! Terminal rendering of settings trees.

mod tree;

#[cfg(test)]
mod tests;

pub use tree::{FALLBACK_WIDTH, elide, render_object, render_tree, terminal_width};
