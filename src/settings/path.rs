use super::SettingsNode;

/// Separator between the segments of a dotted path.
pub const PATH_SEPARATOR: char = '.';

/// Outcome of walking a dotted path down the group hierarchy.
pub enum PathLookup<'a> {
    /// Every group segment resolved; `leaf` still has to be checked against `node`.
    Found {
        /// The node that should own the leaf
        node: &'a mut dyn SettingsNode,
        /// The final path segment
        leaf: &'a str,
    },
    /// A group segment did not resolve.
    NotFound {
        /// The full path as given
        path: &'a str,
    },
}

/// Splits `path` into its group segments and its leaf segment.
pub fn split_path(path: &str) -> (Vec<&str>, &str) {
    match path.rsplit_once(PATH_SEPARATOR) {
        Some((groups, leaf)) => (groups.split(PATH_SEPARATOR).collect(), leaf),
        None => (Vec::new(), path),
    }
}

/// Walks the group segments of `path` starting at `root`.
///
/// Resolution stops at the first segment that is not a child group of the
/// current node; the reported path is always the full original one.
pub fn resolve<'a>(root: &'a mut dyn SettingsNode, path: &'a str) -> PathLookup<'a> {
    let (groups, leaf) = split_path(path);
    let mut node = root;

    for segment in groups {
        node = match node.group_mut(segment) {
            Some(child) => child,
            None => return PathLookup::NotFound { path },
        };
    }

    PathLookup::Found { node, leaf }
}
