//! Include-path utilities for JSON:API decoding.
//!
//! An include list such as `"author.categories,author.article.author"` names
//! which relationship keys a decoder may expand: paths are comma-separated,
//! segments are dot-separated, and each segment descends one relationship
//! level. Parsing builds an [`IncludeTree`], a prefix tree in which paths
//! with a common prefix share structure.

use indexmap::IndexMap;

/// Nested mapping of expandable relationship keys, one level per node.
///
/// A key present at a node means "expand this relationship one level, then
/// recurse using the child node". A node with no children terminates
/// expansion, which is what keeps traversal of cyclic resource graphs
/// bounded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncludeTree {
    children: IndexMap<String, IncludeTree>,
}

impl IncludeTree {
    /// Creates an empty tree, which expands nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a comma/dot-separated include list.
    ///
    /// Empty paths and empty segments are skipped, so `""` yields an empty
    /// tree and `"a..b"` is equivalent to `"a.b"`. Parsing is total: every
    /// input string is a valid include list.
    ///
    /// Examples:
    /// - `"author" -> {author}`
    /// - `"author.article,author.categories" -> {author: {article, categories}}`
    pub fn parse(spec: &str) -> Self {
        let mut tree = IncludeTree::new();
        for path in spec.split(',') {
            tree.insert_path(path);
        }
        tree
    }

    /// Inserts one dot-separated path, sharing prefixes with existing paths.
    pub fn insert_path(&mut self, path: &str) {
        let mut node = self;
        for segment in path.split('.').filter(|segment| !segment.is_empty()) {
            node = node.children.entry(segment.to_string()).or_default();
        }
    }

    /// Child node for a relationship key, if that key is expandable here.
    pub fn child(&self, key: &str) -> Option<&IncludeTree> {
        self.children.get(key)
    }

    /// Expandable relationship keys at this level, in include-list order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    /// Keys paired with their child nodes, in include-list order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IncludeTree)> {
        self.children
            .iter()
            .map(|(key, child)| (key.as_str(), child))
    }

    /// Number of expandable relationship keys at this level.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True if no keys are expandable at this level.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Formats the tree back into an include list.
    ///
    /// Inverse of [`IncludeTree::parse`]: one dot-path per leaf, comma-joined
    /// in insertion order, so `parse(format(t)) == t` for every tree.
    pub fn format(&self) -> String {
        let mut paths = Vec::new();
        self.collect_paths(&mut Vec::new(), &mut paths);
        paths.join(",")
    }

    fn collect_paths(&self, prefix: &mut Vec<String>, out: &mut Vec<String>) {
        if self.children.is_empty() {
            if !prefix.is_empty() {
                out.push(prefix.join("."));
            }
            return;
        }
        for (key, child) in &self.children {
            prefix.push(key.clone());
            child.collect_paths(prefix, out);
            prefix.pop();
        }
    }
}
