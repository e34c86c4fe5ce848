//! Line node types: one parsed configuration line and its structural links.
//!
//! Nodes are owned by a [`Config`](crate::Config) arena. Relationships are
//! stored as [`NodeId`] indices into that arena; resolving them requires the
//! container (see [`Config::parent`](crate::Config::parent) and friends).

use std::fmt;

use serde::Serialize;

/// Stable index of a node within its owning container.
///
/// Ids are assigned in source order, so comparing two ids from the same
/// container compares their positions in the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Zero-based position of the node in the container's line list.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One non-blank configuration line.
///
/// Immutable once the container is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LineNode {
    /// Arena index of this node.
    pub id: NodeId,
    /// Whitespace-split tokens of the line.
    pub content: Vec<String>,
    /// 1-based position among non-blank lines.
    pub line_num: usize,
    /// Structural nesting depth; 0 for root lines.
    pub level: usize,
    /// Raw count of leading indentation characters in the source.
    pub indent: usize,
    /// The enclosing line, if any.
    pub parent: Option<NodeId>,
    /// Direct children in source order.
    pub children: Vec<NodeId>,
    /// Size of the full descendant subtree, fixed at build time.
    #[serde(rename = "all_children_count")]
    pub(crate) descendant_count: usize,
}

impl LineNode {
    pub(crate) fn new(
        id: NodeId,
        content: Vec<String>,
        line_num: usize,
        level: usize,
        indent: usize,
        parent: Option<NodeId>,
    ) -> Self {
        Self {
            id,
            content,
            line_num,
            level,
            indent,
            parent,
            children: Vec::new(),
            descendant_count: 0,
        }
    }

    /// Returns `true` if this line has at least one child.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns `true` if this line is nested under another line.
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// Returns `true` if this line has neither a parent nor children.
    pub fn lone_line(&self) -> bool {
        !self.has_parent() && !self.has_children()
    }

    /// Returns `true` for level-0 lines.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Number of direct children.
    pub fn direct_children_count(&self) -> usize {
        self.children.len()
    }

    /// Number of lines in the whole subtree below this one.
    pub fn all_children_count(&self) -> usize {
        self.descendant_count
    }

    /// The tokens joined by single spaces.
    pub fn text(&self) -> String {
        self.content.join(" ")
    }
}

impl fmt::Display for LineNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(content: &[&str]) -> LineNode {
        LineNode::new(
            NodeId(0),
            content.iter().map(|s| s.to_string()).collect(),
            1,
            0,
            0,
            None,
        )
    }

    #[test]
    fn text_joins_tokens_with_single_spaces() {
        let n = node(&["ip", "address", "10.0.0.1", "255.255.255.0"]);
        assert_eq!(n.text(), "ip address 10.0.0.1 255.255.255.0");
        assert_eq!(n.to_string(), n.text());
    }

    #[test]
    fn fresh_root_is_lone() {
        let n = node(&["hostname", "r1"]);
        assert!(n.lone_line());
        assert!(n.is_root());
        assert!(!n.has_children());
        assert_eq!(n.direct_children_count(), 0);
        assert_eq!(n.all_children_count(), 0);
    }

    #[test]
    fn node_with_child_is_not_lone() {
        let mut n = node(&["interface", "Gi0/1"]);
        n.children.push(NodeId(1));
        assert!(!n.lone_line());
        assert!(n.has_children());
    }

    #[test]
    fn serializes_descendant_count_under_public_name() {
        let n = node(&["hostname", "r1"]);
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["all_children_count"], 0);
        assert_eq!(json["content"][1], "r1");
        assert_eq!(json["id"], 0);
    }
}
