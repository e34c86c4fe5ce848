//! The configuration container: owns every parsed line.
//!
//! A [`Config`] is built once and is read-only afterwards. Parsing, searching
//! and diffing can run on independent containers from any number of threads.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::anomaly::Anomaly;
use crate::builder::TreeBuilder;
use crate::error::{TreeError, TreeResult};
use crate::node::{LineNode, NodeId};
use crate::search::search_line_start_with;

/// A parsed configuration: the full line arena and its root lines.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Config {
    /// All lines in source order. `lines[i].id == NodeId(i)`.
    lines: Vec<LineNode>,
    /// Level-0 lines in source order.
    roots: Vec<NodeId>,
    /// Irregularities tolerated while building.
    anomalies: Vec<Anomaly>,
}

impl Config {
    pub(crate) fn from_parts(
        lines: Vec<LineNode>,
        roots: Vec<NodeId>,
        anomalies: Vec<Anomaly>,
    ) -> Self {
        Self {
            lines,
            roots,
            anomalies,
        }
    }

    /// Parse a configuration from an in-memory text blob.
    pub fn from_text(text: &str) -> Self {
        TreeBuilder::build(text)
    }

    /// Parse a configuration from the contents of a file that the caller
    /// already read. Identical to [`Config::from_text`].
    pub fn from_file_contents(text: &str) -> Self {
        Self::from_text(text)
    }

    /// Read and parse a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> TreeResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| TreeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(&text))
    }

    /// Total number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the configuration has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All lines in source order.
    pub fn lines(&self) -> &[LineNode] {
        &self.lines
    }

    /// All level-0 lines in source order.
    pub fn root_lines(&self) -> Vec<&LineNode> {
        self.resolve(&self.roots)
    }

    /// Indentation irregularities found during the build.
    pub fn anomalies(&self) -> &[Anomaly] {
        &self.anomalies
    }

    /// Look up a node by id.
    pub fn get(&self, id: NodeId) -> Option<&LineNode> {
        self.lines.get(id.0)
    }

    /// Look up a node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this container.
    pub fn node(&self, id: NodeId) -> &LineNode {
        &self.lines[id.0]
    }

    // ---------------------------------------------------------------
    // Relationships
    // ---------------------------------------------------------------

    /// The enclosing line of `node`, if any.
    pub fn parent(&self, node: &LineNode) -> Option<&LineNode> {
        node.parent.and_then(|id| self.get(id))
    }

    /// Direct children of `node` in source order.
    pub fn children(&self, node: &LineNode) -> Vec<&LineNode> {
        self.resolve(&node.children)
    }

    /// Lines sharing `node`'s parent, excluding `node` itself.
    ///
    /// For a root line these are the other root lines.
    pub fn siblings(&self, node: &LineNode) -> Vec<&LineNode> {
        let group = match self.parent(node) {
            Some(parent) => &parent.children,
            None => &self.roots,
        };
        group
            .iter()
            .filter(|&&id| id != node.id)
            .filter_map(|&id| self.get(id))
            .collect()
    }

    /// The whole subtree below `node` in source order, `node` excluded.
    pub fn descendants(&self, node: &LineNode) -> &[LineNode] {
        let start = node.id.0 + 1;
        let end = (start + node.descendant_count).min(self.lines.len());
        self.lines.get(start..end).unwrap_or(&[])
    }

    /// Token contents of the direct children.
    pub fn direct_children(&self, node: &LineNode) -> Vec<&[String]> {
        self.children(node)
            .into_iter()
            .map(|c| c.content.as_slice())
            .collect()
    }

    /// Token contents of every descendant, in source order.
    pub fn all_children(&self, node: &LineNode) -> Vec<&[String]> {
        self.descendants(node)
            .iter()
            .map(|c| c.content.as_slice())
            .collect()
    }

    /// Enclosing lines from the direct parent up to the root.
    pub fn ancestors(&self, node: &LineNode) -> Vec<&LineNode> {
        let mut result = Vec::with_capacity(node.level);
        let mut current = self.parent(node);
        while let Some(parent) = current {
            result.push(parent);
            current = self.parent(parent);
        }
        result
    }

    /// Root-to-node path of rendered lines joined by `" > "`.
    pub fn path(&self, node: &LineNode) -> String {
        let mut parts: Vec<String> = self
            .ancestors(node)
            .iter()
            .rev()
            .map(|a| a.text())
            .collect();
        parts.push(node.text());
        parts.join(" > ")
    }

    /// Shorthand for [`search_line_start_with`] over this container.
    pub fn search(
        &self,
        search_string: &str,
        level: usize,
        parent_start_with: Option<&str>,
    ) -> Vec<&LineNode> {
        search_line_start_with(self, search_string, level, parent_start_with)
    }

    fn resolve(&self, ids: &[NodeId]) -> Vec<&LineNode> {
        ids.iter().filter_map(|&id| self.get(id)).collect()
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration with {} lines", self.lines.len())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const ROUTER: &str = "hostname router1
interface GigabitEthernet0/1
 description WAN Link
 ip address 192.168.1.1 255.255.255.0
 no shutdown
interface GigabitEthernet0/2
 description LAN Link
 ip address 10.0.0.1 255.255.255.0
 no shutdown
router bgp 65000
 neighbor 192.168.1.2
  remote-as 65001
  description Peer Router
 network 10.0.0.0";

    fn texts(nodes: &[&LineNode]) -> Vec<String> {
        nodes.iter().map(|n| n.text()).collect()
    }

    #[test]
    fn parent_with_two_children() {
        let config = Config::from_text("a\n b\n c\n");
        assert_eq!(config.len(), 3);

        let a = &config.lines()[0];
        let b = &config.lines()[1];
        let c = &config.lines()[2];
        assert!(a.is_root());
        assert_eq!(a.direct_children_count(), 2);
        assert_eq!(texts(&config.children(a)), vec!["b", "c"]);

        assert_eq!(texts(&config.siblings(b)), vec!["c"]);
        assert_eq!(texts(&config.siblings(c)), vec!["b"]);
        assert!(!b.lone_line());
        assert!(!c.lone_line());
        assert_eq!(config.parent(b).map(|p| p.id), Some(a.id));
    }

    #[test]
    fn router_summary() {
        let config = Config::from_text(ROUTER);
        assert_eq!(config.len(), 14);
        assert_eq!(
            texts(&config.root_lines()),
            vec![
                "hostname router1",
                "interface GigabitEthernet0/1",
                "interface GigabitEthernet0/2",
                "router bgp 65000",
            ]
        );
        assert_eq!(config.to_string(), "Configuration with 14 lines");

        let hostname = config.root_lines()[0];
        assert!(hostname.lone_line());

        let bgp = config.root_lines()[3];
        assert_eq!(bgp.direct_children_count(), 2);
        assert_eq!(bgp.all_children_count(), 4);
    }

    #[test]
    fn root_siblings_are_other_roots() {
        let config = Config::from_text(ROUTER);
        let hostname = config.root_lines()[0];
        assert_eq!(
            texts(&config.siblings(hostname)),
            vec![
                "interface GigabitEthernet0/1",
                "interface GigabitEthernet0/2",
                "router bgp 65000",
            ]
        );
    }

    #[test]
    fn children_projections_return_contents() {
        let config = Config::from_text(ROUTER);
        let bgp = config.root_lines()[3];
        let direct: Vec<Vec<&str>> = config
            .direct_children(bgp)
            .iter()
            .map(|c| c.iter().map(String::as_str).collect())
            .collect();
        assert_eq!(
            direct,
            vec![vec!["neighbor", "192.168.1.2"], vec!["network", "10.0.0.0"]]
        );

        let all: Vec<String> = config.all_children(bgp).iter().map(|c| c.join(" ")).collect();
        assert_eq!(
            all,
            vec![
                "neighbor 192.168.1.2",
                "remote-as 65001",
                "description Peer Router",
                "network 10.0.0.0",
            ]
        );
    }

    #[test]
    fn leaf_has_no_descendants() {
        let config = Config::from_text(ROUTER);
        let last = config.lines().last().unwrap();
        assert!(config.descendants(last).is_empty());
        assert!(config.all_children(last).is_empty());
    }

    #[test]
    fn ancestors_and_path() {
        let config = Config::from_text(ROUTER);
        let remote_as = &config.lines()[11];
        assert_eq!(remote_as.text(), "remote-as 65001");
        assert_eq!(
            texts(&config.ancestors(remote_as)),
            vec!["neighbor 192.168.1.2", "router bgp 65000"]
        );
        assert_eq!(
            config.path(remote_as),
            "router bgp 65000 > neighbor 192.168.1.2 > remote-as 65001"
        );
        assert_eq!(config.path(config.root_lines()[0]), "hostname router1");
    }

    #[test]
    fn node_lookup_by_id() {
        let config = Config::from_text("a\n b\n");
        let b = &config.lines()[1];
        assert_eq!(config.node(b.id), b);
        assert_eq!(config.get(b.id).map(|n| n.text()), Some("b".to_string()));
    }

    #[test]
    fn from_file_contents_matches_from_text() {
        assert_eq!(Config::from_file_contents(ROUTER), Config::from_text(ROUTER));
    }

    #[test]
    fn from_file_reads_and_parses() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ROUTER.as_bytes()).unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.len(), 14);
    }

    #[test]
    fn from_file_missing_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.cfg");
        let err = Config::from_file(&missing).unwrap_err();
        assert!(matches!(err, TreeError::Io { ref path, .. } if *path == missing));
    }

    #[test]
    fn serializes_lines() {
        let config = Config::from_text("a\n b\n");
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["lines"][1]["parent"], 0);
        assert_eq!(json["roots"][0], 0);
    }
}
