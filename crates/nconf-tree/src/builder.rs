//! Tree builder: turns tokenized lines into a linked forest in one pass.
//!
//! The builder keeps a stack of currently open ancestors. Raw indentation
//! only decides how far to unwind that stack; the structural level of a node
//! is always its parent's level plus one, so non-uniform indentation (one
//! space per level in one block, three in another) still nests correctly.
//!
//! # Invariants
//!
//! - The first line is level 0 whatever its indentation.
//! - `level == 0` iff `parent.is_none()`, otherwise `level == parent.level + 1`.
//! - Nodes are appended in pre-order, so every subtree is a contiguous run
//!   of the line list starting at its root.

use tracing::{debug, warn};

use crate::anomaly::{Anomaly, AnomalyKind};
use crate::config::Config;
use crate::node::{LineNode, NodeId};
use crate::token::{tokenize, tokenize_line, TokenizedLine};

/// An open ancestor on the indentation stack.
#[derive(Clone, Copy, Debug)]
struct Frame {
    indent: usize,
    id: NodeId,
}

/// Incremental builder for a [`Config`].
///
/// Each builder owns its own indentation stack; build state is never shared
/// between parses.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    lines: Vec<LineNode>,
    roots: Vec<NodeId>,
    anomalies: Vec<Anomaly>,
    stack: Vec<Frame>,
    baseline: Option<usize>,
}

impl TreeBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a container from a whole text blob.
    pub fn build(text: &str) -> Config {
        let mut builder = Self::new();
        for line in tokenize(text) {
            builder.push(line);
        }
        builder.finish()
    }

    /// Feed one physical line. Blank lines are ignored.
    pub fn push_line(&mut self, line: &str) {
        if let Some(tokenized) = tokenize_line(line) {
            self.push(tokenized);
        }
    }

    /// Feed one already tokenized line.
    pub fn push(&mut self, line: TokenizedLine) {
        let TokenizedLine { indent, tokens } = line;
        let id = NodeId(self.lines.len());
        let line_num = self.lines.len() + 1;

        let below_baseline = match self.baseline {
            None => {
                if indent > 0 {
                    self.record(line_num, indent, AnomalyKind::IndentedFirstLine);
                }
                self.baseline = Some(indent);
                false
            }
            Some(baseline) if indent < baseline => {
                self.record(line_num, indent, AnomalyKind::IndentBelowBaseline { baseline });
                self.baseline = Some(indent);
                true
            }
            Some(_) => false,
        };

        // Unwind every open block that this line does not nest inside.
        let mut closed_indent = None;
        while let Some(top) = self.stack.last() {
            if top.indent < indent {
                break;
            }
            closed_indent = Some(top.indent);
            self.stack.pop();
        }
        if let Some(expected_indent) = closed_indent {
            if expected_indent != indent && !below_baseline {
                self.record(line_num, indent, AnomalyKind::MisalignedDedent { expected_indent });
            }
        }

        let parent = self.stack.last().map(|frame| frame.id);
        let level = parent.map_or(0, |p| self.lines[p.0].level + 1);

        self.lines
            .push(LineNode::new(id, tokens, line_num, level, indent, parent));
        match parent {
            Some(p) => self.lines[p.0].children.push(id),
            None => self.roots.push(id),
        }
        self.stack.push(Frame { indent, id });
    }

    /// Finalize the tree and compute derived counts.
    pub fn finish(mut self) -> Config {
        // Children always follow their parent, so a reverse sweep sees every
        // child's count before the parent needs it.
        for i in (0..self.lines.len()).rev() {
            let count = self.lines[i]
                .children
                .iter()
                .map(|c| 1 + self.lines[c.0].descendant_count)
                .sum();
            self.lines[i].descendant_count = count;
        }

        debug!(
            lines = self.lines.len(),
            roots = self.roots.len(),
            anomalies = self.anomalies.len(),
            "built configuration tree"
        );
        Config::from_parts(self.lines, self.roots, self.anomalies)
    }

    fn record(&mut self, line_num: usize, indent: usize, kind: AnomalyKind) {
        let anomaly = Anomaly {
            line_num,
            indent,
            kind,
        };
        warn!(%anomaly, "irregular indentation");
        self.anomalies.push(anomaly);
    }
}
