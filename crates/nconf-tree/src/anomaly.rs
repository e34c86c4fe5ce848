//! Indentation irregularities tolerated by the tree builder.
//!
//! Real device output is not always indented consistently. The builder never
//! rejects input; it places each irregular line at the nearest consistent
//! level and records what it did here.

use std::fmt;

use serde::Serialize;

/// A structural irregularity found while building a configuration tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Anomaly {
    /// 1-based non-blank line number of the offending line.
    pub line_num: usize,
    /// Raw indentation of the offending line.
    pub indent: usize,
    /// What was irregular about it.
    pub kind: AnomalyKind,
}

/// The kind of indentation irregularity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnomalyKind {
    /// The first line is indented. It is a root and its indent is the baseline.
    IndentedFirstLine,
    /// The line is indented less than the first line. It is treated as a root.
    IndentBelowBaseline {
        /// Indentation of the first line.
        baseline: usize,
    },
    /// The line dedents to a column no open ancestor sits at. It is attached
    /// under the nearest shallower ancestor.
    MisalignedDedent {
        /// The column of the closed block it failed to line up with.
        expected_indent: usize,
    },
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            AnomalyKind::IndentedFirstLine => write!(
                f,
                "line {}: first line indented by {}, treated as level 0",
                self.line_num, self.indent
            ),
            AnomalyKind::IndentBelowBaseline { baseline } => write!(
                f,
                "line {}: indent {} is below baseline {}, treated as root",
                self.line_num, self.indent, baseline
            ),
            AnomalyKind::MisalignedDedent { expected_indent } => write!(
                f,
                "line {}: dedent to column {} matches no open block (expected {})",
                self.line_num, self.indent, expected_indent
            ),
        }
    }
}
