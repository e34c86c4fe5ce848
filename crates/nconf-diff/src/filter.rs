//! Ignore filtering applied to both trees before matching.

use regex::Regex;

use nconf_tree::LineNode;

use crate::error::{DiffError, DiffResult};

/// Compiled ignore pattern. An empty pattern ignores nothing.
#[derive(Clone, Debug, Default)]
pub struct IgnoreFilter {
    pattern: Option<Regex>,
}

impl IgnoreFilter {
    /// Compile `pattern`. Fails with [`DiffError::InvalidPattern`] if it is
    /// not a valid regex.
    pub fn new(pattern: &str) -> DiffResult<Self> {
        if pattern.is_empty() {
            return Ok(Self::default());
        }
        let regex = Regex::new(pattern).map_err(|source| DiffError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            pattern: Some(regex),
        })
    }

    /// Returns `true` if the line's rendered text matches anywhere.
    pub fn is_ignored(&self, line: &LineNode) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|re| re.is_match(&line.text()))
    }

    /// Keep only the lines that are not ignored, preserving order.
    pub fn retain<'a>(&self, lines: Vec<&'a LineNode>) -> Vec<&'a LineNode> {
        if self.pattern.is_none() {
            return lines;
        }
        lines.into_iter().filter(|l| !self.is_ignored(l)).collect()
    }
}
