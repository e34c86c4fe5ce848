//! Configuration comparison: correlate two trees level by level.
//!
//! Root lines of both trees are matched first. Every matched pair then has
//! its children matched the same way, whether or not the pair itself was
//! modified. Unmatched lines are reported as deleted or added and their
//! subtrees are not descended into, so a removed block shows up once at its
//! top line.

use serde::Serialize;
use tracing::debug;

use nconf_tree::{Config, LineNode};

use crate::config::CompareOptions;
use crate::correlate::Correlation;
use crate::error::DiffResult;
use crate::filter::IgnoreFilter;
use crate::matcher::match_level;

/// A reference line and the compared line it was correlated with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LinePair<'a> {
    /// The line in the reference configuration.
    pub reference: &'a LineNode,
    /// The line in the compared configuration.
    pub compared: &'a LineNode,
}

impl LinePair<'_> {
    /// Returns `true` if the two lines differ in content.
    pub fn is_modified(&self) -> bool {
        self.reference.content != self.compared.content
    }
}

/// Modified children sharing one matched parent pair.
///
/// Only the parent's direct children are listed. Modified grandchildren form
/// their own group under the child pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChildGroup<'a> {
    /// The matched parent pair.
    pub parent: LinePair<'a>,
    /// Modified direct children of that parent, in reference order.
    pub modified: Vec<LinePair<'a>>,
}

/// The result of comparing two configurations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ConfigDiff<'a> {
    /// Reference lines with no counterpart, in reference source order.
    pub deleted: Vec<&'a LineNode>,
    /// Compared lines with no counterpart, in compared source order.
    pub added: Vec<&'a LineNode>,
    /// Modified level-0 lines.
    pub modified_root: Vec<LinePair<'a>>,
    /// Modified child lines grouped by matched parent, in pre-order of the
    /// reference tree: a parent's group precedes the groups below it, and
    /// sibling subtrees follow reference source order. The groups of a deep
    /// block therefore come before those of a later shallow one.
    pub modified_children: Vec<ChildGroup<'a>>,
}

impl<'a> ConfigDiff<'a> {
    /// Returns `true` if the configurations are equivalent.
    pub fn is_empty(&self) -> bool {
        self.deleted.is_empty()
            && self.added.is_empty()
            && self.modified_root.is_empty()
            && self.modified_children.is_empty()
    }

    /// Total number of reported lines and modified pairs.
    pub fn len(&self) -> usize {
        self.deleted.len()
            + self.added.len()
            + self.modified_root.len()
            + self
                .modified_children
                .iter()
                .map(|g| g.modified.len())
                .sum::<usize>()
    }

    /// Split into `(deleted, added, modified_root, modified_children)`.
    #[allow(clippy::type_complexity)]
    pub fn into_parts(
        self,
    ) -> (
        Vec<&'a LineNode>,
        Vec<&'a LineNode>,
        Vec<LinePair<'a>>,
        Vec<ChildGroup<'a>>,
    ) {
        (
            self.deleted,
            self.added,
            self.modified_root,
            self.modified_children,
        )
    }
}

/// Compare `compared` against `reference`.
///
/// Lines whose rendered text matches `ignore_regex` are removed from both
/// trees, with their subtrees, before any matching. An empty pattern ignores
/// nothing. Fails only if the pattern does not compile.
pub fn compare<'a>(
    reference: &'a Config,
    compared: &'a Config,
    ignore_regex: &str,
) -> DiffResult<ConfigDiff<'a>> {
    let filter = IgnoreFilter::new(ignore_regex)?;
    let mut walker = Walker {
        reference,
        compared,
        filter: &filter,
        diff: ConfigDiff::default(),
    };
    walker.walk(None, reference.root_lines(), compared.root_lines());

    let mut diff = walker.diff;
    diff.deleted.sort_by_key(|line| line.id);
    diff.added.sort_by_key(|line| line.id);
    debug!(
        deleted = diff.deleted.len(),
        added = diff.added.len(),
        modified_root = diff.modified_root.len(),
        groups = diff.modified_children.len(),
        "compared configurations"
    );
    Ok(diff)
}

/// [`compare`] driven by a [`CompareOptions`].
pub fn compare_with<'a>(
    reference: &'a Config,
    compared: &'a Config,
    options: &CompareOptions,
) -> DiffResult<ConfigDiff<'a>> {
    compare(reference, compared, &options.ignore_regex)
}

struct Walker<'a, 'f> {
    reference: &'a Config,
    compared: &'a Config,
    filter: &'f IgnoreFilter,
    diff: ConfigDiff<'a>,
}

impl<'a> Walker<'a, '_> {
    fn walk(
        &mut self,
        parent: Option<LinePair<'a>>,
        reference: Vec<&'a LineNode>,
        compared: Vec<&'a LineNode>,
    ) {
        let reference = self.filter.retain(reference);
        let compared = self.filter.retain(compared);
        let outcome = match_level(&reference, &compared);

        debug!(
            level = parent.map_or(0, |p| p.reference.level + 1),
            pairs = outcome.pairs.len(),
            deleted = outcome.unmatched_reference.len(),
            added = outcome.unmatched_compared.len(),
            "matched level"
        );

        self.diff
            .deleted
            .extend(outcome.unmatched_reference.iter().map(|&i| reference[i]));
        self.diff
            .added
            .extend(outcome.unmatched_compared.iter().map(|&j| compared[j]));

        let mut matched = Vec::with_capacity(outcome.pairs.len());
        let mut modified = Vec::new();
        for pairing in &outcome.pairs {
            let pair = LinePair {
                reference: reference[pairing.reference],
                compared: compared[pairing.compared],
            };
            if pairing.correlation == Correlation::Modified {
                modified.push(pair);
            }
            matched.push(pair);
        }

        match parent {
            None => self.diff.modified_root.extend(modified),
            Some(parent) if !modified.is_empty() => {
                self.diff
                    .modified_children
                    .push(ChildGroup { parent, modified });
            }
            Some(_) => {}
        }

        let (ref_config, cmp_config) = (self.reference, self.compared);
        for pair in matched {
            if !pair.reference.has_children() && !pair.compared.has_children() {
                continue;
            }
            let ref_children = ref_config.children(pair.reference);
            let cmp_children = cmp_config.children(pair.compared);
            self.walk(Some(pair), ref_children, cmp_children);
        }
    }
}
