//! Line search by content prefix and structural position.

use crate::config::Config;
use crate::node::LineNode;

/// Find lines whose rendered text starts with `search_string` at `level`.
///
/// When `parent_start_with` is given, a line also needs a parent whose
/// rendered text starts with it. Matching is a plain, case-sensitive string
/// prefix test. Results are in source order; no match yields an empty vec.
pub fn search_line_start_with<'a>(
    config: &'a Config,
    search_string: &str,
    level: usize,
    parent_start_with: Option<&str>,
) -> Vec<&'a LineNode> {
    config
        .lines()
        .iter()
        .filter(|line| line.level == level)
        .filter(|line| line.text().starts_with(search_string))
        .filter(|line| match parent_start_with {
            None => true,
            Some(prefix) => config
                .parent(line)
                .is_some_and(|parent| parent.text().starts_with(prefix)),
        })
        .collect()
}
