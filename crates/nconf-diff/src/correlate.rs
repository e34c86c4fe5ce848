//! The identity rule that decides whether two lines are the same entry.
//!
//! Two token sequences name the same logical line when they have the same
//! length, start with the same keyword, and differ in at most one token
//! position. A single differing token is the entry's changed value:
//! `hostname old` vs `hostname new`, or an `ip address` whose address moved
//! while the netmask stayed. Lines that differ in two or more positions, or
//! in their keyword, are different entries.
//!
//! The keyword always has to agree, so one-token lines correlate only when
//! they are equal: `end` and `exit` are two entries, not one modified entry.
//! A bare "all tokens but the last" rule would pair them.

use serde::Serialize;

/// How two token sequences relate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Correlation {
    /// Every token is equal.
    Identical,
    /// Same entry, exactly one non-keyword token differs.
    Modified,
    /// Different entries.
    Unrelated,
}

/// Classify token sequence `a` against `b`.
///
/// One-token sequences are `Identical` or `Unrelated`, never `Modified`.
pub fn correlate(a: &[String], b: &[String]) -> Correlation {
    if a.len() != b.len() || a.first() != b.first() {
        return Correlation::Unrelated;
    }
    let differing = a.iter().zip(b).filter(|(x, y)| x != y).count();
    match differing {
        0 => Correlation::Identical,
        1 => Correlation::Modified,
        _ => Correlation::Unrelated,
    }
}

/// Lookup key shared by two sequences exactly when they correlate as
/// `wanted`.
///
/// `None` keys the full sequence. `Some(p)` keys the sequence with position
/// `p` left out; two sequences differing only at `p` share it. Position 0
/// is the keyword and never gets a wildcard key.
pub(crate) type IdentityKey<'n> = (Option<usize>, Vec<&'n str>);

/// Every identity key of `content` for the given pass.
///
/// Identical sequences share their single `None` key. Sequences differing
/// in exactly one non-keyword position share exactly one `Some` key.
pub(crate) fn identity_keys(content: &[String], wanted: Correlation) -> Vec<IdentityKey<'_>> {
    match wanted {
        Correlation::Identical => vec![(None, content.iter().map(String::as_str).collect())],
        Correlation::Modified => (1..content.len())
            .map(|p| {
                let rest = content
                    .iter()
                    .enumerate()
                    .filter(|&(q, _)| q != p)
                    .map(|(_, t)| t.as_str())
                    .collect();
                (Some(p), rest)
            })
            .collect(),
        Correlation::Unrelated => Vec::new(),
    }
}
