use serde::{Deserialize, Serialize};

/// Settings for a single comparison.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    /// Lines whose rendered text matches this regex are left out of the
    /// comparison entirely, together with their subtrees. Empty disables
    /// filtering.
    pub ignore_regex: String,
}

impl CompareOptions {
    /// Options that ignore lines matching `pattern`.
    pub fn ignoring(pattern: impl Into<String>) -> Self {
        Self {
            ignore_regex: pattern.into(),
        }
    }
}
