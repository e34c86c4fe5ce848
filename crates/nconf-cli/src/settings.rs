use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;

/// Defaults read from an optional TOML file. Command-line flags win.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Ignore pattern used by `diff` when `--ignore` is not given.
    pub ignore_regex: Option<String>,
    /// Output format used when `--format` is not given.
    pub format: Option<OutputFormat>,
}

impl Settings {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading settings {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing settings {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Settings::parse("").unwrap(), Settings::default());
    }

    #[test]
    fn reads_both_keys() {
        let s = Settings::parse("ignore_regex = \"^!\"\nformat = \"json\"\n").unwrap();
        assert_eq!(s.ignore_regex.as_deref(), Some("^!"));
        assert_eq!(s.format, Some(OutputFormat::Json));
    }

    #[test]
    fn unknown_format_is_an_error() {
        assert!(Settings::parse("format = \"yaml\"").is_err());
    }

    #[test]
    fn load_without_path_is_default() {
        assert_eq!(Settings::load(None).unwrap(), Settings::default());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ignore_regex = \"clock-period\"").unwrap();
        let s = Settings::load(Some(file.path())).unwrap();
        assert_eq!(s.ignore_regex.as_deref(), Some("clock-period"));
        assert!(s.format.is_none());
    }
}
