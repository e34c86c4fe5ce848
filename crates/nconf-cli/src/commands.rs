use anyhow::Context;
use nconf_diff::compare;
use nconf_tree::{Config, LineNode};
use tracing::debug;

use crate::cli::*;
use crate::render;
use crate::settings::Settings;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    let format = cli.format.or(settings.format).unwrap_or_default();
    let output = match cli.command {
        Command::Tree(args) => cmd_tree(args, format)?,
        Command::Search(args) => cmd_search(args, format)?,
        Command::Diff(args) => cmd_diff(args, &settings, format)?,
    };
    print!("{output}");
    Ok(())
}

fn load(path: &std::path::Path) -> anyhow::Result<Config> {
    let config = Config::from_file(path)?;
    debug!(path = %path.display(), lines = config.len(), "loaded configuration");
    Ok(config)
}

fn cmd_tree(args: TreeArgs, format: OutputFormat) -> anyhow::Result<String> {
    let config = load(&args.file)?;
    let lines: Vec<&LineNode> = if args.roots {
        config.root_lines()
    } else {
        config.lines().iter().collect()
    };
    match format {
        OutputFormat::Text => text(|out| render::render_lines(out, &config, &lines)),
        OutputFormat::Json => json(&lines),
    }
}

fn cmd_search(args: SearchArgs, format: OutputFormat) -> anyhow::Result<String> {
    let config = load(&args.file)?;
    let found = config.search(&args.prefix, args.level, args.parent.as_deref());
    match format {
        OutputFormat::Text => text(|out| render::render_matches(out, &config, &found)),
        OutputFormat::Json => json(&found),
    }
}

fn cmd_diff(args: DiffArgs, settings: &Settings, format: OutputFormat) -> anyhow::Result<String> {
    let reference = load(&args.reference)?;
    let compared = load(&args.compared)?;
    let ignore = args
        .ignore
        .or_else(|| settings.ignore_regex.clone())
        .unwrap_or_default();
    let diff = compare(&reference, &compared, &ignore).context("comparing configurations")?;
    match format {
        OutputFormat::Text => text(|out| render::render_diff(out, &diff)),
        OutputFormat::Json => json(&diff),
    }
}

fn text(render: impl FnOnce(&mut String) -> std::fmt::Result) -> anyhow::Result<String> {
    let mut out = String::new();
    render(&mut out).context("rendering output")?;
    Ok(out)
}

fn json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use tempfile::NamedTempFile;

    use super::*;

    fn file(text: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(text.as_bytes()).unwrap();
        f
    }

    #[test]
    fn tree_json_lists_every_line() {
        let f = file("a\n b\n");
        let out = cmd_tree(
            TreeArgs {
                file: f.path().to_path_buf(),
                roots: false,
            },
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[1]["level"], 1);
    }

    #[test]
    fn search_json_returns_matches() {
        let f = file("interface Gi0/1\n description x\ninterface Gi0/2\n");
        let args = SearchArgs {
            file: f.path().to_path_buf(),
            prefix: "interface".into(),
            level: 0,
            parent: None,
        };
        let out = cmd_search(args, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[1]["content"][1], "Gi0/2");
    }

    #[test]
    fn diff_uses_settings_ignore_when_flag_absent() {
        let a = file("! generated 1\nhostname r1\n");
        let b = file("! generated 2\nhostname r1\n");
        let args = || DiffArgs {
            reference: a.path().to_path_buf(),
            compared: b.path().to_path_buf(),
            ignore: None,
        };
        let settings = Settings {
            ignore_regex: Some("^!".into()),
            format: None,
        };
        let out = cmd_diff(args(), &settings, OutputFormat::Text).unwrap();
        assert_eq!(out, "No differences.\n");

        let out = cmd_diff(args(), &Settings::default(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["modified_root"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn diff_reports_bad_pattern() {
        let a = file("hostname r1\n");
        let args = DiffArgs {
            reference: a.path().to_path_buf(),
            compared: a.path().to_path_buf(),
            ignore: Some("(".into()),
        };
        assert!(cmd_diff(args, &Settings::default(), OutputFormat::Text).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let args = TreeArgs {
            file: PathBuf::from("/nonexistent/nconf.cfg"),
            roots: true,
        };
        assert!(cmd_tree(args, OutputFormat::Text).is_err());
    }
}
