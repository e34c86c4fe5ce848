use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(
    name = "nconf",
    about = "Parse, search and compare indented device configurations",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log matching and build details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format; overrides the settings file
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// TOML settings file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the parsed line tree of a configuration
    Tree(TreeArgs),
    /// Find lines by prefix, level and parent prefix
    Search(SearchArgs),
    /// Compare a configuration against a reference
    Diff(DiffArgs),
}

#[derive(Args)]
pub struct TreeArgs {
    pub file: PathBuf,
    /// Only list root lines
    #[arg(long)]
    pub roots: bool,
}

#[derive(Args)]
pub struct SearchArgs {
    pub file: PathBuf,
    pub prefix: String,
    #[arg(short, long, default_value = "0")]
    pub level: usize,
    /// Require the parent line to start with this
    #[arg(short, long)]
    pub parent: Option<String>,
}

#[derive(Args)]
pub struct DiffArgs {
    pub reference: PathBuf,
    pub compared: PathBuf,
    /// Regex of lines to leave out of the comparison
    #[arg(short, long)]
    pub ignore: Option<String>,
}
