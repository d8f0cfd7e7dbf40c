//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for answer records
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliOutputFormat {
    /// Title header followed by content
    Text,
    /// JSON array of {title, content}
    Json,
}

impl From<CliOutputFormat> for podlens_domain::OutputFormat {
    fn from(format: CliOutputFormat) -> Self {
        match format {
            CliOutputFormat::Text => Self::Text,
            CliOutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for podlens
#[derive(Parser, Debug)]
#[command(name = "podlens")]
#[command(author, version, about = "Ask a computational-knowledge engine and list the answer pods")]
#[command(long_about = r#"
podlens sends a question to the Wolfram|Alpha query API and lists every
answer pod as a titled block of plain text, newest first.

Without a question (or with --chat) an interactive prompt is started:
each line you enter is sent as a question, /clear empties the list.

Configuration files are loaded from (in priority order):
1. PODLENS_<SECTION>__<KEY>   Environment variables
2. --config <path>            Explicit config file
3. ./podlens.toml             Project-level config
4. ~/.config/podlens/config.toml   Global config

Example:
  podlens --app-id XXXX-XXXXXXXXXX "integrate x^2 sin x"
  podlens -o json "population of France"
  podlens --chat
"#)]
pub struct Cli {
    /// The question to ask (starts interactive mode when omitted)
    pub question: Option<String>,

    /// Start interactive mode
    #[arg(short, long)]
    pub chat: bool,

    /// Application id for the answer service
    #[arg(long, value_name = "ID", env = "PODLENS_APP_ID")]
    pub app_id: Option<String>,

    /// Result format to request from the service (can be specified multiple times)
    #[arg(long = "format", value_name = "FORMAT")]
    pub formats: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<CliOutputFormat>,

    /// Dispatch a new question even while one is in flight
    #[arg(long)]
    pub allow_overlap: bool,

    /// Reject blank questions instead of sending them
    #[arg(long)]
    pub reject_blank: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to a daily rolling file in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// True when the interactive prompt should run
    pub fn is_interactive(&self) -> bool {
        self.chat || self.question.is_none()
    }
}
