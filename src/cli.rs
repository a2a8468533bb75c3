use crate::categories::DEFAULT_CATEGORIES;
use crate::logfile::DEFAULT_LOG_FILE;
use crate::viewer::{DEFAULT_DELAY_SECS, Viewer};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Plain,
}

#[derive(Parser, Debug)]
#[command(
    name = "srcscan",
    version,
    about = "Scan directories for source files by extension category",
    long_about = "srcscan walks one or more directories, collects the files matching the requested extension categories, and can append a record of each run to a log or open every match in a text viewer for a timed preview."
)]
pub struct Cli {
    /// Directories to scan
    #[arg(default_value = ".")]
    pub roots: Vec<PathBuf>,

    /// Extension categories to match (comma-separated or repeated)
    #[arg(
        short,
        long,
        value_name = "NAME",
        value_delimiter = ',',
        default_values_t = DEFAULT_CATEGORIES.iter().map(|s| s.to_string())
    )]
    pub categories: Vec<String>,

    /// Descend into subdirectories, pruning version-control metadata
    #[arg(short, long)]
    pub recursive: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Append scan records to srcscan.log in the working directory
    #[arg(short, long)]
    pub log: bool,

    /// Append scan records to FILE instead (implies --log)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Open each matched file in the text viewer for a timed preview
    #[arg(short, long)]
    pub preview: bool,

    /// Viewer program used for previews (default: platform text viewer)
    #[arg(long, value_name = "PROGRAM")]
    pub viewer: Option<String>,

    /// Seconds each preview stays open
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_DELAY_SECS)]
    pub delay: f64,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The log destination, if logging was requested.
    pub fn log_destination(&self) -> Option<PathBuf> {
        if let Some(path) = &self.log_file {
            Some(path.clone())
        } else if self.log {
            Some(PathBuf::from(DEFAULT_LOG_FILE))
        } else {
            None
        }
    }

    /// The viewer program used for previews.
    pub fn viewer_program(&self) -> String {
        self.viewer
            .clone()
            .unwrap_or_else(|| Viewer::platform_default().to_string())
    }
}
