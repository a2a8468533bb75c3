pub mod categories;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod logfile;
pub mod reporter;
pub mod scanner;
pub mod viewer;

pub mod test_utils;

pub use categories::{CATEGORIES, DEFAULT_CATEGORIES, ExtensionCategory, ExtensionSet};
pub use cli::{Cli, OutputFormat};
pub use error::{Result, ScanError};
pub use reporter::{
    Reporter, json::JsonReporter, plain::PlainReporter, terminal::TerminalReporter,
};
pub use scanner::{CategoryCount, DirectoryRecord, ScanRequest, ScanResult, Scanner, Summary};
pub use viewer::{Viewer, ViewerHandle};
