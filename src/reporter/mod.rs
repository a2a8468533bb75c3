pub mod json;
pub mod plain;
pub mod terminal;

use crate::cli::OutputFormat;
use crate::scanner::ScanResult;

pub trait Reporter {
    fn report(&self, result: &ScanResult) -> String;
}

/// Select the reporter for an output format.
pub fn for_format(format: OutputFormat, verbose: bool) -> Box<dyn Reporter> {
    match format {
        OutputFormat::Terminal => Box::new(terminal::TerminalReporter::new(verbose)),
        OutputFormat::Json => Box::new(json::JsonReporter::new()),
        OutputFormat::Plain => Box::new(plain::PlainReporter::new()),
    }
}
