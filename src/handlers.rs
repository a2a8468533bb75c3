//! Command handlers that orchestrate a scan run.

use crate::cli::Cli;
use crate::error::Result;
use crate::logfile::ScanLog;
use crate::reporter;
use crate::scanner::{ScanRequest, Scanner};
use crate::viewer::Viewer;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{debug, info};

/// Run a scan per the command line: scan, log, report, preview.
pub fn run_normal_mode(cli: &Cli) -> ExitCode {
    info!(roots = ?cli.roots, categories = ?cli.categories, "Starting scan");
    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("srcscan: {}", e);
            ExitCode::from(2)
        }
    }
}

fn execute(cli: &Cli) -> Result<()> {
    let request = ScanRequest::new(cli.roots.clone())
        .with_categories(cli.categories.clone())
        .with_recursive(cli.recursive);
    let result = Scanner::new(request).scan()?;

    debug!(
        files = result.summary.files_matched,
        directories = result.summary.directories_scanned,
        "Scan completed"
    );

    if let Some(path) = cli.log_destination() {
        ScanLog::new(path).append(&result)?;
    }

    let output = reporter::for_format(cli.format, cli.verbose).report(&result);
    if !output.is_empty() {
        println!("{}", output);
    }

    if cli.preview {
        // Negative, NaN, or unrepresentable delays collapse to zero.
        let delay = Duration::try_from_secs_f64(cli.delay).unwrap_or(Duration::ZERO);
        Viewer::new(cli.viewer_program(), delay).preview_all(&result.files)?;
    }

    Ok(())
}
