//! Append-only scan log.
//!
//! Each run appends a start record, one record per visited directory, and
//! a closing summary. Repeated runs accumulate; the log is the only state
//! that survives an invocation.

use crate::error::{Result, ScanError};
use crate::scanner::ScanResult;
use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Default log file name, created in the working directory.
pub const DEFAULT_LOG_FILE: &str = "srcscan.log";

/// Append-only log of scan runs.
pub struct ScanLog {
    path: PathBuf,
}

impl ScanLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append one run's records to the log.
    pub fn append(&self, result: &ScanResult) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| ScanError::log_write(&self.path, e))?;

        file.write_all(render(result).as_bytes())
            .map_err(|e| ScanError::log_write(&self.path, e))?;

        debug!(path = %self.path.display(), "Appended scan records");
        Ok(())
    }
}

/// Render one run's records as plain text.
fn render(result: &ScanResult) -> String {
    let mut out = String::new();

    let roots = result
        .roots
        .iter()
        .map(|r| r.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    out.push_str(&format!(
        "[{}] scan start: categories=[{}] roots=[{}]\n",
        result.started_at,
        result.categories.join(", "),
        roots
    ));

    for dir in &result.directories {
        out.push_str(&format!(
            "{}: {} match(es)\n",
            dir.path.display(),
            dir.matches.len()
        ));
        for name in &dir.matches {
            out.push_str(&format!("  {}\n", name));
        }
    }

    out.push_str(&format!(
        "[{}] scan done: {} file(s) in {} directory(ies), {} ms\n\n",
        Utc::now().to_rfc3339(),
        result.summary.files_matched,
        result.summary.directories_scanned,
        result.elapsed_ms
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{create_test_result, record};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_append_creates_file_with_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("srcscan.log");
        let result = create_test_result(&["py"], vec![record("/proj", &["a.py", "b.py"])]);

        ScanLog::new(&path).append(&result).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("scan start: categories=[py]"));
        assert!(content.contains("/proj: 2 match(es)"));
        assert!(content.contains("  a.py"));
        assert!(content.contains("  b.py"));
        assert!(content.contains("scan done: 2 file(s)"));
    }

    #[test]
    fn test_append_accumulates_runs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("srcscan.log");
        let result = create_test_result(&["py"], vec![record("/proj", &["a.py"])]);
        let log = ScanLog::new(&path);

        log.append(&result).unwrap();
        let first_len = fs::read_to_string(&path).unwrap().len();
        log.append(&result).unwrap();
        let content = fs::read_to_string(&path).unwrap();

        assert!(content.len() > first_len);
        assert_eq!(content.matches("scan start").count(), 2);
    }

    #[test]
    fn test_append_records_empty_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("srcscan.log");
        let result = create_test_result(&["py"], vec![record("/proj", &[])]);

        ScanLog::new(&path).append(&result).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("/proj: 0 match(es)"));
    }

    #[test]
    fn test_append_fails_in_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no/such/dir/srcscan.log");
        let result = create_test_result(&["py"], vec![record("/proj", &["a.py"])]);

        let err = ScanLog::new(&path).append(&result).unwrap_err();

        assert!(matches!(err, ScanError::LogWrite { .. }));
    }
}
