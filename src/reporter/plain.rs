use crate::reporter::Reporter;
use crate::scanner::ScanResult;

/// One absolute path per line, no decoration. Suitable for piping.
pub struct PlainReporter;

impl PlainReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for PlainReporter {
    fn report(&self, result: &ScanResult) -> String {
        result
            .files
            .iter()
            .map(|file| file.display().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
