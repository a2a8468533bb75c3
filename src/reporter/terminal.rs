use crate::reporter::Reporter;
use crate::scanner::ScanResult;
use colored::Colorize;

pub struct TerminalReporter {
    /// Also show visited directories without matches, dimmed.
    verbose: bool,
}

impl TerminalReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, result: &ScanResult) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n",
            format!("srcscan v{} - source file scanner", result.version).bold()
        ));
        for root in &result.roots {
            output.push_str(&format!("Scanning: {}\n", root.display()));
        }
        output.push('\n');

        if result.files.is_empty() {
            output.push_str(&"No matching files found.\n".green().to_string());
        } else {
            for dir in &result.directories {
                if dir.matches.is_empty() {
                    if self.verbose {
                        output.push_str(&format!(
                            "{}\n",
                            dir.path.display().to_string().dimmed()
                        ));
                    }
                    continue;
                }
                output.push_str(&format!("{}\n", dir.path.display().to_string().cyan().bold()));
                for name in &dir.matches {
                    output.push_str(&format!("  {}\n", name));
                }
            }
        }

        output.push_str(&format!("{}\n", "━".repeat(50)));

        let by_category = result
            .summary
            .by_category
            .iter()
            .map(|c| format!("{}: {}", c.category, c.files))
            .collect::<Vec<_>>()
            .join(", ");
        output.push_str(&format!(
            "Summary: {} file(s) in {} directory(ies) [{}]",
            result.summary.files_matched.to_string().green().bold(),
            result.summary.directories_scanned,
            by_category
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{create_test_result, record};

    #[test]
    fn test_report_no_matches() {
        let reporter = TerminalReporter::new(false);
        let result = create_test_result(&["py"], vec![record("/proj", &[])]);
        let output = reporter.report(&result);

        assert!(output.contains("No matching files found"));
        assert!(output.contains("Summary:"));
    }

    #[test]
    fn test_report_groups_matches_under_directory() {
        let reporter = TerminalReporter::new(false);
        let result = create_test_result(
            &["py"],
            vec![
                record("/proj", &["a.py"]),
                record("/proj/sub", &["b.py", "c.py"]),
            ],
        );
        let output = reporter.report(&result);

        assert!(output.contains("/proj"));
        assert!(output.contains("/proj/sub"));
        assert!(output.contains("  a.py"));
        assert!(output.contains("  b.py"));
        assert!(output.contains("3 file(s)") || output.contains('3'));
    }

    #[test]
    fn test_report_hides_empty_directories_by_default() {
        let reporter = TerminalReporter::new(false);
        let result = create_test_result(
            &["py"],
            vec![record("/proj", &["a.py"]), record("/proj/empty", &[])],
        );
        let output = reporter.report(&result);

        assert!(!output.contains("/proj/empty"));
    }

    #[test]
    fn test_report_shows_empty_directories_when_verbose() {
        let reporter = TerminalReporter::new(true);
        let result = create_test_result(
            &["py"],
            vec![record("/proj", &["a.py"]), record("/proj/empty", &[])],
        );
        let output = reporter.report(&result);

        assert!(output.contains("/proj/empty"));
    }

    #[test]
    fn test_report_summary_carries_category_counts() {
        let reporter = TerminalReporter::new(false);
        let result = create_test_result(
            &["py", "txt"],
            vec![record("/proj", &["a.py", "b.py", "notes.txt"])],
        );
        let output = reporter.report(&result);

        assert!(output.contains("py: 2"));
        assert!(output.contains("txt: 1"));
    }
}
