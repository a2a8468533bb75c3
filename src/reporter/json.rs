use crate::reporter::Reporter;
use crate::scanner::ScanResult;

pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for JsonReporter {
    fn report(&self, result: &ScanResult) -> String {
        serde_json::to_string_pretty(result)
            .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize result: {}"}}"#, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{create_test_result, record};

    #[test]
    fn test_json_output_structure() {
        let reporter = JsonReporter::new();
        let result = create_test_result(&["py"], vec![record("/proj", &["a.py"])]);
        let output = reporter.report(&result);

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(parsed["summary"]["files_matched"], 1);
        assert_eq!(parsed["files"][0], "/proj/a.py");
        assert_eq!(parsed["directories"][0]["matches"][0], "a.py");
    }

    #[test]
    fn test_json_output_category_counts() {
        let reporter = JsonReporter::new();
        let result = create_test_result(
            &["py", "txt"],
            vec![record("/proj", &["a.py", "notes.txt"])],
        );
        let output = reporter.report(&result);

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["summary"]["by_category"][0]["category"], "py");
        assert_eq!(parsed["summary"]["by_category"][0]["files"], 1);
        assert_eq!(parsed["summary"]["by_category"][1]["category"], "txt");
    }
}
