#[cfg(test)]
pub mod fixtures {
    use crate::categories::ExtensionSet;
    use crate::scanner::{DirectoryRecord, ScanResult, Summary};
    use std::path::{Path, PathBuf};

    pub fn record(path: &str, matches: &[&str]) -> DirectoryRecord {
        DirectoryRecord {
            path: PathBuf::from(path),
            matches: matches.iter().map(|m| m.to_string()).collect(),
        }
    }

    pub fn create_test_result(
        categories: &[&str],
        directories: Vec<DirectoryRecord>,
    ) -> ScanResult {
        let names: Vec<String> = categories.iter().map(|c| c.to_string()).collect();
        let selection = ExtensionSet::resolve(&names).unwrap();
        let files: Vec<PathBuf> = directories
            .iter()
            .flat_map(|dir| dir.matches.iter().map(move |name| dir.path.join(name)))
            .collect();
        let summary = Summary::from_scan(&directories, &files, &selection);
        let roots = directories
            .first()
            .map(|dir| vec![dir.path.clone()])
            .unwrap_or_else(|| vec![Path::new("/proj").to_path_buf()]);

        ScanResult {
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: "2026-01-25T12:00:00+00:00".to_string(),
            roots,
            categories: names,
            directories,
            files,
            summary,
            elapsed_ms: 0,
        }
    }
}
