//! Directory scanning core.
//!
//! A [`Scanner`] takes a [`ScanRequest`] (roots, categories, traversal
//! options) and produces a [`ScanResult`]: the ordered absolute paths of
//! matching files, grouped per visited directory. The scan itself has no
//! side effects; logging and preview consume the result downstream.

use crate::categories::ExtensionSet;
use crate::error::{Result, ScanError};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Directory names never descended into during recursive scans.
pub static VCS_METADATA_DIRS: &[&str] = &[".git", ".hg", ".svn"];

/// Configuration for a single scan.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Root directories to scan.
    pub roots: Vec<PathBuf>,
    /// Category names selecting the extensions to match.
    pub categories: Vec<String>,
    /// Whether to descend into subdirectories.
    pub recursive: bool,
    /// Directory names pruned during recursive scans.
    pub excluded_dirs: Vec<&'static str>,
}

impl ScanRequest {
    /// Create a request for the given roots with default options.
    pub fn new(roots: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
            categories: Vec::new(),
            recursive: false,
            excluded_dirs: VCS_METADATA_DIRS.to_vec(),
        }
    }

    /// Set the category names to match.
    pub fn with_categories(
        mut self,
        categories: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether to descend into subdirectories.
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Set the directory names pruned during recursive scans.
    pub fn with_excluded_dirs(mut self, dirs: &[&'static str]) -> Self {
        self.excluded_dirs = dirs.to_vec();
        self
    }
}

/// Matches found in one visited directory, in listing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryRecord {
    /// Absolute path of the directory.
    pub path: PathBuf,
    /// Matched file names within it.
    pub matches: Vec<String>,
}

/// Files counted for one requested category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub files: usize,
}

/// Aggregate counts over a completed scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub directories_scanned: usize,
    pub files_matched: usize,
    /// Per-category counts, in request order. A file counts toward the
    /// first requested category that matches it.
    pub by_category: Vec<CategoryCount>,
}

impl Summary {
    /// Fold counts from the completed walk.
    pub fn from_scan(
        directories: &[DirectoryRecord],
        files: &[PathBuf],
        selection: &ExtensionSet,
    ) -> Self {
        let mut by_category: Vec<CategoryCount> = selection
            .names()
            .iter()
            .map(|name| CategoryCount {
                category: name.to_string(),
                files: 0,
            })
            .collect();

        for file in files {
            let category = file
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(|name| selection.category_of(name));
            if let Some(category) = category {
                if let Some(count) = by_category.iter_mut().find(|c| c.category == category) {
                    count.files += 1;
                }
            }
        }

        Self {
            directories_scanned: directories.len(),
            files_matched: files.len(),
            by_category,
        }
    }
}

/// The complete outcome of one scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    pub version: String,
    /// UTC timestamp taken when the scan started, RFC 3339.
    pub started_at: String,
    /// Canonicalized scan roots, in request order.
    pub roots: Vec<PathBuf>,
    /// Requested category names.
    pub categories: Vec<String>,
    /// Visited directories in visit order, with their matches.
    pub directories: Vec<DirectoryRecord>,
    /// Matched files as absolute paths, grouped per directory in visit
    /// order. Overlapping roots yield duplicates.
    pub files: Vec<PathBuf>,
    pub summary: Summary,
    pub elapsed_ms: u64,
}

/// Walks the requested roots and collects category matches.
pub struct Scanner {
    request: ScanRequest,
}

impl Scanner {
    /// Create a scanner for the given request.
    pub fn new(request: ScanRequest) -> Self {
        Self { request }
    }

    /// Run the scan.
    ///
    /// Fails on the first error: unknown category, inaccessible root or
    /// subdirectory, or a root that is not a directory.
    pub fn scan(&self) -> Result<ScanResult> {
        let selection = ExtensionSet::resolve(&self.request.categories)?;
        let started_at = Utc::now().to_rfc3339();
        let started = Instant::now();

        let mut roots = Vec::with_capacity(self.request.roots.len());
        let mut directories: Vec<DirectoryRecord> = Vec::new();

        for root in &self.request.roots {
            let root = root
                .canonicalize()
                .map_err(|e| ScanError::directory_access(root.clone(), e))?;
            if !root.is_dir() {
                return Err(ScanError::NotADirectory(root));
            }
            debug!(root = %root.display(), recursive = self.request.recursive, "Scanning root");
            self.walk_root(&root, &selection, &mut directories)?;
            roots.push(root);
        }

        let files: Vec<PathBuf> = directories
            .iter()
            .flat_map(|dir| dir.matches.iter().map(move |name| dir.path.join(name)))
            .collect();
        let summary = Summary::from_scan(&directories, &files, &selection);

        Ok(ScanResult {
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at,
            roots,
            categories: self.request.categories.clone(),
            directories,
            files,
            summary,
            elapsed_ms: started.elapsed().as_millis() as u64,
        })
    }

    /// Walk one canonicalized root, appending directory records in visit
    /// order.
    fn walk_root(
        &self,
        root: &Path,
        selection: &ExtensionSet,
        directories: &mut Vec<DirectoryRecord>,
    ) -> Result<()> {
        let mut walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name();
        if !self.request.recursive {
            walker = walker.max_depth(1);
        }

        // Maps visited directory paths to their record index, so files can
        // be attributed to the directory walkdir already yielded.
        let mut index: HashMap<PathBuf, usize> = HashMap::new();
        let excluded = &self.request.excluded_dirs;

        for entry in walker
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_excluded_dir(e, excluded))
        {
            let entry = entry.map_err(|err| {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                ScanError::directory_access(path, err.into())
            })?;

            if entry.file_type().is_dir() {
                // Non-recursive scans visit only the root itself; deeper
                // directories are listed entries, never visited.
                if self.request.recursive || entry.depth() == 0 {
                    index.insert(entry.path().to_path_buf(), directories.len());
                    directories.push(DirectoryRecord {
                        path: entry.path().to_path_buf(),
                        matches: Vec::new(),
                    });
                }
            } else if entry.file_type().is_file() {
                let Some(name) = entry.file_name().to_str() else {
                    debug!(path = %entry.path().display(), "Skipping non-UTF-8 file name");
                    continue;
                };
                if selection.matches(name) {
                    if let Some(parent) = entry.path().parent() {
                        if let Some(&i) = index.get(parent) {
                            directories[i].matches.push(name.to_string());
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

/// Check if a directory entry carries one of the excluded names.
fn is_excluded_dir(entry: &DirEntry, excluded: &[&'static str]) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| excluded.contains(&name))
}
