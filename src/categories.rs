//! Extension categories for scan target selection.

use crate::error::{Result, ScanError};

/// A named group of file extensions.
#[derive(Debug, Clone, Copy)]
pub struct ExtensionCategory {
    /// Category name as given on the command line.
    pub name: &'static str,
    /// Lowercase, dot-prefixed extensions belonging to this category.
    pub extensions: &'static [&'static str],
}

impl ExtensionCategory {
    /// Check if a file name carries one of this category's extensions.
    ///
    /// The test is a case-insensitive suffix match on the whole name, so
    /// `B.PY` matches `py` and `archive.tar.py` does too.
    pub fn matches(&self, file_name: &str) -> bool {
        let lowered = file_name.to_lowercase();
        self.extensions.iter().any(|ext| lowered.ends_with(ext))
    }
}

/// The fixed category table.
pub static CATEGORIES: &[ExtensionCategory] = &[
    ExtensionCategory {
        name: "r",
        extensions: &[".r", ".rmd"],
    },
    ExtensionCategory {
        name: "py",
        extensions: &[".py"],
    },
    ExtensionCategory {
        name: "js",
        extensions: &[".js"],
    },
    ExtensionCategory {
        name: "c",
        extensions: &[".c", ".cpp", ".cxx", ".h", ".hpp", ".hxx"],
    },
    ExtensionCategory {
        name: "java",
        extensions: &[".java", ".jar", ".jad"],
    },
    ExtensionCategory {
        name: "markup",
        extensions: &[".html", ".htm", ".xhtml", ".xht", ".xml"],
    },
    ExtensionCategory {
        name: "markdown",
        extensions: &[".md", ".markdown"],
    },
    ExtensionCategory {
        name: "css",
        extensions: &[".css", ".scss", ".less"],
    },
    ExtensionCategory {
        name: "txt",
        extensions: &[".txt"],
    },
    ExtensionCategory {
        name: "misc",
        extensions: &[".json", ".pickle"],
    },
];

/// Categories selected when the command line names none.
pub const DEFAULT_CATEGORIES: &[&str] = &["r", "py", "js"];

/// Look up a category by its exact name.
pub fn find(name: &str) -> Option<&'static ExtensionCategory> {
    CATEGORIES.iter().find(|c| c.name == name)
}

/// All known category names, for error messages and help text.
pub fn known_names() -> Vec<&'static str> {
    CATEGORIES.iter().map(|c| c.name).collect()
}

/// A resolved category selection, in request order.
#[derive(Debug, Clone)]
pub struct ExtensionSet {
    categories: Vec<&'static ExtensionCategory>,
}

impl ExtensionSet {
    /// Resolve category names against the table.
    ///
    /// Fails on the first unknown name, or if `names` is empty.
    pub fn resolve(names: &[String]) -> Result<Self> {
        if names.is_empty() {
            return Err(ScanError::NoCategories);
        }

        let mut categories = Vec::with_capacity(names.len());
        for name in names {
            match find(name) {
                Some(category) => categories.push(category),
                None => {
                    return Err(ScanError::UnknownCategory {
                        name: name.clone(),
                        known: known_names().join(", "),
                    });
                }
            }
        }

        Ok(Self { categories })
    }

    /// Check if a file name matches any selected category.
    pub fn matches(&self, file_name: &str) -> bool {
        self.category_of(file_name).is_some()
    }

    /// The first selected category matching a file name, in request order.
    pub fn category_of(&self, file_name: &str) -> Option<&'static str> {
        self.categories
            .iter()
            .find(|c| c.matches(file_name))
            .map(|c| c.name)
    }

    /// Selected category names, in request order.
    pub fn names(&self) -> Vec<&'static str> {
        self.categories.iter().map(|c| c.name).collect()
    }
}
