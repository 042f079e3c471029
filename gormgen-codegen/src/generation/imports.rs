//! Import collection utilities.

use indexmap::IndexSet;

/// Tracks imports and deduplicates them.
///
/// Maintains insertion order for deterministic output.
///
/// # Example
///
/// ```
/// use gormgen_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("net/http");
/// imports.add("github.com/gin-gonic/gin");
/// imports.add("net/http");
///
/// let paths: Vec<&str> = imports.iter().collect();
/// assert_eq!(paths, ["net/http", "github.com/gin-gonic/gin"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    imports: IndexSet<String>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import path. Adding it again keeps the first position.
    pub fn add(&mut self, path: &str) {
        if !self.imports.contains(path) {
            self.imports.insert(path.to_string());
        }
    }

    /// Merge another collector into this one.
    pub fn merge(&mut self, other: &ImportCollector) {
        for path in &other.imports {
            self.add(path);
        }
    }

    /// Check if a path is already imported.
    pub fn has(&self, path: &str) -> bool {
        self.imports.contains(path)
    }

    /// Iterate over all import paths in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }
}
