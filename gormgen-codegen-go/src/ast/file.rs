//! GoFile abstraction for structured Go file generation.
//!
//! Provides a high-level API for generating Go files with a package
//! clause, grouped imports and body declarations.

use gormgen_codegen::{CodeBuilder, CodeFragment, ImportCollector, Renderable};

/// A structured representation of a Go source file.
///
/// Imports are split into a standard library group and a third-party
/// group, each sorted, like goimports does.
///
/// # Example
///
/// ```
/// use gormgen_codegen_go::{Func, GoFile};
///
/// let code = GoFile::new("models")
///     .import("net/http")
///     .add(Func::new("Noop"))
///     .render();
///
/// assert!(code.starts_with("package models\n\nimport (\n\t\"net/http\"\n)\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GoFile {
    header: Option<String>,
    package: String,
    imports: ImportCollector,
    body: Vec<Vec<CodeFragment>>,
}

impl GoFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            ..Self::default()
        }
    }

    /// Comment line placed above the package clause.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn import(mut self, path: &str) -> Self {
        self.imports.add(path);
        self
    }

    pub fn imports(mut self, imports: &ImportCollector) -> Self {
        self.imports.merge(imports);
        self
    }

    /// Add a body declaration (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple body declarations.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::go();

        if let Some(header) = &self.header {
            builder.push_comment(header).push_blank();
        }
        builder.push_line(&format!("package {}", self.package));

        if !self.imports.is_empty() {
            builder.push_blank();
            self.render_imports(&mut builder);
        }

        for fragments in &self.body {
            builder.push_blank();
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    fn render_imports(&self, builder: &mut CodeBuilder) {
        let (mut std, mut third_party): (Vec<_>, Vec<_>) =
            self.imports.iter().partition(|path| is_std(path));
        std.sort();
        third_party.sort();

        builder.push_line("import (").push_indent();
        for (i, group) in [std, third_party]
            .into_iter()
            .filter(|g| !g.is_empty())
            .enumerate()
        {
            if i > 0 {
                builder.push_blank();
            }
            for path in group {
                builder.push_line(&format!("\"{}\"", path));
            }
        }
        builder.push_dedent().push_line(")");
    }
}

/// Standard library paths have no dot in their first element.
fn is_std(path: &str) -> bool {
    !path.split('/').next().unwrap_or(path).contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GoStruct, StructField};

    #[test]
    fn test_package_only() {
        assert_eq!(GoFile::new("models").render(), "package models\n");
    }

    #[test]
    fn test_import_groups() {
        let code = GoFile::new("models")
            .import("github.com/gin-gonic/gin")
            .import("time")
            .import("net/http")
            .render();

        assert_eq!(
            code,
            "package models\n\nimport (\n\t\"net/http\"\n\t\"time\"\n\n\t\"github.com/gin-gonic/gin\"\n)\n"
        );
    }

    #[test]
    fn test_merged_imports_dedup() {
        let mut imports = ImportCollector::new();
        imports.add("time");
        imports.add("net/http");
        let code = GoFile::new("models")
            .import("net/http")
            .imports(&imports)
            .render();
        assert_eq!(code.matches("\"net/http\"").count(), 1);
        assert!(code.contains("\t\"time\"\n"));
    }

    #[test]
    fn test_header_and_body() {
        let code = GoFile::new("models")
            .header("Code generated by gormgen. DO NOT EDIT.")
            .add(GoStruct::new("A").field(StructField::new("X", "int")))
            .add_all([GoStruct::new("B"), GoStruct::new("C")])
            .render();

        assert!(code.starts_with("// Code generated by gormgen. DO NOT EDIT.\n\npackage models\n"));
        assert!(code.contains("type A struct {\n\tX int\n}\n\ntype B struct{}\n\ntype C struct{}\n"));
    }

    #[test]
    fn test_is_std() {
        assert!(is_std("net/http"));
        assert!(is_std("time"));
        assert!(!is_std("github.com/gin-gonic/gin"));
        assert!(!is_std("gorm.io/gorm"));
    }
}
