//! Catalog data model shared by introspection and code generation.

use serde::{Deserialize, Serialize};

/// One column as reported by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    /// Raw column name, e.g. `created_at`.
    pub name: String,
    /// Declared type, possibly carrying a `(precision)` suffix.
    pub declared_type: String,
    pub nullable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_expr: Option<String>,
}

impl ColumnMetadata {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>, nullable: bool) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            nullable,
            default_expr: None,
        }
    }

    /// Build from the raw `information_schema.columns` values.
    ///
    /// Only an explicit `NO` marks the column as not-null.
    pub fn from_catalog(
        name: impl Into<String>,
        declared_type: impl Into<String>,
        is_nullable: &str,
        default_expr: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            nullable: !is_nullable.trim().eq_ignore_ascii_case("NO"),
            default_expr,
        }
    }

    pub fn with_default(mut self, expr: impl Into<String>) -> Self {
        self.default_expr = Some(expr.into());
        self
    }
}

/// A base table and its columns in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescriptor {
    pub table_name: String,
    pub columns: Vec<ColumnMetadata>,
}

impl TableDescriptor {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            columns: Vec::new(),
        }
    }

    pub fn column(mut self, column: ColumnMetadata) -> Self {
        self.columns.push(column);
        self
    }

    pub fn columns(mut self, columns: impl IntoIterator<Item = ColumnMetadata>) -> Self {
        self.columns.extend(columns);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_catalog_nullability() {
        assert!(!ColumnMetadata::from_catalog("id", "integer", "NO", None).nullable);
        assert!(!ColumnMetadata::from_catalog("id", "integer", "no ", None).nullable);
        assert!(ColumnMetadata::from_catalog("email", "text", "YES", None).nullable);
        assert!(ColumnMetadata::from_catalog("email", "text", "", None).nullable);
    }

    #[test]
    fn test_descriptor_keeps_column_order() {
        let table = TableDescriptor::new("users")
            .column(ColumnMetadata::new("b", "text", true))
            .columns([
                ColumnMetadata::new("a", "text", true),
                ColumnMetadata::new("c", "text", true),
            ]);

        let names: Vec<_> = table.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }
}
