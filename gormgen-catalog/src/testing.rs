//! In-memory catalog for tests.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{cell::Cell, rc::Rc};

use gormgen_core::{ColumnMetadata, TableDescriptor};

use crate::{Catalog, CatalogError, Result};

/// A catalog serving canned tables.
///
/// It can be primed to reject the table listing or the column listing of
/// one table, or to fail when closed. It records every column lookup it
/// serves and counts how often it was closed.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    tables: Vec<TableDescriptor>,
    fail_tables: bool,
    fail_columns_of: Option<String>,
    fail_close: bool,
    column_lookups: Vec<String>,
    closes: Rc<Cell<usize>>,
}

impl MemoryCatalog {
    pub fn new(tables: impl IntoIterator<Item = TableDescriptor>) -> Self {
        Self {
            tables: tables.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Reject `list_tables`.
    pub fn fail_tables(mut self) -> Self {
        self.fail_tables = true;
        self
    }

    /// Reject `list_columns` for `table`.
    pub fn fail_columns_of(mut self, table: impl Into<String>) -> Self {
        self.fail_columns_of = Some(table.into());
        self
    }

    /// Reject `close`.
    pub fn fail_close(mut self) -> Self {
        self.fail_close = true;
        self
    }

    /// Tables whose columns were requested, in request order.
    pub fn column_lookups(&self) -> &[String] {
        &self.column_lookups
    }

    /// Close counter that stays readable after the catalog is consumed.
    pub fn closes(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.closes)
    }
}

impl Catalog for MemoryCatalog {
    fn list_tables(&mut self) -> Result<Vec<String>> {
        if self.fail_tables {
            return Err(CatalogError::Rejected {
                target: "information_schema.tables".to_string(),
                reason: "connection refused".to_string(),
            });
        }
        Ok(self.tables.iter().map(|t| t.table_name.clone()).collect())
    }

    fn list_columns(&mut self, table: &str) -> Result<Vec<ColumnMetadata>> {
        self.column_lookups.push(table.to_string());
        if self.fail_columns_of.as_deref() == Some(table) {
            return Err(CatalogError::Rejected {
                target: table.to_string(),
                reason: "permission denied".to_string(),
            });
        }
        self.tables
            .iter()
            .find(|t| t.table_name == table)
            .map(|t| t.columns.clone())
            .ok_or_else(|| CatalogError::Rejected {
                target: table.to_string(),
                reason: "relation does not exist".to_string(),
            })
    }

    fn close(self) -> Result<()> {
        self.closes.set(self.closes.get() + 1);
        if self.fail_close {
            return Err(CatalogError::Rejected {
                target: "connection".to_string(),
                reason: "broken pipe".to_string(),
            });
        }
        Ok(())
    }
}
