//! Tables command report data structures.

use gormgen_core::{TableDescriptor, TypeMap};
use serde::Serialize;

use super::output::{Output, Report};

/// Tables of the catalog with each column's resolved Go type.
#[derive(Debug, Serialize)]
pub struct TablesReport {
    pub tables: Vec<TableListing>,
}

#[derive(Debug, Serialize)]
pub struct TableListing {
    pub name: String,
    pub columns: Vec<ColumnListing>,
}

#[derive(Debug, Serialize)]
pub struct ColumnListing {
    pub name: String,
    pub declared_type: String,
    /// Empty when the declared type has no mapping.
    pub go_type: String,
    pub nullable: bool,
}

impl TablesReport {
    pub fn new(descriptors: &[TableDescriptor], types: &TypeMap) -> Self {
        let tables = descriptors
            .iter()
            .map(|table| TableListing {
                name: table.table_name.clone(),
                columns: table
                    .columns
                    .iter()
                    .map(|column| ColumnListing {
                        name: column.name.clone(),
                        declared_type: column.declared_type.clone(),
                        go_type: types.resolve(&column.declared_type).to_string(),
                        nullable: column.nullable,
                    })
                    .collect(),
            })
            .collect();
        Self { tables }
    }
}

impl Report for TablesReport {
    fn render(&self, out: &mut dyn Output) {
        if self.tables.is_empty() {
            out.preformatted("no tables found");
            return;
        }

        for table in &self.tables {
            out.section(&table.name);
            for column in &table.columns {
                let go_type = if column.go_type.is_empty() {
                    "(unmapped)"
                } else {
                    &column.go_type
                };
                let null = if column.nullable { "" } else { ", not null" };
                out.list_item(&format!(
                    "{} {} ({}{})",
                    column.name, go_type, column.declared_type, null
                ));
            }
        }
    }
}
