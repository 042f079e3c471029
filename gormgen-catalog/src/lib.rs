//! Catalog introspection for the gormgen model generator.
//!
//! A [`Catalog`] lists the base tables of a schema and the columns of each
//! table, in catalog order. [`PostgresCatalog`] reads PostgreSQL's
//! `information_schema` over a single connection.

mod error;
mod postgres;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{CatalogError, Result};
use gormgen_core::{ColumnMetadata, TableDescriptor};
pub use postgres::PostgresCatalog;

/// Read access to a database catalog.
///
/// Calls are blocking and run to completion before returning.
pub trait Catalog {
    /// Base tables visible in the catalog's schema, in catalog order.
    fn list_tables(&mut self) -> Result<Vec<String>>;

    /// Columns of `table` in declared order.
    fn list_columns(&mut self, table: &str) -> Result<Vec<ColumnMetadata>>;

    /// Fetch the columns of `table` into a descriptor.
    fn describe(&mut self, table: &str) -> Result<TableDescriptor> {
        let columns = self.list_columns(table)?;
        Ok(TableDescriptor::new(table).columns(columns))
    }

    /// Release the catalog's connection.
    ///
    /// The default does nothing; borrowed catalogs are closed by their owner.
    fn close(self) -> Result<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}

impl<C: Catalog + ?Sized> Catalog for &mut C {
    fn list_tables(&mut self) -> Result<Vec<String>> {
        (**self).list_tables()
    }

    fn list_columns(&mut self, table: &str) -> Result<Vec<ColumnMetadata>> {
        (**self).list_columns(table)
    }
}
