//! PostgreSQL catalog backed by `information_schema`.

use gormgen_core::ColumnMetadata;
use sqlx::{Connection, PgConnection};
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

use crate::{Catalog, CatalogError, Result};

const LIST_TABLES: &str = "\
SELECT table_name::text \
FROM information_schema.tables \
WHERE table_schema = $1 AND table_type = 'BASE TABLE' \
ORDER BY table_name";

const LIST_COLUMNS: &str = "\
SELECT column_name::text, data_type::text, is_nullable::text, column_default::text \
FROM information_schema.columns \
WHERE table_schema = $1 AND table_name = $2 \
ORDER BY ordinal_position";

type ColumnRow = (String, String, String, Option<String>);

/// A catalog reading PostgreSQL's `information_schema` over one connection.
///
/// The connection is owned for the whole run and released when the catalog
/// is closed or dropped. Queries run on a private current-thread runtime so
/// callers see a blocking API.
pub struct PostgresCatalog {
    conn: PgConnection,
    rt: Runtime,
    schema: String,
}

impl PostgresCatalog {
    /// Connect to `url` and introspect `schema` (usually `public`).
    pub fn connect(url: &str, schema: impl Into<String>) -> Result<Self> {
        let rt = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(CatalogError::Runtime)?;
        let conn = rt
            .block_on(PgConnection::connect(url))
            .map_err(CatalogError::Connect)?;
        let schema = schema.into();
        debug!(%schema, "connected to catalog");

        Ok(Self { conn, rt, schema })
    }

    /// The schema being introspected.
    pub fn schema(&self) -> &str {
        &self.schema
    }
}

impl Catalog for PostgresCatalog {
    fn list_tables(&mut self) -> Result<Vec<String>> {
        let rows: Vec<(String,)> = self
            .rt
            .block_on(
                sqlx::query_as(LIST_TABLES)
                    .bind(&self.schema)
                    .fetch_all(&mut self.conn),
            )
            .map_err(|source| CatalogError::ListTables {
                schema: self.schema.clone(),
                source,
            })?;

        debug!(count = rows.len(), schema = %self.schema, "listed base tables");
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }

    fn list_columns(&mut self, table: &str) -> Result<Vec<ColumnMetadata>> {
        let rows: Vec<ColumnRow> = self
            .rt
            .block_on(
                sqlx::query_as(LIST_COLUMNS)
                    .bind(&self.schema)
                    .bind(table)
                    .fetch_all(&mut self.conn),
            )
            .map_err(|source| CatalogError::ListColumns {
                table: table.to_string(),
                source,
            })?;

        Ok(rows
            .into_iter()
            .map(|(name, data_type, is_nullable, default)| {
                debug!(
                    table,
                    column = %name,
                    data_type = %data_type,
                    nullable = %is_nullable,
                    default = default.as_deref().unwrap_or(""),
                    "column"
                );
                ColumnMetadata::from_catalog(name, data_type, &is_nullable, default)
            })
            .collect())
    }

    /// Gracefully terminate the connection.
    fn close(self) -> Result<()> {
        let Self { conn, rt, .. } = self;
        rt.block_on(conn.close()).map_err(CatalogError::Close)
    }
}
