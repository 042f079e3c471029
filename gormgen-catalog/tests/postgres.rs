//! PostgreSQL catalog tests.
//!
//! The introspection test needs a live database and is skipped unless
//! `GORMGEN_TEST_DATABASE_URL` is set.

use gormgen_catalog::{Catalog, CatalogError, PostgresCatalog};

fn database_url() -> Option<String> {
    std::env::var("GORMGEN_TEST_DATABASE_URL").ok()
}

#[test]
fn test_connect_refused() {
    let result = PostgresCatalog::connect("postgres://gormgen@127.0.0.1:1/none", "public");
    assert!(matches!(result, Err(CatalogError::Connect(_))));
}

#[test]
fn test_malformed_url() {
    let result = PostgresCatalog::connect("not a url", "public");
    assert!(matches!(result, Err(CatalogError::Connect(_))));
}

#[test]
fn test_introspects_live_schema() {
    let Some(url) = database_url() else {
        eprintln!("skipping: GORMGEN_TEST_DATABASE_URL not set");
        return;
    };

    let mut catalog = PostgresCatalog::connect(&url, "public").expect("connect");
    let tables = catalog.list_tables().expect("list tables");

    for table in &tables {
        let columns = catalog.list_columns(table).expect("list columns");
        for column in &columns {
            assert!(!column.name.is_empty());
            assert!(!column.declared_type.is_empty());
        }
    }

    catalog.close().expect("close");
}
