use std::path::PathBuf;

use gormgen_catalog::CatalogError;
use thiserror::Error;

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
