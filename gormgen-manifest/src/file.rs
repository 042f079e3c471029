use std::path::{Path, PathBuf};

use crate::{Error, Manifest, Result};

/// Default config file name.
pub const CONFIG_FILE: &str = "gormgen.toml";

/// Content written by `gormgen init`.
pub const STARTER: &str = r#"[database]
# Connection URL, or the name of an environment variable holding it.
# url = "postgres://user@localhost:5432/app"
env = "DATABASE_URL"
schema = "public"

[output]
dir = "models"
package = "models"

[persistence]
# Called by every generated handler to obtain a database handle.
call = "db.Database"
# import = "example.com/app/db"

[types]
# Extra or overriding mappings from declared column type to Go type.
# uuid = "string"
"#;

/// A gormgen.toml file with both raw content and parsed manifest.
#[derive(Debug)]
pub struct GormgenToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl GormgenToml {
    /// Open and parse a gormgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Write the starter config to `path`, refusing to replace an existing file.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Err(Box::new(Error::AlreadyExists {
                path: path.to_path_buf(),
            }));
        }
        std::fs::write(path, STARTER).map_err(|e| {
            Box::new(Error::Write {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::open(path)
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}
