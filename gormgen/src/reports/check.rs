//! Check command report data structures.

use std::path::{Path, PathBuf};

use gormgen_manifest::Manifest;

use super::output::{Output, Report};

/// Summary of a valid gormgen.toml.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    /// Where the connection URL comes from, never the URL itself.
    pub database: String,
    pub schema: String,
    pub output_dir: PathBuf,
    pub package: String,
    pub persistence: String,
    pub type_overrides: usize,
}

impl CheckReport {
    pub fn new(config_path: &Path, manifest: &Manifest) -> Self {
        let database = match (&manifest.database.url, &manifest.database.env) {
            (Some(_), _) => "url".to_string(),
            (None, Some(var)) => format!("${}", var),
            (None, None) => "not configured".to_string(),
        };
        let persistence = match &manifest.persistence.import {
            Some(import) => format!("{}() from \"{}\"", manifest.persistence.call, import),
            None => format!("{}()", manifest.persistence.call),
        };

        Self {
            config_path: config_path.to_path_buf(),
            database,
            schema: manifest.database.schema.clone(),
            output_dir: manifest.output.dir.clone(),
            package: manifest.output.package.clone(),
            persistence,
            type_overrides: manifest.types.len(),
        }
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.key_value("database", &self.database);
        out.key_value("schema", &self.schema);
        out.key_value("output", &self.output_dir.display().to_string());
        out.key_value("package", &self.package);
        out.key_value("persistence", &self.persistence);
        out.key_value("type overrides", &self.type_overrides.to_string());
    }
}
