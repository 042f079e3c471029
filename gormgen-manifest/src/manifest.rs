use std::{path::PathBuf, str::FromStr};

use gormgen_core::TypeMap;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    Error, Result,
    validate::{find_value_span, invalid_package_name},
};

/// Root of gormgen.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub persistence: PersistenceConfig,

    /// Extra or overriding entries for the declared type to Go type table
    #[serde(default)]
    pub types: IndexMap<String, String>,
}

/// `[database]`: where the catalog lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Connection URL, e.g. `postgres://user@localhost:5432/app`
    pub url: Option<String>,
    /// Environment variable holding the connection URL
    pub env: Option<String>,
    #[serde(default = "default_schema")]
    pub schema: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            env: None,
            schema: default_schema(),
        }
    }
}

/// `[output]`: where generated files go.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_package")]
    pub package: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            package: default_package(),
        }
    }
}

/// `[persistence]`: how generated handlers reach the database.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersistenceConfig {
    #[serde(default = "default_call")]
    pub call: String,
    pub import: Option<String>,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            call: default_call(),
            import: None,
        }
    }
}

fn default_schema() -> String {
    "public".to_string()
}

fn default_dir() -> PathBuf {
    PathBuf::from("models")
}

fn default_package() -> String {
    "models".to_string()
}

fn default_call() -> String {
    "db.Database".to_string()
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "gormgen.toml")
    }
}

impl Manifest {
    /// Parse gormgen.toml content with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let manifest: Self =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        manifest.validate(content, filename)?;
        Ok(manifest)
    }

    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        let invalid = |message: String, key: &str| {
            Err(Error::validation(message, src, filename, find_value_span(src, key)))
        };

        if self.database.url.is_some() && self.database.env.is_some() {
            return invalid(
                "set either [database].url or [database].env, not both".to_string(),
                "env",
            );
        }
        if self.database.schema.trim().is_empty() {
            return invalid("[database].schema must not be empty".to_string(), "schema");
        }
        if let Some(reason) = invalid_package_name(&self.output.package) {
            return invalid(
                format!("invalid package '{}': {}", self.output.package, reason),
                "package",
            );
        }

        let call = self.persistence.call.trim();
        if call.is_empty() || call.contains(['(', ')', ' ']) {
            return invalid(
                "[persistence].call must be a bare function name such as 'db.Database'"
                    .to_string(),
                "call",
            );
        }

        for (declared, go_type) in &self.types {
            if declared.trim().is_empty() {
                return invalid("[types] keys must not be empty".to_string(), "\"\"");
            }
            if go_type.trim().is_empty() {
                return invalid(
                    format!("[types].\"{}\" maps to an empty Go type", declared),
                    declared,
                );
            }
        }

        Ok(())
    }

    /// Connection URL from `url`, or from the variable named by `env`.
    pub fn database_url(&self) -> Result<String> {
        self.database_url_with(|var| std::env::var(var).ok())
    }

    /// Like [`Manifest::database_url`], reading variables through `lookup`.
    pub fn database_url_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Result<String> {
        match (&self.database.url, &self.database.env) {
            (Some(url), _) => Ok(url.clone()),
            (None, Some(var)) => lookup(var)
                .filter(|url| !url.trim().is_empty())
                .ok_or_else(|| Box::new(Error::EnvNotSet { var: var.clone() })),
            (None, None) => Err(Box::new(Error::MissingDatabase)),
        }
    }

    /// The built-in type table with `[types]` applied on top.
    pub fn type_map(&self) -> TypeMap {
        TypeMap::postgres_go().with_overrides(&self.types)
    }
}
