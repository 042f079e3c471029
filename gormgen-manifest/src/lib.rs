//! `gormgen.toml` parsing and validation.
//!
//! [`GormgenToml::open`] reads and validates a config file. Every section is
//! optional; the connection target is only required once a command actually
//! needs the database, see [`Manifest::database_url`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod manifest;
mod validate;

pub use error::{Error, Result};
pub use file::{CONFIG_FILE, GormgenToml, STARTER};
pub use manifest::{DatabaseConfig, Manifest, OutputConfig, PersistenceConfig};
