mod check;
mod generate;
mod init;
mod tables;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::{Context, Result};
use generate::GenerateCommand;
use gormgen_catalog::{Catalog, PostgresCatalog};
use gormgen_codegen_go::GoOptions;
use gormgen_manifest::Manifest;
use init::InitCommand;
use tables::TablesCommand;
use tracing::debug;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for gormgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "gormgen")]
#[command(version)]
#[command(about = "Generate gin + gorm CRUD handlers from a PostgreSQL schema")]
pub(crate) struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Tables(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one Go file per table
    Generate(GenerateCommand),

    /// List tables and columns with their Go types
    Tables(TablesCommand),

    /// Write a starter gormgen.toml
    Init(InitCommand),

    /// Validate gormgen.toml without connecting
    Check(CheckCommand),
}

/// Generator options from the `[output]` and `[persistence]` sections.
pub(crate) fn go_options(manifest: &Manifest) -> GoOptions {
    let options = GoOptions::default()
        .package(&manifest.output.package)
        .persistence_call(&manifest.persistence.call);
    match &manifest.persistence.import {
        Some(import) => options.persistence_import(import),
        None => options,
    }
}

/// Connect to the configured catalog, run `f`, then close the connection.
pub(crate) fn with_catalog<T>(
    manifest: &Manifest,
    f: impl FnOnce(&mut PostgresCatalog) -> Result<T>,
) -> Result<T> {
    let url = manifest.database_url().unwrap_or_exit();
    debug!(schema = %manifest.database.schema, "opening catalog");
    let catalog = PostgresCatalog::connect(&url, &manifest.database.schema)
        .wrap_err("Failed to open the catalog")?;
    run_then_close(catalog, f)
}

/// Run `f` against `catalog`, then close it exactly once.
///
/// The catalog is closed whether or not `f` succeeds; an error from `f`
/// takes precedence over a close failure.
fn run_then_close<C: Catalog, T>(
    mut catalog: C,
    f: impl FnOnce(&mut C) -> Result<T>,
) -> Result<T> {
    let result = f(&mut catalog);
    let closed = catalog.close();

    let value = result?;
    closed.wrap_err("Failed to close the catalog")?;
    Ok(value)
}
