use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use gormgen_catalog::Catalog;
use gormgen_manifest::GormgenToml;

use super::{UnwrapOrExit, with_catalog};
use crate::reports::{Report, TablesReport, TerminalOutput};

#[derive(Args)]
pub struct TablesCommand {
    /// Path to gormgen.toml (defaults to ./gormgen.toml)
    #[arg(short, long, default_value = "gormgen.toml")]
    pub config: PathBuf,

    /// Print the listing as JSON
    #[arg(long)]
    pub json: bool,
}

impl TablesCommand {
    /// Run the tables command
    pub fn run(&self) -> Result<()> {
        let config = GormgenToml::open(&self.config).unwrap_or_exit();
        let manifest = config.manifest();

        let descriptors = with_catalog(manifest, |catalog| {
            let tables = catalog.list_tables().wrap_err("Failed to list tables")?;
            tables
                .iter()
                .map(|table| {
                    catalog
                        .describe(table)
                        .wrap_err_with(|| format!("Failed to describe table '{}'", table))
                })
                .collect::<Result<Vec<_>>>()
        })?;

        let report = TablesReport::new(&descriptors, &manifest.type_map());
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).wrap_err("Failed to encode JSON")?
            );
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
