use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use gormgen_manifest::GormgenToml;

use super::UnwrapOrExit;
use crate::reports::{CheckReport, Report, TerminalOutput};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to gormgen.toml (defaults to ./gormgen.toml)
    #[arg(short, long, default_value = "gormgen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = GormgenToml::open(&self.config).unwrap_or_exit();

        CheckReport::new(config.path(), config.manifest()).render(&mut TerminalOutput::new());
        Ok(())
    }
}
