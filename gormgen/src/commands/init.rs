use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use gormgen_manifest::{CONFIG_FILE, GormgenToml};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct InitCommand {
    /// Where to write the config
    #[arg(default_value = CONFIG_FILE)]
    pub path: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let config = GormgenToml::create(&self.path).unwrap_or_exit();

        println!("Created {}", config.path().display());
        println!();
        println!("Next steps:");
        println!("  export DATABASE_URL=postgres://user@localhost:5432/app");
        println!("  gormgen tables");
        println!("  gormgen generate");
        Ok(())
    }
}
