use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use gormgen_codegen_go::Generator;
use gormgen_manifest::GormgenToml;

use super::{UnwrapOrExit, go_options, with_catalog};
use crate::reports::{GenerateSummary, PreviewFile, Report, TerminalOutput};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to gormgen.toml (defaults to ./gormgen.toml)
    #[arg(short, long, default_value = "gormgen.toml")]
    pub config: PathBuf,

    /// Output directory (overrides [output].dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = GormgenToml::open(&self.config).unwrap_or_exit();
        let manifest = config.manifest();
        let generator = Generator::new(manifest.type_map()).with_options(go_options(manifest));

        let summary = if self.dry_run {
            let files = with_catalog(manifest, |catalog| {
                generator
                    .preview(catalog)
                    .wrap_err("Failed to render models")
            })?;
            GenerateSummary::Preview(
                files
                    .into_iter()
                    .map(|file| PreviewFile {
                        path: file.path().display().to_string(),
                        content: file.content().to_string(),
                    })
                    .collect(),
            )
        } else {
            let output_dir = self
                .output
                .clone()
                .unwrap_or_else(|| manifest.output.dir.clone());
            let report = with_catalog(manifest, |catalog| {
                generator
                    .generate(catalog, &output_dir)
                    .wrap_err("Failed to generate models")
            })?;
            GenerateSummary::Written { output_dir, report }
        };

        summary.render(&mut TerminalOutput::new());
        Ok(())
    }
}
