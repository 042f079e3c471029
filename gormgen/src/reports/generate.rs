//! Generate command report data structures.

use std::path::PathBuf;

use gormgen_codegen_go::GenerateReport;

use super::output::{Output, Report};

/// Result of the generate command.
#[derive(Debug)]
pub enum GenerateSummary {
    /// Files were written to disk.
    Written {
        output_dir: PathBuf,
        report: GenerateReport,
    },
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the output directory.
    pub path: String,
    pub content: String,
}

impl Report for GenerateSummary {
    fn render(&self, out: &mut dyn Output) {
        match self {
            GenerateSummary::Written { output_dir, report } => {
                for gap in &report.gaps {
                    out.warning(&format!(
                        "{}.{}: no Go type for '{}', field left untyped",
                        gap.table, gap.column, gap.declared_type
                    ));
                }
                out.section(&format!("Generated into {}", output_dir.display()));
                for path in &report.files {
                    let shown = path.strip_prefix(output_dir).unwrap_or(path.as_path());
                    out.added_item(&shown.display().to_string());
                }
                out.newline();
                out.preformatted(&format!(
                    "{} file{} written",
                    report.files.len(),
                    if report.files.len() == 1 { "" } else { "s" }
                ));
            }
            GenerateSummary::Preview(files) => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                out.preformatted(&format!("{} files would be generated", files.len()));
            }
        }
    }
}
