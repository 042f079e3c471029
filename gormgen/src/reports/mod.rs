//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod output;
mod tables;

pub use check::CheckReport;
pub use generate::{GenerateSummary, PreviewFile};
pub use output::{Report, TerminalOutput};
pub use tables::TablesReport;
