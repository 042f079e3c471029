//! Files written by the Go generator.

mod model_file;

pub use model_file::ModelFile;

/// Comment text of the first line of every generated file.
pub const GENERATED_HEADER: &str = "Code generated by gormgen. DO NOT EDIT.";
