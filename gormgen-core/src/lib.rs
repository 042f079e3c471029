//! Core utilities and types for the gormgen model generator.
//!
//! This crate provides the catalog data model, the database-to-target type
//! table and the identifier helpers shared across the gormgen ecosystem.

mod file;
mod table;
mod type_map;
mod utils;

// File operations
pub use file::{File, GeneratedFile};
// Catalog data model
pub use table::{ColumnMetadata, TableDescriptor};
pub use type_map::{TypeMap, normalize_type};
// String utilities
pub use utils::{capitalize, lower_first, title_case_words, to_struct_name};
