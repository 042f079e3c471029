//! Shared code generation utilities for the gormgen model generator.
//!
//! This crate provides language-agnostic building blocks used by the
//! target-language generator (`gormgen-codegen-go`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, Template, etc.)
//! - [`generation`] - Output management (ImportCollector)

pub mod builder;
pub mod generation;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable, Template};
pub use generation::ImportCollector;
