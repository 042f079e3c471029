//! Go code generator producing gin route handlers over gorm models.
//!
//! For every base table the [`Generator`] writes one `<table>.go` file holding
//! the model struct, the route registrar and five CRUD handlers. The package
//! name defaults to `models`, see [`GoOptions`].

mod crud;
mod error;
mod generator;
mod model;
mod naming;
mod swagger;

pub mod ast;
pub mod files;

pub use ast::{Func, GoFile, GoStruct, Param, StructField};
pub use crud::{Operation, render_crud_bundle};
pub use error::GenerateError;
pub use generator::{GenerateReport, Generator, GoOptions, Persistence};
pub use model::{RenderedModel, TypeGap, render_struct};
pub use naming::{GO_RESERVED, ModelNames, safe_local, to_field_name, to_route_segment, to_singular_var};
pub use swagger::DocHeader;
