//! Go syntax builders.

mod file;
mod funcs;
mod structs;

pub use file::GoFile;
pub use funcs::{Func, Param};
pub use structs::{GoStruct, StructField};
