//! Field schema layer: dotted paths + alias tables.
//!
//! This module is intentionally separate from document parsing and reporting.
//! It owns:
//! - FieldPath type (parsed dotted path)
//! - Alias table spec (alias file shape + builtin table)

pub mod aliases;
pub mod builtin;
pub mod path;

pub use aliases::{AliasTable, AliasesSpec};
pub use builtin::builtin_table;
pub use path::{FieldPath, Segment};
