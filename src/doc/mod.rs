//! Telemetry document loading and field resolution.

pub mod parse;
pub mod resolve;

pub use parse::{SourceDoc, parse_doc_file};
pub use resolve::resolve;
