//! Format implementations
//!
//! The DocBook reader, the C header writer and the inspection outputs.

pub mod docbook;
pub mod header;
pub mod json;

pub use docbook::DocbookFormat;
pub use header::HeaderFormat;
pub use json::{DiagnosticsFormat, JsonFormat};
