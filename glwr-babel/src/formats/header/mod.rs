//! Documented C header output
//!
//! One header per refpage, holding every prototype of the page with a `///` comment block
//! assembled from the parsed sections, plus the umbrella header that includes them all.

pub mod serializer;
pub mod wrap;

pub use serializer::{
    generate_comment, generate_declaration, write_function_header, write_umbrella_header,
};

use crate::error::Result;
use crate::format::Format;
use crate::ir::nodes::Refpage;
use crate::legacy::{Gl1, LegacyFunctions};
use crate::options::HeaderOptions;

/// Format implementation for per-refpage headers
#[derive(Debug, Clone, Copy)]
pub struct HeaderFormat<L = Gl1> {
    legacy: L,
}

impl<L> HeaderFormat<L> {
    /// Serializer declaring the functions in `legacy` and wrapping all others.
    pub fn new(legacy: L) -> Self {
        Self { legacy }
    }
}

impl Default for HeaderFormat<Gl1> {
    fn default() -> Self {
        Self::new(Gl1)
    }
}

impl<L: LegacyFunctions + Send + Sync> Format for HeaderFormat<L> {
    fn name(&self) -> &str {
        "header"
    }

    fn description(&self) -> &str {
        "C header with documentation comments"
    }

    fn file_extensions(&self) -> &[&str] {
        &["h"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, page: &Refpage, options: &HeaderOptions) -> Result<String> {
        Ok(write_function_header(page, &self.legacy, options))
    }
}
