//! DocBook refpage reader
//!
//!     Walks a `refentry` document into a [`Refpage`](crate::ir::nodes::Refpage). The walk is a
//!     recursive descent over the element tree: structural elements (`refmeta`, `refnamediv`,
//!     `refsynopsisdiv`, `refsect1`) fill the model, while everything that appears in prose is
//!     rendered straight to HTML-tagged strings.
//!
//!     Nothing inside a document is fatal. Unknown elements, missing attributes and malformed
//!     structure are recorded as diagnostics and rendered as empty. Only failing to read or parse
//!     the document or one of its `xi:include` targets aborts the page.
//!
//!     parser.rs       entry points, refentry level, mixed-content text, includes
//!     sections.rs     refsect1 dispatch, parameters, versions
//!     synopsis.rs     function prototypes
//!     inline.rs       element dispatch and inline markup
//!     table.rs        tables, lists, program listings
//!     math.rs         MathML subset
//!     text.rs         whitespace normalization, TeX substitution
//!     latex.rs        known TeX formulas

mod inline;
pub mod latex;
mod math;
mod parser;
mod sections;
mod synopsis;
mod table;
pub mod text;

use crate::error::Result;
use crate::format::{Format, ParseContext};
use crate::ir::nodes::Refpage;

/// The DocBook refpage format. Parsing only.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocbookFormat;

impl Format for DocbookFormat {
    fn name(&self) -> &str {
        "docbook"
    }

    fn description(&self) -> &str {
        "OpenGL DocBook refpage"
    }

    fn file_extensions(&self) -> &[&str] {
        &["xml"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str, context: &ParseContext) -> Result<Refpage> {
        Refpage::parse(source, &context.name, &context.dir, &context.includes)
    }
}
