//! OpenGL refpage to documented C header conversion
//!
//!     This crate reads the OpenGL DocBook reference pages (one `refentry` XML document per API
//!     entry point) and turns them into C headers: every function prototype of a page is emitted
//!     with a `///` documentation comment block, built from the page's sections, followed by a
//!     declaration or an inline wrapper around the loader's function pointer.
//!
//!     This is a pure lib: it powers glwr-cli but is shell agnostic. Nothing here prints,
//!     reads env vars or walks directories. Diagnostics go through the `log` facade and are kept
//!     on the parsed page.
//!
//! Architecture
//!
//!     Data flows one way:
//!
//!         XML ─► formats/docbook (walker) ─► ir::nodes::Refpage ─► formats/header ─► text
//!
//!     The walker renders all prose to HTML-tagged strings while it walks, so the model only holds
//!     structure (names, prototypes, sections) and already rendered fragments. The header side
//!     never looks at XML.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # RefpageError, fatal per document
//!     ├── diagnostics.rs          # non-fatal anomalies, logged with the page name
//!     ├── options.rs              # Includes (section toggles), HeaderOptions
//!     ├── legacy.rs               # functions that are declared, not wrapped
//!     ├── format.rs               # Format trait
//!     ├── registry.rs             # FormatRegistry
//!     ├── ir                      # the Refpage model
//!     ├── common                  # XML node helpers
//!     └── formats
//!         ├── docbook             # the walker and its converters
//!         ├── header              # comment/declaration emitter, line wrapping
//!         └── json.rs             # inspection outputs
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── common                  # refpage fixture builders
//!     ├── docbook/<area>.rs
//!     └── header/<area>.rs
//!
//!     Rust does not discover tests in subdirectories by default, so tests/lib.rs declares them.
//!
//! Error policy
//!
//!     Anything odd inside a document (unknown tags, duplicate values, missing attributes, a
//!     wrapper with the wrong children, an unknown TeX formula) is a [`diagnostics::Diagnostic`]:
//!     logged, kept on the page, rendered as empty. Only I/O and XML syntax errors, for the page
//!     itself or one of its `xi:include` targets, fail the page with a [`error::RefpageError`].

pub mod common;
pub mod diagnostics;
pub mod error;
pub mod format;
pub mod formats;
pub mod ir;
pub mod legacy;
pub mod options;
pub mod registry;

pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use error::{RefpageError, Result};
pub use format::{Format, ParseContext};
pub use formats::header::{write_function_header, write_umbrella_header};
pub use ir::nodes::Refpage;
pub use legacy::{Gl1, LegacyFunctions};
pub use options::{HeaderOptions, Includes};
pub use registry::FormatRegistry;
