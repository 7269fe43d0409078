//! Intermediate representation of a refpage
//!
//! The walker in [`crate::formats::docbook`] builds a [`nodes::Refpage`] once per document. The
//! model is read-only afterwards and is consumed by the header serializer once per prototype.
//! All prose is stored already rendered to HTML-tagged strings ([`nodes::AbstractText`]).

pub mod nodes;
