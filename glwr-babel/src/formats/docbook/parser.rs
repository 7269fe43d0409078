//! Document-structure walker
//!
//! Entry points and the `refentry` level of the walk. Section, synopsis, inline, math and table
//! handling live in sibling modules as further `impl Walker` blocks.

use super::text::{collapse_line_breaks, normalize, replace_formulas, trim_spaces};
use crate::common::xml::{attribute, content_children, display_name, qualified_name, text_content};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::error::{RefpageError, Result};
use crate::ir::nodes::{AbstractText, Copyright, Refpage};
use crate::options::Includes;
use roxmltree::{Document, Node, NodeType, ParsingOptions};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

impl Refpage {
    /// Parse one refpage from its XML source.
    ///
    /// `name` prefixes every diagnostic and becomes [`Refpage::name`]. `dir` is the base
    /// directory relative `xi:include` targets are resolved against. Sections switched off in
    /// `includes` are skipped without being parsed.
    pub fn parse(source: &str, name: &str, dir: &Path, includes: &Includes) -> Result<Refpage> {
        let path = dir.join(format!("{name}.xml"));
        let doc = parse_document(source, &path)?;

        let root = doc.root_element();
        if qualified_name(root) != "refentry" {
            return Err(RefpageError::MissingRoot {
                name: name.to_string(),
                found: qualified_name(root).into_owned(),
            });
        }

        let mut walker = Walker::new(name, dir, *includes);
        walker.refentry(root)?;
        Ok(walker.finish())
    }

    /// Read and parse a refpage file. The page is named after the file stem and includes are
    /// resolved next to the file.
    pub fn from_path(path: &Path, includes: &Includes) -> Result<Refpage> {
        let source = fs::read_to_string(path).map_err(|source| RefpageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_stem()
            .and_then(OsStr::to_str)
            .unwrap_or_default();
        let dir = path.parent().unwrap_or_else(|| Path::new("."));

        Self::parse(&source, name, dir, includes)
    }
}

/// Parse XML text, accepting the DocBook `<!DOCTYPE>` prologue.
pub(super) fn parse_document<'input>(source: &'input str, path: &Path) -> Result<Document<'input>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };

    Document::parse_with_options(source, options).map_err(|source| RefpageError::Xml {
        path: path.to_path_buf(),
        source,
    })
}

/// State of one document walk.
pub(super) struct Walker {
    pub(super) dir: PathBuf,
    pub(super) includes: Includes,
    pub(super) diagnostics: Diagnostics,
    /// Include targets currently being rendered, innermost last
    pub(super) include_stack: Vec<PathBuf>,
    /// Single-occurrence `refentry` children already walked
    blocks_seen: Vec<&'static str>,
    pub(super) page: Refpage,
}

impl Walker {
    pub(super) fn new(name: &str, dir: &Path, includes: Includes) -> Self {
        Self {
            dir: dir.to_path_buf(),
            includes,
            diagnostics: Diagnostics::new(name),
            include_stack: Vec::new(),
            blocks_seen: Vec::new(),
            page: Refpage {
                name: name.to_string(),
                ..Refpage::default()
            },
        }
    }

    pub(super) fn finish(self) -> Refpage {
        Refpage {
            diagnostics: self.diagnostics.into_entries(),
            ..self.page
        }
    }

    pub(super) fn refentry(&mut self, refentry: Node) -> Result<()> {
        for node in content_children(refentry) {
            match qualified_name(node).as_ref() {
                "info" => self.info(node),
                "refmeta" if self.first_block("refmeta") => self.refmeta(node),
                "refnamediv" if self.first_block("refnamediv") => self.refnamediv(node)?,
                "refsynopsisdiv" if self.first_block("refsynopsisdiv") => {
                    self.refsynopsisdiv(node)
                }
                "refmeta" | "refnamediv" | "refsynopsisdiv" => {}
                "refsect1" => self.refsect1(node)?,
                _ => self.unknown("", node),
            }
        }

        Ok(())
    }

    /// Whether `block` is met for the first time. A repeat is recorded and skipped.
    fn first_block(&mut self, block: &'static str) -> bool {
        if self.blocks_seen.contains(&block) {
            self.diagnostics.push(
                DiagnosticKind::DuplicateValue,
                format!("Duplicate value: {block}"),
            );
            false
        } else {
            self.blocks_seen.push(block);
            true
        }
    }

    fn info(&mut self, info: Node) {
        for node in content_children(info) {
            if qualified_name(node) == "copyright" {
                let copyright = self.copyright(node);
                self.page.copyrights.push(copyright);
            } else {
                self.unknown("info", node);
            }
        }
    }

    fn copyright(&mut self, copyright: Node) -> Copyright {
        let mut value = Copyright::default();

        for node in content_children(copyright) {
            match qualified_name(node).as_ref() {
                "year" => {
                    self.diagnostics
                        .set_once("info.copyright.year", &mut value.year, text_content(node))
                }
                "holder" => self.diagnostics.set_once(
                    "info.copyright.holder",
                    &mut value.holder,
                    text_content(node),
                ),
                _ => self.unknown("info.copyright", node),
            }
        }

        value
    }

    fn refmeta(&mut self, refmeta: Node) {
        for node in content_children(refmeta) {
            match qualified_name(node).as_ref() {
                "refentrytitle" => self.diagnostics.set_once(
                    "refmeta.refentrytitle",
                    &mut self.page.refmeta.title,
                    text_content(node),
                ),
                "manvolnum" => self.diagnostics.set_once(
                    "refmeta.manvolnum",
                    &mut self.page.refmeta.manvolnum,
                    text_content(node),
                ),
                _ => self.unknown("refmeta", node),
            }
        }
    }

    fn refnamediv(&mut self, refnamediv: Node) -> Result<()> {
        for node in content_children(refnamediv) {
            match qualified_name(node).as_ref() {
                "refdescriptor" => {
                    let descriptor = self.page.refnamediv.descriptor.get_or_insert_with(String::new);
                    self.diagnostics.set_once(
                        "refnamediv.refdescriptor",
                        descriptor,
                        text_content(node),
                    );
                }
                "refname" => self.page.refnamediv.names.push(text_content(node)),
                "refpurpose" => {
                    let purpose = self.text(node)?;
                    self.diagnostics.set_once(
                        "refnamediv.refpurpose",
                        &mut self.page.refnamediv.purpose,
                        purpose,
                    );
                }
                _ => self.unknown("refnamediv", node),
            }
        }

        Ok(())
    }

    /// Record an element (or stray text) outside the vocabulary of `context`.
    pub(super) fn unknown(&mut self, context: &str, node: Node) {
        let message = if context.is_empty() {
            format!("Unknown node: {}", display_name(node))
        } else {
            format!("Unknown node: {context}.{}", display_name(node))
        };
        self.diagnostics
            .push(DiagnosticKind::UnknownConstruct, message);
    }

    /// The single child of a wrapper element, which must be named `expected`.
    pub(super) fn only_child<'a, 'input>(
        &mut self,
        node: Node<'a, 'input>,
        context: &str,
        expected: &str,
    ) -> Option<Node<'a, 'input>> {
        let mut children = content_children(node);

        let Some(child) = children.next() else {
            self.diagnostics.push(
                DiagnosticKind::StructuralViolation,
                format!("node without child nodes: {context}"),
            );
            return None;
        };

        if children.next().is_some() {
            self.diagnostics.push(
                DiagnosticKind::StructuralViolation,
                format!("node with multiple child nodes: {context}"),
            );
            None
        } else if qualified_name(child) == expected {
            Some(child)
        } else {
            self.diagnostics.push(
                DiagnosticKind::StructuralViolation,
                format!("node with invalid child node: {context}"),
            );
            None
        }
    }

    /// Render mixed content to one string.
    ///
    /// Text runs have their line breaks collapsed, child elements are rendered recursively, the
    /// whole result is trimmed of outer spaces and then TeX spans are substituted.
    pub(super) fn text(&mut self, node: Node) -> Result<String> {
        let mut out = String::new();

        for child in node.children() {
            match child.node_type() {
                NodeType::Text => out.push_str(&collapse_line_breaks(child.text().unwrap_or(""))),
                NodeType::Element => out.push_str(&self.render_node(child)?),
                _ => {}
            }
        }

        Ok(replace_formulas(trim_spaces(&out), &mut self.diagnostics))
    }

    /// Render every child block of `node` into its own fragment.
    pub(super) fn abstract_text(&mut self, node: Node) -> Result<AbstractText> {
        let mut text = AbstractText::default();
        self.append_abstract_text(node, &mut text)?;
        Ok(text)
    }

    pub(super) fn append_abstract_text(&mut self, node: Node, text: &mut AbstractText) -> Result<()> {
        for child in content_children(node) {
            let fragment = if child.is_text() {
                let normalized = normalize(child.text().unwrap_or(""));
                replace_formulas(&normalized, &mut self.diagnostics)
            } else {
                self.render_node(child)?
            };
            text.push(fragment);
        }

        Ok(())
    }

    /// Render the root element of another file in place of an `xi:include`.
    pub(super) fn include(&mut self, include: Node) -> Result<String> {
        let Some(href) = attribute(include, "href") else {
            self.diagnostics.push(
                DiagnosticKind::MissingAttribute,
                "xi:include without href",
            );
            return Ok(String::new());
        };

        let path = self.dir.join(href);
        if self.include_stack.contains(&path) {
            self.diagnostics.push(
                DiagnosticKind::StructuralViolation,
                format!("Recursive xi:include: {href}"),
            );
            return Ok(String::new());
        }

        let source = fs::read_to_string(&path).map_err(|source| RefpageError::Io {
            path: path.clone(),
            source,
        })?;
        let doc = parse_document(&source, &path)?;

        self.include_stack.push(path);
        let rendered = self.render_node(doc.root_element());
        self.include_stack.pop();
        rendered
    }
}
