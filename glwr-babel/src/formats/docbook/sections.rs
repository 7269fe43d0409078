//! `refsect1` dispatch and the structured sections

use super::parser::Walker;
use crate::common::xml::{attribute, content_children, first_child, qualified_name, text_content};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::error::Result;
use crate::ir::nodes::{Parameters, Scoped, ScopedSection, VarListEntry, Versions};
use once_cell::sync::Lazy;
use regex::Regex;
use roxmltree::Node;

static VERSION_ROLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@role='(\d)(\d)'").unwrap());

impl Walker {
    pub(super) fn refsect1(&mut self, refsect1: Node) -> Result<()> {
        let Some(id) = attribute(refsect1, "xml:id") else {
            self.diagnostics.push(
                DiagnosticKind::MissingAttribute,
                "No attribute xml:id in refsect1",
            );
            return Ok(());
        };

        let includes = self.includes;
        match id {
            "parameters" | "parameters2" => {
                if includes.parameters {
                    let (scope, parameters) = self.parameters(refsect1)?;
                    store_scoped(
                        &mut self.diagnostics,
                        &mut self.page.sections.parameters,
                        id,
                        scope,
                        parameters,
                    );
                }
            }
            "description" | "description2" => {
                if includes.description {
                    let scope = section_scope(refsect1);
                    let description = self.abstract_text(refsect1)?;
                    store_scoped(
                        &mut self.diagnostics,
                        &mut self.page.sections.description,
                        id,
                        scope,
                        description,
                    );
                }
            }
            "versions" => {
                if includes.version {
                    let versions = self.versions(refsect1);
                    store_once(
                        &mut self.diagnostics,
                        &mut self.page.sections.versions,
                        id,
                        versions,
                    );
                }
            }
            "examples" if includes.examples => self.text_section(refsect1, id)?,
            "notes" if includes.notes => self.text_section(refsect1, id)?,
            "errors" if includes.errors => self.text_section(refsect1, id)?,
            "associatedgets" if includes.associated_gets => self.text_section(refsect1, id)?,
            "seealso" if includes.see_also => self.text_section(refsect1, id)?,
            "Copyright" if includes.copyright => self.text_section(refsect1, id)?,
            "examples" | "notes" | "errors" | "associatedgets" | "seealso" | "Copyright" => {}
            _ => self.diagnostics.push(
                DiagnosticKind::UnknownConstruct,
                format!("Unknown refsect1 xml:id: {id}"),
            ),
        }

        Ok(())
    }

    /// Sections that are plain rich text.
    fn text_section(&mut self, refsect1: Node, id: &str) -> Result<()> {
        let text = self.abstract_text(refsect1)?;
        let sections = &mut self.page.sections;
        let slot = match id {
            "examples" => &mut sections.examples,
            "notes" => &mut sections.notes,
            "errors" => &mut sections.errors,
            "associatedgets" => &mut sections.associated_gets,
            "seealso" => &mut sections.see_also,
            _ => &mut sections.copyright,
        };

        store_once(&mut self.diagnostics, slot, id, text);
        Ok(())
    }

    fn parameters(&mut self, refsect1: Node) -> Result<(Option<String>, Parameters)> {
        let mut scope = None;
        let mut parameters = Parameters::default();

        for node in content_children(refsect1) {
            match qualified_name(node).as_ref() {
                "title" => {
                    scope = first_child(node, "function").map(text_content);
                }
                "variablelist" => {
                    for entry in content_children(node) {
                        if qualified_name(entry) == "varlistentry" {
                            let entry = self.varlistentry(entry)?;
                            parameters.entries.push(entry);
                        } else {
                            self.unknown("refsect1(parameters).variablelist", entry);
                        }
                    }
                }
                _ => self.unknown("refsect1(parameters)", node),
            }
        }

        Ok((scope, parameters))
    }

    fn varlistentry(&mut self, varlistentry: Node) -> Result<VarListEntry> {
        let mut entry = VarListEntry::default();

        for node in content_children(varlistentry) {
            match qualified_name(node).as_ref() {
                "term" => {
                    for term in content_children(node).filter(|child| child.is_element()) {
                        if qualified_name(term) == "parameter" {
                            entry.terms.push(text_content(term));
                        } else {
                            self.unknown("refsect1(parameters).variablelist.varlistentry.term", term);
                        }
                    }
                }
                "listitem" => self.append_abstract_text(node, &mut entry.listitem)?,
                _ => self.unknown("refsect1(parameters).variablelist.varlistentry", node),
            }
        }

        Ok(entry)
    }

    /// The version table: one row per function, the version encoded in the `role` of the
    /// included cell.
    fn versions(&mut self, refsect1: Node) -> Versions {
        let mut versions = Versions::default();

        let Some(table) = first_child(refsect1, "informaltable") else {
            self.diagnostics.push(
                DiagnosticKind::StructuralViolation,
                "refsect1(versions).informaltable missing",
            );
            return versions;
        };
        let Some(tgroup) = self.only_child(table, "refsect1(versions).informaltable", "tgroup")
        else {
            return versions;
        };
        let Some(tbody) = first_child(tgroup, "tbody") else {
            self.diagnostics.push(
                DiagnosticKind::StructuralViolation,
                "refsect1(versions).informaltable.tgroup.tbody missing",
            );
            return versions;
        };

        for row in content_children(tbody) {
            if qualified_name(row) != "row" {
                self.unknown("refsect1(versions).informaltable.tgroup.tbody", row);
                continue;
            }

            let entry = first_child(row, "entry");
            let include = entry.and_then(|entry| {
                entry
                    .next_siblings()
                    .find(|sibling| sibling.is_element() && qualified_name(*sibling) == "xi:include")
            });
            let (Some(entry), Some(include)) = (entry, include) else {
                self.diagnostics.push(
                    DiagnosticKind::StructuralViolation,
                    "refsect1(versions) row without entry or xi:include",
                );
                continue;
            };

            let Some(function) = first_child(entry, "function") else {
                continue;
            };
            let Some(xpointer) = attribute(include, "xpointer") else {
                self.diagnostics.push(
                    DiagnosticKind::MissingAttribute,
                    "refsect1(versions) xi:include without xpointer",
                );
                continue;
            };
            let Some(caps) = VERSION_ROLE.captures(xpointer) else {
                self.diagnostics.push(
                    DiagnosticKind::UnknownConstruct,
                    format!("version xpointer doesn't match: {xpointer}"),
                );
                continue;
            };

            versions
                .versions
                .insert(text_content(function), format!("{}.{}", &caps[1], &caps[2]));
        }

        versions
    }
}

/// Function named in the section title, if any.
fn section_scope(refsect1: Node) -> Option<String> {
    first_child(refsect1, "title")
        .and_then(|title| first_child(title, "function"))
        .map(text_content)
}

/// Store a base or function-scoped section, keeping the first of each kind.
fn store_scoped<T>(
    diagnostics: &mut Diagnostics,
    section: &mut ScopedSection<T>,
    id: &str,
    scope: Option<String>,
    content: T,
) {
    if !id.ends_with('2') {
        store_once(diagnostics, &mut section.base, id, content);
        return;
    }

    match scope {
        Some(function) => store_once(
            diagnostics,
            &mut section.scoped,
            id,
            Scoped { function, content },
        ),
        None => diagnostics.push(
            DiagnosticKind::StructuralViolation,
            format!("refsect1({id}) without function in title"),
        ),
    }
}

fn store_once<T>(diagnostics: &mut Diagnostics, slot: &mut Option<T>, id: &str, content: T) {
    if slot.is_some() {
        diagnostics.push(
            DiagnosticKind::DuplicateValue,
            format!("Duplicate value: refsect1({id})"),
        );
    } else {
        *slot = Some(content);
    }
}
