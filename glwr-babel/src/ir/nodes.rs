//! Core data structures of the parsed refpage model.

use crate::diagnostics::Diagnostic;
use serde::Serialize;
use std::collections::BTreeMap;

/// Rich text already rendered to HTML-tagged fragments, one per source block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AbstractText {
    pub elements: Vec<String>,
}

impl AbstractText {
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Append a fragment, dropping empty ones.
    pub fn push(&mut self, element: String) {
        if !element.is_empty() {
            self.elements.push(element);
        }
    }
}

/// Copyright notice from the `info` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Copyright {
    pub year: String,
    pub holder: String,
}

/// `refmeta` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RefMeta {
    pub title: String,
    pub manvolnum: String,
}

/// `refnamediv` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RefNameDiv {
    pub descriptor: Option<String>,
    pub names: Vec<String>,
    /// Rendered purpose text
    pub purpose: String,
}

/// Return type and name of a prototype.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FuncDef {
    #[serde(rename = "type")]
    pub ty: String,
    pub function: String,
}

/// One parameter of a prototype.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParamDef {
    #[serde(rename = "type")]
    pub ty: String,
    pub parameter: String,
}

impl ParamDef {
    /// `void` in either position marks an empty parameter list.
    pub fn is_void(&self) -> bool {
        self.ty == "void" || self.parameter == "void"
    }
}

/// A C function signature declared by the refpage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FuncPrototype {
    pub funcdef: FuncDef,
    pub paramdefs: Vec<ParamDef>,
}

impl FuncPrototype {
    pub fn name(&self) -> &str {
        &self.funcdef.function
    }

    pub fn has_parameter(&self, name: &str) -> bool {
        self.paramdefs.iter().any(|param| param.parameter == name)
    }
}

/// `refsynopsisdiv` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RefSynopsisDiv {
    pub prototypes: Vec<FuncPrototype>,
}

/// A parameter description: every term shares the same list item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VarListEntry {
    pub terms: Vec<String>,
    pub listitem: AbstractText,
}

/// Contents of a parameters section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Parameters {
    pub entries: Vec<VarListEntry>,
}

/// Function name → `major.minor` OpenGL version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Versions {
    pub versions: BTreeMap<String, String>,
}

impl Versions {
    pub fn get(&self, function: &str) -> Option<&str> {
        self.versions.get(function).map(String::as_str)
    }
}

/// A section variant that only applies to one function of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scoped<T> {
    pub function: String,
    pub content: T,
}

/// A section that may come as a base version plus a function-scoped override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopedSection<T> {
    pub base: Option<T>,
    pub scoped: Option<Scoped<T>>,
}

impl<T> Default for ScopedSection<T> {
    fn default() -> Self {
        Self {
            base: None,
            scoped: None,
        }
    }
}

impl<T> ScopedSection<T> {
    /// Content that applies to `function`: the override when its scope matches, the base
    /// otherwise.
    pub fn resolve(&self, function: &str) -> Option<&T> {
        match &self.scoped {
            Some(scoped) if scoped.function == function => Some(&scoped.content),
            _ => self.base.as_ref(),
        }
    }

    pub fn is_present(&self) -> bool {
        self.base.is_some() || self.scoped.is_some()
    }
}

/// All optional `refsect1` sections of a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Sections {
    pub parameters: ScopedSection<Parameters>,
    pub description: ScopedSection<AbstractText>,
    pub examples: Option<AbstractText>,
    pub notes: Option<AbstractText>,
    pub errors: Option<AbstractText>,
    pub associated_gets: Option<AbstractText>,
    pub versions: Option<Versions>,
    pub see_also: Option<AbstractText>,
    pub copyright: Option<AbstractText>,
}

/// A parsed refpage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Refpage {
    /// Page name, the file stem (`glBindBuffer`)
    pub name: String,
    pub copyrights: Vec<Copyright>,
    pub refmeta: RefMeta,
    pub refnamediv: RefNameDiv,
    pub synopsis: RefSynopsisDiv,
    pub sections: Sections,
    /// Anomalies recorded while parsing, in source order
    pub diagnostics: Vec<Diagnostic>,
}

impl Refpage {
    pub fn prototypes(&self) -> &[FuncPrototype] {
        &self.synopsis.prototypes
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
