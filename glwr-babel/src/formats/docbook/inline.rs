//! Element dispatch and inline markup

use super::parser::Walker;
use crate::common::xml::{attribute, display_name, qualified_name};
use crate::diagnostics::DiagnosticKind;
use crate::error::Result;
use roxmltree::Node;

impl Walker {
    /// Render any element that may appear in prose.
    pub(super) fn render_node(&mut self, node: Node) -> Result<String> {
        match qualified_name(node).as_ref() {
            "title" | "footnote" => Ok(String::new()),
            "para" => self.enclose(node, "<p>", "</p>"),
            "xi:include" => self.include(node),
            "parameter" | "constant" | "code" => self.enclose(node, "<code>", "</code>"),
            "function" => self.enclose(node, "<b><code>", "</code></b>"),
            "superscript" => self.enclose(node, "<sup>", "</sup>"),
            "emphasis" => self.emphasis(node),
            "trademark" => Ok(self.trademark(node)),
            "citerefentry" => self.citerefentry(node),
            "link" => self.link(node),
            "informaltable" | "table" => self.table(node),
            "programlisting" => self.programlisting(node),
            "itemizedlist" => self.itemizedlist(node),
            "variablelist" | "glosslist" => self.variablelist(node),
            "inlineequation" | "informalequation" => self.equation(node),
            _ => {
                self.diagnostics.push(
                    DiagnosticKind::UnknownConstruct,
                    format!("Unknown text node: {}", display_name(node)),
                );
                Ok(String::new())
            }
        }
    }

    /// Render the mixed content of `node` between two tags.
    pub(super) fn enclose(&mut self, node: Node, open: &str, close: &str) -> Result<String> {
        Ok(format!("{open}{}{close}", self.text(node)?))
    }

    fn emphasis(&mut self, emphasis: Node) -> Result<String> {
        match attribute(emphasis, "role") {
            None => self.enclose(emphasis, "<i>", "</i>"),
            Some("bold") => self.enclose(emphasis, "<b>", "</b>"),
            Some(role) => {
                self.diagnostics.push(
                    DiagnosticKind::UnknownConstruct,
                    format!("Unknown emphasis role attribute: {role}"),
                );
                self.text(emphasis)
            }
        }
    }

    fn trademark(&mut self, trademark: Node) -> String {
        match attribute(trademark, "class") {
            Some("copyright") => "(c)".to_string(),
            Some(class) => {
                self.diagnostics.push(
                    DiagnosticKind::UnknownConstruct,
                    format!("Unknown trademark class: {class}"),
                );
                String::new()
            }
            None => {
                self.diagnostics.push(
                    DiagnosticKind::MissingAttribute,
                    "Trademark node without class attribute",
                );
                String::new()
            }
        }
    }

    fn citerefentry(&mut self, citerefentry: Node) -> Result<String> {
        match self.only_child(citerefentry, "citerefentry", "refentrytitle") {
            Some(title) => self.enclose(title, "<b>", "</b>"),
            None => Ok(String::new()),
        }
    }

    fn link(&mut self, link: Node) -> Result<String> {
        let Some(href) = attribute(link, "xlink:href") else {
            self.diagnostics.push(
                DiagnosticKind::MissingAttribute,
                "Link node without xlink:href attribute",
            );
            return Ok(String::new());
        };

        self.enclose(link, &format!("<a href=\"{href}\">"), "</a>")
    }
}
