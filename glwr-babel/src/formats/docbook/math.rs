//! MathML subset to inline HTML

use super::parser::Walker;
use crate::common::xml::{attribute, content_children, display_name, has_descendant, qualified_name};
use crate::diagnostics::DiagnosticKind;
use crate::error::Result;
use roxmltree::Node;

impl Walker {
    /// `inlineequation` and `informalequation`, each wrapping one `mml:math`.
    ///
    /// An equation containing a matrix is boxed into a one-cell table so it renders as a block.
    pub(super) fn equation(&mut self, equation: Node) -> Result<String> {
        let context = qualified_name(equation).into_owned();
        let Some(math) = self.only_child(equation, &context, "mml:math") else {
            return Ok(String::new());
        };

        let value = self.math_children(math);
        if has_descendant(equation, "mml:mtable") {
            Ok(format!("<table><tr><td> {value} </td></tr></table>"))
        } else {
            Ok(value)
        }
    }

    fn math_children(&mut self, parent: Node) -> String {
        content_children(parent)
            .map(|node| self.math_node(node))
            .collect()
    }

    fn math_node(&mut self, node: Node) -> String {
        if node.is_text() {
            return node.text().unwrap_or("").to_string();
        }

        match qualified_name(node).as_ref() {
            "mml:mi" => self.math_identifier(node, true),
            "mml:mtext" => self.math_identifier(node, false),
            "mml:mn" | "mml:mo" | "mml:mrow" => self.math_children(node),
            "mml:mfenced" => self.math_fenced(node),
            "mml:msup" => self
                .math_pair(node)
                .map(|(base, exponent)| format!("{base}<sup>{exponent}</sup>"))
                .unwrap_or_default(),
            "mml:msub" => self
                .math_pair(node)
                .map(|(base, index)| format!("{base}<sub>{index}</sub>"))
                .unwrap_or_default(),
            "mml:mfrac" => self
                .math_pair(node)
                .map(|(numerator, denominator)| {
                    format!("<sup>{numerator}</sup>/<sub>{denominator}</sub>")
                })
                .unwrap_or_default(),
            "mml:mtable" => format!("<table>\n{}</table>\n", self.math_children(node)),
            "mml:mtr" => format!("<tr>\n{}</tr>\n", self.math_children(node)),
            "mml:mtd" => format!("<td>{}</td>\n", self.math_children(node)),
            "mml:mspace" => "&nbsp;&nbsp;&nbsp;&nbsp;".to_string(),
            _ => {
                self.diagnostics.push(
                    DiagnosticKind::UnknownConstruct,
                    format!("Unknown math node: {}", display_name(node)),
                );
                String::new()
            }
        }
    }

    /// `mi` and `mtext`. Only `mi` italicizes single-character identifiers on its own.
    fn math_identifier(&mut self, node: Node, auto_italic: bool) -> String {
        let value = self.math_children(node);

        match attribute(node, "mathvariant") {
            Some("italic") => format!("<i>{value}</i>"),
            Some(variant) => {
                self.diagnostics.push(
                    DiagnosticKind::UnknownConstruct,
                    format!(
                        "Unknown {} mathvariant value: {variant}",
                        qualified_name(node)
                    ),
                );
                value
            }
            None if auto_italic && value.chars().count() == 1 => format!("<i>{value}</i>"),
            None => value,
        }
    }

    fn math_fenced(&mut self, fenced: Node) -> String {
        let open = attribute(fenced, "open").unwrap_or("(");
        let close = attribute(fenced, "close").unwrap_or(")");

        let children: Vec<String> = content_children(fenced)
            .map(|node| self.math_node(node))
            .collect();

        format!("{open}{}{close}", children.join(",&nbsp;"))
    }

    /// Both operands of `msup`, `msub` and `mfrac`, which take exactly two children.
    fn math_pair(&mut self, node: Node) -> Option<(String, String)> {
        let children: Vec<Node> = content_children(node).collect();

        match children.as_slice() {
            [first, second] => Some((self.math_node(*first), self.math_node(*second))),
            _ => {
                self.diagnostics.push(
                    DiagnosticKind::StructuralViolation,
                    format!(
                        "{} expects 2 child nodes, found {}",
                        qualified_name(node),
                        children.len()
                    ),
                );
                None
            }
        }
    }
}
