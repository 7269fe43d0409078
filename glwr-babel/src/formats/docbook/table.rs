//! Tables, lists and program listings

use super::parser::Walker;
use crate::common::xml::{content_children, qualified_name};
use crate::error::Result;
use crate::ir::nodes::AbstractText;
use roxmltree::{Node, NodeType};

const TABLE_OPEN: &str = "<table style=\"border:1px solid; border-spacing:0px; margin:8px;\">\n";
const CELL_STYLE: &str = "style=\"border:1px solid; padding:5px; margin:0px;\"";

impl Walker {
    /// `table` and `informaltable`.
    pub(super) fn table(&mut self, table: Node) -> Result<String> {
        let context = qualified_name(table).into_owned();
        let mut out = String::from(TABLE_OPEN);

        for node in content_children(table) {
            match qualified_name(node).as_ref() {
                "title" => out.push_str(&self.enclose(node, "<title>", "</title>\n")?),
                "tgroup" => self.table_group(node, &context, &mut out)?,
                _ => self.unknown(&context, node),
            }
        }

        out.push_str("</table>\n");
        Ok(out)
    }

    fn table_group(&mut self, tgroup: Node, context: &str, out: &mut String) -> Result<()> {
        let context = format!("{context}.tgroup");

        for node in content_children(tgroup) {
            match qualified_name(node).as_ref() {
                "colspec" => {}
                "thead" => self.table_rows(node, "th", &context, out)?,
                "tbody" => self.table_rows(node, "td", &context, out)?,
                _ => self.unknown(&context, node),
            }
        }

        Ok(())
    }

    fn table_rows(&mut self, rows: Node, cell: &str, context: &str, out: &mut String) -> Result<()> {
        let context = format!("{context}.{}", qualified_name(rows));

        for row in content_children(rows) {
            if qualified_name(row) != "row" {
                self.unknown(&context, row);
                continue;
            }

            out.push_str("<tr>\n");
            for entry in content_children(row) {
                if qualified_name(entry) == "entry" {
                    out.push_str(&format!("<{cell} {CELL_STYLE}>\n"));
                    out.push_str(&self.text(entry)?);
                    out.push_str(&format!("</{cell}>\n"));
                } else {
                    self.unknown(&format!("{context}.row"), entry);
                }
            }
            out.push_str("</tr>\n");
        }

        Ok(())
    }

    /// One `<pre>` per source line so the output stays line-bounded.
    pub(super) fn programlisting(&mut self, listing: Node) -> Result<String> {
        let mut contents = String::new();

        for node in listing.children() {
            match node.node_type() {
                NodeType::Text => contents.push_str(node.text().unwrap_or("")),
                NodeType::Element => contents.push_str(&self.render_node(node)?),
                _ => {}
            }
        }

        Ok(contents
            .lines()
            .map(|line| format!("<pre>{line}</pre>\n"))
            .collect())
    }

    pub(super) fn itemizedlist(&mut self, list: Node) -> Result<String> {
        let mut out = String::from("<ul>\n");

        for node in content_children(list) {
            if qualified_name(node) == "listitem" {
                out.push_str(&self.enclose(node, "<li>", "</li>\n")?);
            } else {
                self.unknown("itemizedlist", node);
            }
        }

        out.push_str("</ul>\n");
        Ok(out)
    }

    /// `variablelist` and `glosslist` as a two-column table of terms and definitions.
    pub(super) fn variablelist(&mut self, list: Node) -> Result<String> {
        let context = qualified_name(list).into_owned();
        let mut out = String::from("<table>\n");

        for node in content_children(list) {
            match qualified_name(node).as_ref() {
                "varlistentry" | "glossentry" => out.push_str(&self.list_entry(node)?),
                _ => self.unknown(&context, node),
            }
        }

        out.push_str("</table>");
        Ok(out)
    }

    fn list_entry(&mut self, entry: Node) -> Result<String> {
        let context = qualified_name(entry).into_owned();
        let mut terms = Vec::new();
        let mut definition = AbstractText::default();

        for node in content_children(entry) {
            match qualified_name(node).as_ref() {
                "term" | "glossterm" => terms.push(self.enclose(node, "<i><code>", "</code></i>")?),
                "listitem" | "glossdef" => self.append_abstract_text(node, &mut definition)?,
                _ => self.unknown(&context, node),
            }
        }

        let mut out = String::from("<tr>\n<th>\n");
        out.push_str(&terms.join(", "));
        out.push_str("</th>\n<td>&nbsp;&nbsp;</td>\n<td>\n");
        for element in &definition.elements {
            out.push_str(element);
            out.push('\n');
        }
        out.push_str("</td>\n</tr>\n");
        Ok(out)
    }
}
