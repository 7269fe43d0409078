//! Thin helpers over the `roxmltree` node API
//!
//! Refpages mix the DocBook default namespace with MathML, XInclude and XLink. The walker
//! dispatches on conventional qualified names (`mml:mi`, `xi:include`) no matter which prefix
//! the source document bound, and on local names for everything else.

use roxmltree::{Node, NodeType};
use std::borrow::Cow;

pub const MATHML_NS: &str = "http://www.w3.org/1998/Math/MathML";
pub const XINCLUDE_NS: &str = "http://www.w3.org/2001/XInclude";
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// Dispatch name of a node. Text nodes have the empty name.
pub fn qualified_name<'input>(node: Node<'_, 'input>) -> Cow<'input, str> {
    if !node.is_element() {
        return Cow::Borrowed("");
    }

    let tag = node.tag_name();
    match tag.namespace() {
        Some(MATHML_NS) => Cow::Owned(format!("mml:{}", tag.name())),
        Some(XINCLUDE_NS) => Cow::Owned(format!("xi:{}", tag.name())),
        _ => Cow::Borrowed(tag.name()),
    }
}

/// Name used in diagnostics; text nodes show up as `#text`.
pub fn display_name<'input>(node: Node<'_, 'input>) -> Cow<'input, str> {
    if node.is_text() {
        Cow::Borrowed("#text")
    } else {
        qualified_name(node)
    }
}

/// Look up an attribute by qualified name (`xml:id`, `xlink:href`, `role`).
pub fn attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    match name.split_once(':') {
        Some(("xml", local)) => node.attribute((XML_NS, local)),
        Some(("xlink", local)) => node.attribute((XLINK_NS, local)),
        _ => node.attribute(name),
    }
}

/// Whether a node is a text node holding nothing but whitespace.
pub fn is_blank_text(node: Node) -> bool {
    node.is_text() && node.text().map_or(true, |text| text.trim().is_empty())
}

/// Children that carry content: elements and non-blank text, in document order.
///
/// Comments, processing instructions and the whitespace that pretty-printing puts between
/// structural elements are skipped.
pub fn content_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| match child.node_type() {
        NodeType::Element => true,
        NodeType::Text => !is_blank_text(*child),
        _ => false,
    })
}

/// First element child with the given dispatch name.
pub fn first_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && qualified_name(*child) == name)
}

/// Whether any element below `node` has the given dispatch name.
pub fn has_descendant(node: Node, name: &str) -> bool {
    node.descendants()
        .skip(1)
        .any(|descendant| descendant.is_element() && qualified_name(descendant) == name)
}

/// Concatenated raw text of every text node below `node`.
pub fn text_content(node: Node) -> String {
    node.descendants()
        .filter(|descendant| descendant.is_text())
        .filter_map(|descendant| descendant.text())
        .collect()
}
