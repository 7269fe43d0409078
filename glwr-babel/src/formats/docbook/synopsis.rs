//! `refsynopsisdiv`: the C prototypes of the page

use super::parser::Walker;
use crate::common::xml::{content_children, qualified_name, text_content};
use crate::ir::nodes::{FuncDef, FuncPrototype, ParamDef};
use roxmltree::Node;

impl Walker {
    pub(super) fn refsynopsisdiv(&mut self, refsynopsisdiv: Node) {
        for node in content_children(refsynopsisdiv) {
            match qualified_name(node).as_ref() {
                "title" => {}
                "funcsynopsis" => self.funcsynopsis(node),
                _ => self.unknown("refsynopsisdiv", node),
            }
        }
    }

    fn funcsynopsis(&mut self, funcsynopsis: Node) {
        for node in content_children(funcsynopsis) {
            if qualified_name(node) == "funcprototype" {
                let prototype = self.funcprototype(node);
                self.page.synopsis.prototypes.push(prototype);
            } else {
                self.unknown("refsynopsisdiv.funcsynopsis", node);
            }
        }
    }

    fn funcprototype(&mut self, funcprototype: Node) -> FuncPrototype {
        let mut prototype = FuncPrototype::default();

        for node in content_children(funcprototype) {
            match qualified_name(node).as_ref() {
                "funcdef" => self.funcdef(node, &mut prototype.funcdef),
                "paramdef" => {
                    let paramdef = self.paramdef(node);
                    if !paramdef.is_void() {
                        prototype.paramdefs.push(paramdef);
                    }
                }
                _ => self.unknown("refsynopsisdiv.funcsynopsis.funcprototype", node),
            }
        }

        prototype
    }

    fn funcdef(&mut self, funcdef: Node, value: &mut FuncDef) {
        const CONTEXT: &str = "refsynopsisdiv.funcsynopsis.funcprototype.funcdef";

        for node in content_children(funcdef) {
            if node.is_text() {
                let ty = node.text().unwrap_or("").trim_end_matches(' ');
                self.diagnostics
                    .set_once(&format!("{CONTEXT}(type)"), &mut value.ty, ty);
            } else if qualified_name(node) == "function" {
                self.diagnostics.set_once(
                    &format!("{CONTEXT}.function"),
                    &mut value.function,
                    text_content(node),
                );
            } else {
                self.unknown(CONTEXT, node);
            }
        }
    }

    fn paramdef(&mut self, paramdef: Node) -> ParamDef {
        const CONTEXT: &str = "refsynopsisdiv.funcsynopsis.funcprototype.paramdef";
        let mut value = ParamDef::default();

        for node in content_children(paramdef) {
            if node.is_text() {
                let ty = node.text().unwrap_or("").trim_end_matches(' ');
                self.diagnostics
                    .set_once(&format!("{CONTEXT}(type)"), &mut value.ty, ty);
            } else if qualified_name(node) == "parameter" {
                self.diagnostics.set_once(
                    &format!("{CONTEXT}.parameter"),
                    &mut value.parameter,
                    text_content(node),
                );
            } else {
                self.unknown(CONTEXT, node);
            }
        }

        value
    }
}
