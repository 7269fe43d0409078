//! Refpage model to documented C declarations

use super::wrap::write_wrapped;
use crate::ir::nodes::{AbstractText, FuncPrototype, ParamDef, Refpage, VarListEntry};
use crate::legacy::LegacyFunctions;
use crate::options::HeaderOptions;

/// Guard at the top of every per-function header.
pub const FUNCTION_HEADER_HEAD: &str = "#ifndef OPENGL_GLWR_H_
#error \"Do not include glwr function headers directly, include GL/glwr.h\"
#endif
";

const UMBRELLA_HEAD: &str = "#ifndef OPENGL_GLWR_H_
#define OPENGL_GLWR_H_

#include <GL/glew.h>

#if defined(__GNUC__) || defined(__clang__)
#define GLWR_INLINE __attribute__((always_inline)) inline
#elif defined(_MSC_VER)
#define GLWR_INLINE __forceinline
#else
#define GLWR_INLINE inline
#endif

using DEBUGPROC = GLDEBUGPROC;

";

const UMBRELLA_TAIL: &str = "
#endif
";

/// The header of one refpage: `#undef`s for the wrapped functions, then every prototype with
/// its comment block.
pub fn write_function_header(
    page: &Refpage,
    legacy: &dyn LegacyFunctions,
    options: &HeaderOptions,
) -> String {
    let mut out = String::from(FUNCTION_HEADER_HEAD);

    let wrapped: Vec<&str> = page
        .prototypes()
        .iter()
        .map(FuncPrototype::name)
        .filter(|name| !legacy.is_legacy(name))
        .collect();
    if !wrapped.is_empty() {
        out.push('\n');
        for name in wrapped {
            out.push_str(&format!("#undef {name}\n"));
        }
    }

    for prototype in page.prototypes() {
        out.push('\n');
        out.push_str(&generate_comment(page, prototype, options));
        out.push_str(&generate_declaration(prototype, legacy));
    }

    out
}

/// The `///` block documenting one prototype of `page`.
///
/// A section is written when the page holds it and `options.includes` enables it.
pub fn generate_comment(page: &Refpage, prototype: &FuncPrototype, options: &HeaderOptions) -> String {
    let includes = &options.includes;
    let width = options.width;
    let function = prototype.name();
    let sections = &page.sections;
    let mut out = String::new();

    if includes.link || includes.brief {
        out.push_str("///\n/// \\brief\n");

        if includes.link {
            out.push_str(&format!(
                "/// <a href=\"{}{name}.xhtml\">{name}</a> \n",
                options.link_base,
                name = page.name
            ));
        }

        if includes.brief {
            let purpose = &page.refnamediv.purpose;
            if includes.link {
                write_wrapped(&mut out, &format!("&ndash; {purpose}"), width);
            } else {
                write_wrapped(&mut out, purpose, width);
            }
        }
    }

    if let Some(version) = sections
        .versions
        .as_ref()
        .filter(|_| includes.version)
        .and_then(|versions| versions.get(function))
    {
        out.push_str(&format!("///\n/// \\since OpenGL {version}\n"));
    }

    if let Some(description) = sections
        .description
        .resolve(function)
        .filter(|_| includes.description)
    {
        write_section(&mut out, "description", description, width);
    }
    if let Some(examples) = sections.examples.as_ref().filter(|_| includes.examples) {
        write_section(&mut out, "examples", examples, width);
    }
    if let Some(notes) = sections.notes.as_ref().filter(|_| includes.notes) {
        write_section(&mut out, "notes", notes, width);
    }

    if let Some(parameters) = sections
        .parameters
        .resolve(function)
        .filter(|_| includes.parameters)
    {
        for entry in &parameters.entries {
            let names = documented_parameters(prototype, entry);
            if names.is_empty() {
                continue;
            }

            out.push_str(&format!("///\n/// \\param {}\n", names.join(", ")));
            write_text(&mut out, &entry.listitem, width);
        }
    }

    if let Some(errors) = sections.errors.as_ref().filter(|_| includes.errors) {
        write_section(&mut out, "errors", errors, width);
    }
    if let Some(gets) = sections
        .associated_gets
        .as_ref()
        .filter(|_| includes.associated_gets)
    {
        write_section(&mut out, "associated_gets", gets, width);
    }
    if let Some(see_also) = sections.see_also.as_ref().filter(|_| includes.see_also) {
        write_section(&mut out, "see_also", see_also, width);
    }
    if let Some(copyright) = sections.copyright.as_ref().filter(|_| includes.copyright) {
        write_section(&mut out, "copyright", copyright, width);
    }

    out.push_str("///\n");
    out
}

/// The C declaration of a prototype. Non-legacy functions become inline wrappers around the
/// loader's function pointer.
pub fn generate_declaration(prototype: &FuncPrototype, legacy: &dyn LegacyFunctions) -> String {
    let function = prototype.name();
    let parameters = prototype
        .paramdefs
        .iter()
        .map(|param| format!("{} {}", param.ty, param.parameter))
        .collect::<Vec<_>>()
        .join(", ");
    let signature = format!("{} {function}({parameters})", prototype.funcdef.ty);

    if legacy.is_legacy(function) {
        return format!("{signature};\n");
    }

    let suffix = function.get(2..).unwrap_or_default();
    let arguments = prototype
        .paramdefs
        .iter()
        .map(|param| param.parameter.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!("GLWR_INLINE {signature} {{\n\tGLEW_GET_FUN(__glew{suffix})({arguments});\n}}\n")
}

/// The umbrella header including every generated page, in the given order.
pub fn write_umbrella_header<S: AsRef<str>>(pages: &[S]) -> String {
    let mut out = String::from(UMBRELLA_HEAD);
    for page in pages {
        out.push_str(&format!("#include \"func/{}.h\"\n", page.as_ref()));
    }
    out.push_str(UMBRELLA_TAIL);
    out
}

/// Terms of `entry` that are parameters of `prototype`, in declaration order.
fn documented_parameters<'a>(prototype: &'a FuncPrototype, entry: &VarListEntry) -> Vec<&'a str> {
    prototype
        .paramdefs
        .iter()
        .map(|param: &ParamDef| param.parameter.as_str())
        .filter(|name| entry.terms.iter().any(|term| term == name))
        .collect()
}

fn write_section(out: &mut String, tag: &str, text: &AbstractText, width: usize) {
    out.push_str(&format!("///\n/// \\{tag}\n"));
    write_text(out, text, width);
}

fn write_text(out: &mut String, text: &AbstractText, width: usize) {
    for element in &text.elements {
        write_wrapped(out, element, width);
    }
}
