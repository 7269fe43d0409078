//! Known TeX formulas
//!
//! The refpages embed a small, closed set of TeX snippets in prose. Each one is mapped verbatim
//! to hand-written HTML. A formula outside this table is an error for the caller to report.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Rendered in place of a formula that is not in the table.
pub const UNRECOGNIZED_FORMULA: &str = "<code>LaTeX</code>";

static FORMULAS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("first", "<i>first</i>"),
        ("first + count - 1", "<i>first</i> + <i>count</i> - 1"),
        ("first + count", "<i>first</i> + <i>count</i>"),
        (
            "z_{min} \\leq z_c \\leq w_c",
            "<i>z<sub>min</sub></i> &le; <i>z<sub>c</sub></i> &le; <i>w<sub>c</sub></i>",
        ),
        ("z_{min} = -w_c", "<i>z<sub>min</sub></i> = -<i>w<sub>c</sub></i>"),
        ("z_{min} = 0", "<i>z<sub>min</sub></i> = 0"),
        ("y_d", "<i>y<sub>d</sub></i>"),
        (
            "y_d = { { f \\times y_c } \\over w_c }",
            "<i>y<sub>d</sub></i> = <sup><i>f</i> &times; <i>y<sub>c</sub></i></sup>/<sub><i>w<sub>c</sub></i></sub>",
        ),
        ("f = 1", "<i>f</i> = 1"),
        ("f = -1", "<i>f</i> = -1"),
        ("z_w", "<i>z<sub>w</sub></i>"),
        (
            "z_w = s \\times z_d + b",
            "<i>z<sub>w</sub></i> = <i>s</i> &times; <i>z<sub>d</sub></i> + <i>b</i>",
        ),
        (
            "s = { { f - n } \\over 2 }",
            "<i>s</i> = <sup><i>f</i> - <i>n</i></sup>/<sub>2</sub>",
        ),
        (
            "b = { {n + f} \\over 2 }",
            "<i>b</i> = <sup><i>n</i> + <i>f</i></sup>/<sub>2</sub>",
        ),
        ("s = f - n", "<i>s</i> = <i>f</i> - <i>n</i>"),
        ("b = n", "<i>b</i> = <i>n</i>"),
        ("n", "<i>n</i>"),
        ("f", "<i>f</i>"),
        ("k", "<i>k</i>"),
        ("m", "<i>m</i>"),
        ("q", "<i>q</i>"),
        ("N", "<i>N</i>"),
        ("size", "<i>size</i>"),
        ("components", "<i>components</i>"),
        ("base\\_type", "<i>base_type</i>"),
        ("[0,1]", "[0,1]"),
        ("(0,0)", "(0,0)"),
        ("log_2", "log<sub>2</sub>"),
        (" face = k \\bmod 6. ", " <i>face</i> = <i>k</i> mod 6. "),
        (
            " layer = \\left\\lfloor { layer \\over 6 } \\right\\rfloor",
            " <i>layer</i> = &lfloor; <i>layer</i>/6 &rfloor;",
        ),
        ("level_{base}", "<i>level<sub>base</sub></i>"),
        ("level_{base} + 1", "<i>level<sub>base</sub></i> + 1"),
        ("level_{base}+1", "<i>level<sub>base</sub></i> + 1"),
        (
            " \\left\\lfloor { size \\over { components \\times sizeof(base\\_type) } } \\right\\rfloor ",
            "&lfloor; <sup><i>size</i></sup>/<sub><i>components</i> &times; sizeof(<i>base_type</i>)</sub> &rfloor;",
        ),
        ("offset + size", "<i>offset</i> + <i>size</i>"),
        ("offset + length", "<i>offset</i> + <i>length</i>"),
        ("readOffset+size", "<i>readOffset</i> + <i>size</i>"),
        ("readOffset + size", "<i>readOffset</i> + <i>size</i>"),
        ("writeOffset+size", "<i>writeOffset</i> + <i>size</i>"),
        ("writeOffset + size", "<i>writeOffset</i> + <i>size</i>"),
        (
            "[readOffset,readOffset+size)",
            "[<i>readOffset</i>, <i>readOffset</i> + <i>size</i>)",
        ),
        (
            "[writeOffset,writeOffset+size)",
            "[<i>writeOffset</i>, <i>writeOffset</i> + <i>size</i>)",
        ),
    ])
});

/// HTML for a formula, looked up by its exact source text.
pub fn lookup(formula: &str) -> Option<&'static str> {
    FORMULAS.get(formula).copied()
}

/// Render a formula span. Display formulas (`$$…$$`) are centered.
///
/// Returns `None` when the formula is unknown.
pub fn render(formula: &str, display: bool) -> Option<String> {
    let html = lookup(formula)?;
    if display {
        Some(format!("<center>{html}</center>"))
    } else {
        Some(html.to_string())
    }
}
