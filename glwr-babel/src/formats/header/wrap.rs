//! Reflow of HTML-tagged text into `///` comment lines
//!
//! Text is cut into tokens: a word (word characters, apostrophes, hyphens), a short styled word
//! such as `<code>GL_RED</code>`, a whole `<pre>…</pre>` line, or any other single tag, each
//! with the punctuation glued to either side. A token never breaks. Tokens keep one space
//! between them when the source had any, and none otherwise.

use once_cell::sync::Lazy;
use regex::Regex;

/// Comment line prefix.
pub const PREFIX: &str = "///";

static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[^\w< \n]*",
        r"(?:[\w'\-]+",
        r"|<code>[^ <\n]{0,64}</code>",
        r"|<sub>[^ <\n]{0,64}</sub>",
        r"|<sup>[^ <\n]{0,64}</sup>",
        r"|<i>[^ <\n]{0,64}</i>",
        r"|<b>[^ <\n]{0,64}</b>",
        r"|<pre>.*?</pre>",
        r"|<[^<>\n]*>)?",
        r"[^\w< \n]*",
    ))
    .unwrap()
});

/// Split off the next token. Returns whether spaces preceded it, the token, and the rest.
fn next_token(text: &str) -> (bool, &str, &str) {
    let after_spaces = text.trim_start_matches(' ');
    let spaced = after_spaces.len() < text.len();

    let mut end = TOKEN.find(after_spaces).map_or(0, |m| m.end());
    if end == 0 {
        // A lone `<` or similar: take one character so the text keeps moving.
        end = match after_spaces.chars().next() {
            Some(c) if c != '\n' => c.len_utf8(),
            _ => 0,
        };
    }

    (spaced, &after_spaces[..end], &after_spaces[end..])
}

/// Append `text` to `out` as comment lines whose content after [`PREFIX`] is at most `width`
/// characters wide.
///
/// A newline in the text ends the current line; a newline on an empty line emits a `/// `
/// placeholder. A token wider than `width` gets a line of its own.
pub fn write_wrapped(out: &mut String, text: &str, width: usize) {
    let mut rest = text.trim_start_matches(' ');
    let mut line_width = 0;

    while !rest.is_empty() {
        if let Some(after_newline) = rest.strip_prefix('\n') {
            if line_width == 0 {
                out.push_str(PREFIX);
                out.push_str(" \n");
            } else {
                out.push('\n');
                line_width = 0;
            }
            rest = after_newline;
            continue;
        }

        let (spaced, token, remainder) = next_token(rest);
        if !token.is_empty() {
            let length = token.chars().count();
            let mut space = spaced;

            if line_width == 0 {
                out.push_str(PREFIX);
                space = true;
            } else if line_width + length + usize::from(space) > width {
                out.push('\n');
                out.push_str(PREFIX);
                line_width = 0;
                space = true;
            }

            if space {
                out.push(' ');
            }
            out.push_str(token);
            line_width += length + usize::from(space);
        }

        rest = remainder;
    }

    if line_width > 0 {
        out.push('\n');
    }
}

/// [`write_wrapped`] into a new string.
pub fn wrap(text: &str, width: usize) -> String {
    let mut out = String::new();
    write_wrapped(&mut out, text, width);
    out
}
