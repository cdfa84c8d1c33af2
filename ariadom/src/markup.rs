//! Deterministic HTML-like serialization of an element tree.
//!
//! The output is what a browser-side renderer would produce for the same
//! tree, which makes it a convenient snapshot format for the ARIA contract.

use std::fmt::Write;

use crate::element::{Content, Element};

const INDENT: &str = "  ";

/// Serialize an element tree, one element per line, children indented.
pub fn to_markup(root: &Element) -> String {
    let mut out = String::new();
    write_element(root, 0, &mut out);
    out
}

fn write_element(el: &Element, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push('<');
    out.push_str(el.tag.as_str());
    write_attrs(el, out);

    if el.tag.is_void() {
        out.push_str(" />\n");
        return;
    }
    out.push('>');

    match &el.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape(text)),
        Content::Children(children) => {
            out.push('\n');
            for child in children {
                write_element(child, depth + 1, out);
            }
            for _ in 0..depth {
                out.push_str(INDENT);
            }
        }
    }

    let _ = writeln!(out, "</{}>", el.tag.as_str());
}

fn write_attrs(el: &Element, out: &mut String) {
    let _ = write!(out, " id=\"{}\"", escape(&el.id));
    if let Some(role) = el.role {
        let _ = write!(out, " role=\"{role}\"");
    }
    for (name, value) in &el.attrs {
        let _ = write!(out, " {name}=\"{}\"", escape(value));
    }
    if let Some(tabindex) = el.tabindex {
        let _ = write!(out, " tabindex=\"{tabindex}\"");
    }
    if el.disabled {
        out.push_str(" disabled");
    }
    if el.hidden {
        out.push_str(" hidden");
    }
}

/// Escape text for attribute values and text nodes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
