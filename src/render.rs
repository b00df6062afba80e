//! Node tree to XML text serialization.
//!
//! Text bodies and attribute values are escaped here (via `quick-xml`'s
//! escape table), so encoders hand over raw strings — including HTML bodies
//! destined for `content:encoded`.

use std::fmt::Write;

use quick_xml::escape::escape;

use crate::node::Node;

/// Serialization options.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Literal string written once per nesting level. `None` produces
    /// compact single-line output.
    pub indent: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            indent: Some("  ".to_string()),
        }
    }
}

impl RenderOptions {
    /// No indentation, no line breaks.
    pub fn compact() -> Self {
        RenderOptions { indent: None }
    }
}

/// Serializes a node tree into a complete XML document, declaration
/// included.
pub fn render_document(root: &Node, options: &RenderOptions) -> String {
    let mut out = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    match options.indent.as_deref() {
        Some(indent) if !indent.is_empty() => {
            out.push('\n');
            write_node(&mut out, root, Some(indent), 0);
        }
        _ => write_node(&mut out, root, None, 0),
    }
    out
}

fn write_node(out: &mut String, node: &Node, indent: Option<&str>, depth: usize) {
    if let Some(indent) = indent {
        for _ in 0..depth {
            out.push_str(indent);
        }
    }

    out.push('<');
    out.push_str(&node.name);
    for (key, value) in &node.attrs {
        // String formatting can't fail here
        let _ = write!(out, " {}=\"{}\"", key, escape(value.as_str()));
    }

    if node.children.is_empty() {
        match &node.text {
            Some(text) => {
                out.push('>');
                out.push_str(&escape(text.as_str()));
                out.push_str("</");
                out.push_str(&node.name);
                out.push('>');
            }
            // Attribute-only elements self-close; bare empty elements keep
            // an explicit closing tag (<channel></channel>).
            None if node.attrs.is_empty() => {
                out.push_str("></");
                out.push_str(&node.name);
                out.push('>');
            }
            None => out.push_str("/>"),
        }
        return;
    }

    out.push('>');
    if let Some(text) = &node.text {
        out.push_str(&escape(text.as_str()));
    }
    for child in &node.children {
        if indent.is_some() {
            out.push('\n');
        }
        write_node(out, child, indent, depth + 1);
    }
    if let Some(indent) = indent {
        out.push('\n');
        for _ in 0..depth {
            out.push_str(indent);
        }
    }
    out.push_str("</");
    out.push_str(&node.name);
    out.push('>');
}
