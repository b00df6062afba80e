//! Podcast metadata encoder (`itunes:*`).
//!
//! The input is an object of many loosely-shaped keys, iterated in caller
//! order. Categories may nest one level of sub-categories; the
//! boolean-semantic flags render as the literal `Yes`/`No` Apple expects;
//! unknown keys become prefixed leaves so new vocabulary passes through
//! without code changes.

use crate::node::Node;
use crate::value::{format_scalar, Value};

pub(super) fn encode(nodes: &mut Vec<Node>, value: &Value) {
    // Shape guaranteed by validate_field: an object.
    let Some(map) = value.as_object() else { return };

    for (key, val) in map {
        match key.as_str() {
            "category" => encode_categories(nodes, val),
            "explicit" | "isClosedCaptioned" | "complete" | "block" => {
                let text = match val {
                    Value::Bool(flag) => if *flag { "Yes" } else { "No" }.to_string(),
                    other => format_scalar(other),
                };
                nodes.push(Node::leaf(format!("itunes:{key}"), text));
            }
            "owner" => encode_owner(nodes, val),
            "image" => {
                nodes.push(Node::new("itunes:image").attr("href", format_scalar(val)));
            }
            _ => nodes.push(Node::leaf(format!("itunes:{key}"), format_scalar(val))),
        }
    }
}

/// A category is a string or `{value, sub?}`; sub-categories nest as child
/// `itunes:category` elements under the parent's node.
fn encode_categories(nodes: &mut Vec<Node>, value: &Value) {
    for entry in value.as_list() {
        let mut node = Node::new("itunes:category").attr("text", category_text(entry));
        if let Some(sub) = entry.as_object().and_then(|map| map.get("sub")) {
            for sub_entry in sub.as_list() {
                node.push_child(
                    Node::new("itunes:category").attr("text", category_text(sub_entry)),
                );
            }
        }
        nodes.push(node);
    }
}

fn category_text(entry: &Value) -> String {
    match entry.as_object() {
        Some(map) => map.get("value").map(format_scalar).unwrap_or_default(),
        None => format_scalar(entry),
    }
}

fn encode_owner(nodes: &mut Vec<Node>, value: &Value) {
    // Shape guaranteed by validate_field.
    let Some(owner) = value.as_object() else { return };
    let mut node = Node::new("itunes:owner");
    if let Some(name) = owner.get("name").filter(|v| !v.is_falsy()) {
        node.push_child(Node::leaf("itunes:name", format_scalar(name)));
    }
    if let Some(email) = owner.get("email").filter(|v| !v.is_falsy()) {
        node.push_child(Node::leaf("itunes:email", format_scalar(email)));
    }
    nodes.push(node);
}
