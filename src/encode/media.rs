//! Media RSS attachment encoder (`media:content`).
//!
//! Each attachment mixes attributes and sub-elements in one flat object:
//! keys from the fixed attribute set land on the `<media:content>` element
//! itself, everything else becomes a `media:`-prefixed sub-element. Object
//! values split into attributes plus an optional `value` text body.

use crate::mime;
use crate::node::Node;
use crate::value::{format_scalar, Value, ValueMap};

/// Keys that render as attributes of `<media:content>` rather than as
/// sub-elements.
const ATTRIBUTE_KEYS: [&str; 13] = [
    "url",
    "fileSize",
    "type",
    "medium",
    "isDefault",
    "expression",
    "bitrate",
    "samplingrate",
    "channels",
    "duration",
    "height",
    "width",
    "lang",
];

pub(super) fn encode(nodes: &mut Vec<Node>, value: &Value) {
    for entry in value.as_list() {
        let mut map = match entry {
            Value::String(url) => {
                let mut map = ValueMap::new();
                map.insert("url".to_string(), Value::String(url.clone()));
                map
            }
            Value::Object(map) => map.clone(),
            other => {
                tracing::debug!(?other, "skipping media attachment with unusable shape");
                continue;
            }
        };

        // Sniff the type from the URL, but never emit the unknown-binary
        // sentinel as an explicit type.
        if map.get("type").is_none_or(Value::is_falsy) {
            if let Some(url) = map.get("url").and_then(Value::as_str) {
                let sniffed = mime::detect_mime_type(url);
                if sniffed != mime::OCTET_STREAM {
                    map.insert("type".to_string(), Value::from(sniffed));
                }
            }
        }

        let mut node = Node::new("media:content");
        for (key, val) in &map {
            if ATTRIBUTE_KEYS.contains(&key.as_str()) {
                node.push_attr(key, format_scalar(val));
            } else {
                node.push_child(sub_element(key, val));
            }
        }
        nodes.push(node);
    }
}

/// A non-attribute key renders as `<media:key>`: plain strings become leaf
/// text, objects split into attributes (every key but `value`) plus optional
/// `value` text.
fn sub_element(key: &str, value: &Value) -> Node {
    let name = format!("media:{key}");
    match value.as_object() {
        Some(map) => {
            let mut node = Node::new(name);
            for (attr_key, attr_val) in map {
                if attr_key != "value" {
                    node.push_attr(attr_key, format_scalar(attr_val));
                }
            }
            if let Some(text) = map.get("value").filter(|v| !v.is_falsy()) {
                node.text = Some(format_scalar(text));
            }
            node
        }
        None => Node::leaf(name, format_scalar(value)),
    }
}
