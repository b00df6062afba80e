//! Core RSS 2.0 field encoders.
//!
//! Each variant covers one channel/item field family from the RSS profile;
//! everything here degrades permissively (missing optional sub-fields are
//! omitted, odd scalars pass through) except for the shapes rejected up
//! front by [`validate_field`].

use crate::datetime;
use crate::feed::FeedError;
use crate::mime;
use crate::node::Node;
use crate::value::{format_scalar, Value, ValueMap};

use super::EncodeContext;

/// Core-field encoder registry, one variant per field family.
#[derive(Debug, Clone, Copy)]
pub(crate) enum CoreField {
    PubDate,
    ManagingEditor,
    WebMaster,
    Author,
    Category,
    Cloud,
    Image,
    TextInput,
    Guid,
    Source,
    Enclosure,
}

impl CoreField {
    pub(crate) fn lookup(name: &str) -> Option<CoreField> {
        Some(match name {
            "pubDate" => CoreField::PubDate,
            "managingEditor" => CoreField::ManagingEditor,
            "webMaster" => CoreField::WebMaster,
            "author" => CoreField::Author,
            "category" => CoreField::Category,
            "cloud" => CoreField::Cloud,
            "image" => CoreField::Image,
            "textInput" => CoreField::TextInput,
            "guid" => CoreField::Guid,
            "source" => CoreField::Source,
            "enclosure" => CoreField::Enclosure,
            _ => return None,
        })
    }

    pub(crate) fn encode(self, ctx: &EncodeContext<'_>, nodes: &mut Vec<Node>, value: &Value) {
        match self {
            CoreField::PubDate => encode_pub_date(nodes, value),
            CoreField::ManagingEditor => encode_person(nodes, "managingEditor", value),
            CoreField::WebMaster => encode_person(nodes, "webMaster", value),
            CoreField::Author => encode_person(nodes, "author", value),
            CoreField::Category => encode_category(nodes, value),
            CoreField::Cloud => encode_cloud(nodes, value),
            CoreField::Image => encode_image(ctx, nodes, value),
            CoreField::TextInput => encode_text_input(nodes, value),
            CoreField::Guid => encode_guid(nodes, value),
            CoreField::Source => encode_source(nodes, value),
            CoreField::Enclosure => encode_enclosure(nodes, value),
        }
    }
}

/// Shape check applied when a header map or item is handed to the feed.
/// Only shapes an encoder strictly requires are rejected; everything else
/// is the encoders' permissive business.
pub(crate) fn validate_field(name: &str, value: &Value) -> Result<(), FeedError> {
    let invalid = |reason| {
        Err(FeedError::InvalidFieldShape {
            field: name.to_string(),
            reason,
        })
    };

    match name {
        "source" => match value.as_object() {
            Some(map) if map.get("url").is_some_and(|url| !url.is_falsy()) => Ok(()),
            Some(_) => invalid("missing a `url` key"),
            None => invalid("expected an object with `url` and `title` keys"),
        },
        "cloud" | "textInput" => match value {
            Value::Object(_) => Ok(()),
            _ => invalid("expected an object of attribute key/value pairs"),
        },
        "image" | "enclosure" => match value {
            Value::String(_) | Value::Object(_) => Ok(()),
            _ => invalid("expected a URL string or an object"),
        },
        "itunes" => match value.as_object() {
            Some(map) => match map.get("owner") {
                Some(owner) if owner.as_object().is_none() => {
                    Err(FeedError::InvalidFieldShape {
                        field: "itunes.owner".to_string(),
                        reason: "expected an object with `name`/`email` keys",
                    })
                }
                _ => Ok(()),
            },
            None => invalid("expected an object of podcast metadata keys"),
        },
        _ => Ok(()),
    }
}

fn encode_pub_date(nodes: &mut Vec<Node>, value: &Value) {
    let text = match datetime::parse_date(value) {
        Some(dt) => datetime::format_rfc822(&dt),
        None => format_scalar(value),
    };
    nodes.push(Node::leaf("pubDate", text));
}

/// managingEditor / webMaster / author: an object composes
/// `email (name)`, omitting either part; a plain scalar passes through.
fn encode_person(nodes: &mut Vec<Node>, name: &str, value: &Value) {
    let text = match value.as_object() {
        Some(map) => {
            let mut parts = Vec::new();
            if let Some(email) = map.get("email").filter(|v| !v.is_falsy()) {
                parts.push(format_scalar(email));
            }
            if let Some(person) = map.get("name").filter(|v| !v.is_falsy()) {
                parts.push(format!("({})", format_scalar(person)));
            }
            parts.join(" ")
        }
        None => format_scalar(value),
    };
    nodes.push(Node::leaf(name, text));
}

/// One `<category>` per list element; falsy elements are skipped. An object
/// with a `domain` becomes an attribute-bearing node.
fn encode_category(nodes: &mut Vec<Node>, value: &Value) {
    for entry in value.as_list() {
        if entry.is_falsy() {
            tracing::debug!("skipping falsy category entry");
            continue;
        }
        match entry.as_object() {
            Some(map) => {
                let text = map.get("value").map(format_scalar).unwrap_or_default();
                match map.get("domain").filter(|d| !d.is_falsy()) {
                    Some(domain) => nodes.push(
                        Node::leaf("category", text).attr("domain", format_scalar(domain)),
                    ),
                    None => nodes.push(Node::leaf("category", text)),
                }
            }
            None => nodes.push(Node::leaf("category", format_scalar(entry))),
        }
    }
}

/// `<cloud>` carries the input object's keys verbatim as attributes.
fn encode_cloud(nodes: &mut Vec<Node>, value: &Value) {
    let mut node = Node::new("cloud");
    if let Some(map) = value.as_object() {
        for (key, val) in map {
            node.push_attr(key, format_scalar(val));
        }
    }
    nodes.push(node);
}

/// `<image>`: a bare URL normalizes to `{url}`; missing `title`/`link`
/// default from the channel headers. Every (possibly defaulted) key becomes
/// a child leaf, in map order.
fn encode_image(ctx: &EncodeContext<'_>, nodes: &mut Vec<Node>, value: &Value) {
    let mut map = normalize_url_object(value);

    if map.get("title").is_none_or(Value::is_falsy) {
        if let Some(title) = ctx.headers.get("title").filter(|v| !v.is_falsy()) {
            map.insert("title".to_string(), title.clone());
        }
    }
    if map.get("link").is_none_or(Value::is_falsy) {
        if let Some(link) = ctx.headers.get("link").filter(|v| !v.is_falsy()) {
            map.insert("link".to_string(), link.clone());
        }
    }

    let mut node = Node::new("image");
    for (key, val) in &map {
        node.push_child(Node::leaf(key, format_scalar(val)));
    }
    nodes.push(node);
}

fn encode_text_input(nodes: &mut Vec<Node>, value: &Value) {
    let mut node = Node::new("textInput");
    if let Some(map) = value.as_object() {
        for (key, val) in map {
            node.push_child(Node::leaf(key, format_scalar(val)));
        }
    }
    nodes.push(node);
}

/// `<guid>`: an object with a boolean `isPermaLink` renders it as the
/// literal `"true"`/`"false"` attribute; anything else is a plain leaf.
fn encode_guid(nodes: &mut Vec<Node>, value: &Value) {
    if let Some(map) = value.as_object() {
        if let Some(Value::Bool(permalink)) = map.get("isPermaLink") {
            let text = map.get("value").map(format_scalar).unwrap_or_default();
            nodes.push(
                Node::leaf("guid", text)
                    .attr("isPermaLink", if *permalink { "true" } else { "false" }),
            );
            return;
        }
        let text = map
            .get("value")
            .filter(|v| !v.is_falsy())
            .map(format_scalar)
            .unwrap_or_else(|| format_scalar(value));
        nodes.push(Node::leaf("guid", text));
        return;
    }
    nodes.push(Node::leaf("guid", format_scalar(value)));
}

fn encode_source(nodes: &mut Vec<Node>, value: &Value) {
    // Shape guaranteed by validate_field: an object with a url key.
    let Some(map) = value.as_object() else { return };
    let url = map.get("url").map(format_scalar).unwrap_or_default();
    let title = map.get("title").map(format_scalar).unwrap_or_default();
    nodes.push(Node::leaf("source", title).attr("url", url));
}

/// `<enclosure>`: attribute-only node. `length` defaults to the string
/// `"0"`, `type` is MIME-sniffed from the URL when absent.
fn encode_enclosure(nodes: &mut Vec<Node>, value: &Value) {
    let mut map = normalize_url_object(value);

    if map.get("length").is_none_or(Value::is_falsy) {
        map.insert("length".to_string(), Value::from("0"));
    }
    if map.get("type").is_none_or(Value::is_falsy) {
        if let Some(url) = map.get("url").and_then(Value::as_str) {
            let sniffed = mime::detect_mime_type(url);
            map.insert("type".to_string(), Value::from(sniffed));
        }
    }

    let mut node = Node::new("enclosure");
    for (key, val) in &map {
        node.push_attr(key, format_scalar(val));
    }
    nodes.push(node);
}

/// String shorthand for URL-bearing objects: `"http://…"` → `{url: "…"}`.
fn normalize_url_object(value: &Value) -> ValueMap {
    match value {
        Value::String(url) => {
            let mut map = ValueMap::new();
            map.insert("url".to_string(), Value::String(url.clone()));
            map
        }
        Value::Object(map) => map.clone(),
        _ => ValueMap::new(),
    }
}
