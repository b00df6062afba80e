//! Namespace-qualified extension field encoders.
//!
//! Each variant carries the namespace it belongs to; dispatch records that
//! namespace as used before invoking the encoder. The richly-structured
//! `itunes` and `media` families live in their own modules.

use crate::node::Node;
use crate::ns::Namespace;
use crate::value::{format_scalar, Value};

use super::{itunes, media};

/// Extension-field encoder registry.
#[derive(Debug, Clone, Copy)]
pub(crate) enum ExtField {
    Creator,
    UpdatePeriod,
    UpdateFrequency,
    AtomLink,
    Hub,
    Content,
    CommentCount,
    CommentRss,
    Lat,
    Long,
    Itunes,
    Media,
}

impl ExtField {
    pub(crate) fn lookup(name: &str) -> Option<ExtField> {
        Some(match name {
            "creator" => ExtField::Creator,
            "updatePeriod" => ExtField::UpdatePeriod,
            "updateFrequency" => ExtField::UpdateFrequency,
            "atomLink" => ExtField::AtomLink,
            "hub" => ExtField::Hub,
            "content" => ExtField::Content,
            "commentCount" => ExtField::CommentCount,
            "commentRss" => ExtField::CommentRss,
            "lat" => ExtField::Lat,
            "long" => ExtField::Long,
            "itunes" => ExtField::Itunes,
            "media" => ExtField::Media,
            _ => return None,
        })
    }

    pub(crate) fn namespace(self) -> Namespace {
        match self {
            ExtField::Creator => Namespace::Dc,
            ExtField::UpdatePeriod | ExtField::UpdateFrequency => Namespace::Sy,
            ExtField::AtomLink | ExtField::Hub => Namespace::Atom,
            ExtField::Content => Namespace::Content,
            ExtField::CommentCount => Namespace::Slash,
            ExtField::CommentRss => Namespace::Wfw,
            ExtField::Lat | ExtField::Long => Namespace::Geo,
            ExtField::Itunes => Namespace::Itunes,
            ExtField::Media => Namespace::Media,
        }
    }

    pub(crate) fn encode(self, nodes: &mut Vec<Node>, value: &Value) {
        match self {
            ExtField::Creator => nodes.push(Node::leaf("dc:creator", format_scalar(value))),
            ExtField::UpdatePeriod => {
                nodes.push(Node::leaf("sy:updatePeriod", format_scalar(value)))
            }
            ExtField::UpdateFrequency => {
                nodes.push(Node::leaf("sy:updateFrequency", format_scalar(value)))
            }
            ExtField::AtomLink => encode_atom_links(nodes, value),
            ExtField::Hub => nodes.push(
                Node::new("atom:link")
                    .attr("rel", "hub")
                    .attr("href", format_scalar(value)),
            ),
            // Raw here; the renderer escapes text bodies.
            ExtField::Content => nodes.push(Node::leaf("content:encoded", format_scalar(value))),
            ExtField::CommentCount => {
                nodes.push(Node::leaf("slash:comments", format_scalar(value)))
            }
            ExtField::CommentRss => nodes.push(Node::leaf("wfw:commentRss", format_scalar(value))),
            ExtField::Lat => nodes.push(Node::leaf("geo:lat", format_scalar(value))),
            ExtField::Long => nodes.push(Node::leaf("geo:long", format_scalar(value))),
            ExtField::Itunes => itunes::encode(nodes, value),
            ExtField::Media => media::encode(nodes, value),
        }
    }
}

/// One attribute-only `<atom:link>` per list element. A bare string is
/// shorthand for `{href}`; a `rel="self"` link defaults its `type` to the
/// feed's own media type.
fn encode_atom_links(nodes: &mut Vec<Node>, value: &Value) {
    for link in value.as_list() {
        let mut node = Node::new("atom:link");
        match link.as_object() {
            Some(map) => {
                for (key, val) in map {
                    node.push_attr(key, format_scalar(val));
                }
                let is_self = map.get("rel").and_then(Value::as_str) == Some("self");
                if is_self && map.get("type").is_none_or(Value::is_falsy) {
                    node.push_attr("type", "application/rss+xml");
                }
            }
            None => node.push_attr("href", format_scalar(link)),
        }
        nodes.push(node);
    }
}
