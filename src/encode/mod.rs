//! Field encoding: turning named header/item fields into document nodes.
//!
//! Dispatch order for a field name:
//!
//! 1. Extension encoders ([`ext::ExtField`]) — namespace-qualified fields
//!    such as `creator` or `itunes`. Resolving one records its namespace in
//!    the build's [`NamespaceTracker`].
//! 2. Core RSS encoders ([`core::CoreField`]) — `pubDate`, `guid`,
//!    `enclosure`, and friends.
//! 3. Fallback — a plain leaf element named after the field, with the value
//!    run through the scalar formatter (so a raw date under an unknown name
//!    still renders canonically).
//!
//! Encoders only ever append to the node list they are given. The single
//! sanctioned cross-read is the `image` encoder consulting the feed headers
//! for default `title`/`link` values, carried via [`EncodeContext`].

mod core;
mod ext;
mod itunes;
mod media;

use crate::node::Node;
use crate::ns::NamespaceTracker;
use crate::value::{format_scalar, Value, ValueMap};

pub(crate) use self::core::validate_field;

/// Read-only document state visible to encoders.
pub(crate) struct EncodeContext<'a> {
    /// The feed's header map, for encoders with documented header defaults.
    pub headers: &'a ValueMap,
}

/// Encodes one named field, appending the resulting nodes to `nodes`.
pub(crate) fn encode_field(
    ctx: &EncodeContext<'_>,
    tracker: &mut NamespaceTracker,
    nodes: &mut Vec<Node>,
    name: &str,
    value: &Value,
) {
    if let Some(ext) = ext::ExtField::lookup(name) {
        tracker.record(ext.namespace());
        ext.encode(nodes, value);
        return;
    }

    if let Some(core) = core::CoreField::lookup(name) {
        core.encode(ctx, nodes, value);
        return;
    }

    nodes.push(Node::leaf(name, format_scalar(value)));
}
