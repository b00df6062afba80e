//! Feed document assembly.
//!
//! A [`Feed`] owns one header map (the `<channel>` metadata) and an ordered
//! sequence of items. Items are validated, date-canonicalized, and encoded
//! when they are added; [`Feed::build`] sorts them, fills in the
//! `lastBuildDate` default, encodes the headers, and assembles the final
//! `<rss>` tree with the namespace declarations that this build actually
//! used.

use chrono::{DateTime, FixedOffset};
use thiserror::Error;

use crate::datetime;
use crate::encode::{encode_field, validate_field, EncodeContext};
use crate::node::Node;
use crate::ns::{Namespace, NamespaceTracker};
use crate::render::{render_document, RenderOptions};
use crate::value::{Value, ValueMap};

/// Errors reported when a header map or item is added.
///
/// The generator is deliberately permissive — missing optional sub-fields
/// degrade to omission — so the only rejected condition is a compound value
/// whose shape an encoder strictly requires. Rejection happens at add time;
/// a build never fails.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("invalid value shape for field `{field}`: {reason}")]
    InvalidFieldShape { field: String, reason: &'static str },
}

/// One feed item: its encoded node list, the out-of-band sort key derived
/// from `pubDate` at add time, and the namespaces its fields used.
#[derive(Debug, Clone)]
struct Item {
    nodes: Vec<Node>,
    /// Participates in ordering only; the item's own `pubDate` field is
    /// rendered separately as part of `nodes`.
    sort_key: Option<DateTime<FixedOffset>>,
    namespaces: Vec<Namespace>,
}

/// An RSS 2.0 feed document under construction.
///
/// ```
/// use feedwright::{Feed, RenderOptions, Value};
///
/// let headers = Value::from(serde_json::json!({
///     "title": "My Blog",
///     "link": "http://example.com/",
/// }))
/// .into_object()
/// .unwrap();
///
/// let mut feed = Feed::new(headers).unwrap();
/// feed.add_item(
///     Value::from(serde_json::json!({
///         "title": "Hello",
///         "pubDate": "2014-10-31",
///     }))
///     .into_object()
///     .unwrap(),
/// )
/// .unwrap();
///
/// let xml = feed.render(&RenderOptions::default());
/// assert!(xml.contains("<title>Hello</title>"));
/// ```
#[derive(Debug, Default)]
pub struct Feed {
    headers: ValueMap,
    items: Vec<Item>,
}

impl Feed {
    /// Creates a feed from channel-level headers.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidFieldShape`] if a header value has a
    /// shape its encoder cannot use (e.g. a `cloud` that is not an object).
    pub fn new(headers: ValueMap) -> Result<Self, FeedError> {
        for (name, value) in &headers {
            validate_field(name, value)?;
        }
        Ok(Feed {
            headers,
            items: Vec::new(),
        })
    }

    /// Adds an item to the feed.
    ///
    /// The item's `pubDate`, if present and parsable, is canonicalized in
    /// place and doubles as the item's sort key. Fields are encoded
    /// immediately, in the map's key order.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidFieldShape`] if a field value has a shape
    /// its encoder cannot use; the item is not added in that case.
    pub fn add_item(&mut self, mut fields: ValueMap) -> Result<(), FeedError> {
        for (name, value) in &fields {
            validate_field(name, value)?;
        }

        let sort_key = fields.get_mut("pubDate").and_then(datetime::canonicalize);

        let ctx = EncodeContext {
            headers: &self.headers,
        };
        let mut tracker = NamespaceTracker::new();
        let mut nodes = Vec::new();
        for (name, value) in &fields {
            encode_field(&ctx, &mut tracker, &mut nodes, name, value);
        }

        self.items.push(Item {
            nodes,
            sort_key,
            namespaces: tracker.into_used(),
        });
        Ok(())
    }

    /// Number of items added so far.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Assembles the document tree.
    ///
    /// Sorts items newest-first (items without a date sort last; ties keep
    /// insertion order — the sort is stable), defaults the channel
    /// `lastBuildDate` from the newest item, encodes the headers, and
    /// attaches one `xmlns:` declaration per used namespace plus the fixed
    /// `version="2.0"` attribute to the root.
    ///
    /// The only mutations are the `lastBuildDate` fill-in and header date
    /// canonicalization, both idempotent: building twice without touching
    /// the feed in between yields structurally identical trees.
    pub fn build(&mut self) -> Node {
        self.items.sort_by(|a, b| match (a.sort_key, b.sort_key) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });

        if self.headers.get("lastBuildDate").is_none_or(Value::is_falsy) {
            if let Some(newest) = self.items.first().and_then(|item| item.sort_key) {
                self.headers
                    .insert("lastBuildDate".to_string(), Value::Date(newest));
            }
        }
        for key in ["lastBuildDate", "pubDate"] {
            if let Some(value) = self.headers.get_mut(key) {
                datetime::canonicalize(value);
            }
        }

        let mut tracker = NamespaceTracker::new();
        let mut channel = Node::new("channel");
        {
            let ctx = EncodeContext {
                headers: &self.headers,
            };
            let mut nodes = Vec::new();
            for (name, value) in &self.headers {
                encode_field(&ctx, &mut tracker, &mut nodes, name, value);
            }
            channel.children = nodes;
        }

        for item in &self.items {
            for ns in &item.namespaces {
                tracker.record(*ns);
            }
            let mut wrapper = Node::new("item");
            wrapper.children = item.nodes.clone();
            channel.push_child(wrapper);
        }

        let mut root = Node::new("rss");
        for ns in tracker.used() {
            root.push_attr(format!("xmlns:{}", ns.prefix()), ns.uri());
        }
        root.push_attr("version", "2.0");
        root.push_child(channel);
        root
    }

    /// Builds and serializes the document in one call.
    pub fn render(&mut self, options: &RenderOptions) -> String {
        let root = self.build();
        render_document(&root, options)
    }
}
