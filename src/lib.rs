//! RSS 2.0 feed generation from loosely-typed key/value input.
//!
//! `feedwright` assembles a feed document from an open string-keyed header
//! map plus a sequence of item maps, and serializes it to XML. Field values
//! can be scalars, objects, or arrays — each known field has its own
//! encoding rule, extension fields (Dublin Core, Atom, iTunes podcast
//! metadata, Media RSS, and friends) track their XML namespaces
//! automatically, and unknown fields pass through as plain elements.
//!
//! # Architecture
//!
//! - [`Value`]/[`ValueMap`] — the loose input model (convertible from
//!   `serde_json::Value`)
//! - `encode` — the per-field encoder registry: extension encoders resolve
//!   first, then core RSS encoders, then a generic fallback
//! - [`Node`] — the attributed-element tree every encoder produces
//! - [`Feed`] — the document builder: item sorting, `lastBuildDate`
//!   defaulting, namespace declarations
//! - `render` — tree-to-XML serialization with optional indentation
//!
//! # Example
//!
//! ```
//! use feedwright::{Feed, RenderOptions, Value};
//!
//! let headers = Value::from(serde_json::json!({
//!     "title": "Example Podcast",
//!     "link": "http://example.com/",
//!     "itunes": { "explicit": false },
//! }))
//! .into_object()
//! .unwrap();
//!
//! let mut feed = Feed::new(headers)?;
//! feed.add_item(
//!     Value::from(serde_json::json!({
//!         "title": "Episode 1",
//!         "pubDate": "2014-10-31T18:12:21+00:00",
//!         "enclosure": "http://example.com/ep1.mp3",
//!     }))
//!     .into_object()
//!     .unwrap(),
//! )?;
//!
//! let xml = feed.render(&RenderOptions::default());
//! assert!(xml.contains("xmlns:itunes"));
//! assert!(xml.contains(r#"type="audio/mpeg""#));
//! # Ok::<(), feedwright::FeedError>(())
//! ```

mod datetime;
mod encode;
mod feed;
mod mime;
mod node;
mod ns;
mod render;
mod value;

pub use feed::{Feed, FeedError};
pub use node::Node;
pub use ns::Namespace;
pub use render::RenderOptions;
pub use value::{format_scalar, Value, ValueMap};
