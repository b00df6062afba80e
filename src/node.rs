//! The generic attributed-element tree produced by the field encoders.

/// One XML element: a name plus any combination of attributes, a text body,
/// and ordered child elements.
///
/// Nodes are only ever constructed by field encoders and by the document
/// builder; attribute and child order is the order of the pushes, and the
/// renderer preserves it.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    /// An empty element with no attributes, text, or children.
    pub fn new(name: impl Into<String>) -> Self {
        Node {
            name: name.into(),
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// A leaf element holding only text.
    pub fn leaf(name: impl Into<String>, text: impl Into<String>) -> Self {
        Node {
            name: name.into(),
            attrs: Vec::new(),
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute append.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_attr(key, value);
        self
    }

    pub fn push_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.push((key.into(), value.into()));
    }

    pub fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }
}
