//! XML namespace bookkeeping for extension fields.

/// Extension namespaces known to the generator.
///
/// Each extension field encoder is tagged with one of these; invoking the
/// encoder marks the namespace as used so its `xmlns:` declaration ends up on
/// the `<rss>` root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    /// Dublin Core
    Dc,
    /// RSS 1.0 syndication module
    Sy,
    /// Atom
    Atom,
    /// RSS 1.0 slash module
    Slash,
    /// Apple Podcasts
    Itunes,
    /// RSS 1.0 content module
    Content,
    /// Well-Formed Web comment API
    Wfw,
    /// Media RSS
    Media,
    /// W3C basic geo vocabulary
    Geo,
}

impl Namespace {
    /// The prefix used in qualified element names (`dc:creator`) and in the
    /// root `xmlns:` declaration.
    pub fn prefix(self) -> &'static str {
        match self {
            Namespace::Dc => "dc",
            Namespace::Sy => "sy",
            Namespace::Atom => "atom",
            Namespace::Slash => "slash",
            Namespace::Itunes => "itunes",
            Namespace::Content => "content",
            Namespace::Wfw => "wfw",
            Namespace::Media => "media",
            Namespace::Geo => "geo",
        }
    }

    /// The namespace URI declared on the document root.
    pub fn uri(self) -> &'static str {
        match self {
            Namespace::Dc => "http://purl.org/dc/elements/1.1/",
            Namespace::Sy => "http://purl.org/rss/1.0/modules/syndication/",
            Namespace::Atom => "http://www.w3.org/2005/Atom",
            Namespace::Slash => "http://purl.org/rss/1.0/modules/slash/",
            Namespace::Itunes => "http://www.itunes.com/dtds/podcast-1.0.dtd",
            Namespace::Content => "http://purl.org/rss/1.0/modules/content/",
            Namespace::Wfw => "http://wellformedweb.org/CommentAPI/",
            Namespace::Media => "http://search.yahoo.com/mrss/",
            Namespace::Geo => "http://www.w3.org/2003/01/geo/wgs84_pos#",
        }
    }
}

/// Ordered set of namespaces used during one build.
///
/// Append-only within a build; a fresh tracker is created at the start of
/// every build so repeated builds re-derive the set from the fields actually
/// present.
#[derive(Debug, Default)]
pub struct NamespaceTracker {
    used: Vec<Namespace>,
}

impl NamespaceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a namespace as used. Idempotent: each namespace appears at
    /// most once, ordered by first encounter.
    pub fn record(&mut self, ns: Namespace) {
        if !self.used.contains(&ns) {
            self.used.push(ns);
        }
    }

    /// Namespaces in first-use order.
    pub fn used(&self) -> &[Namespace] {
        &self.used
    }

    /// Consumes the tracker, yielding the ordered namespace list.
    pub fn into_used(self) -> Vec<Namespace> {
        self.used
    }
}
