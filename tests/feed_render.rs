//! End-to-end feed generation tests: loose JSON input in, XML text out.

use feedwright::{Feed, RenderOptions, Value, ValueMap};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn map(json: serde_json::Value) -> ValueMap {
    Value::from(json).into_object().expect("object literal")
}

#[test]
fn empty_feed_renders_minimal_document() {
    let mut feed = Feed::default();
    assert_eq!(
        feed.render(&RenderOptions::compact()),
        r#"<?xml version="1.0" encoding="UTF-8"?><rss version="2.0"><channel></channel></rss>"#
    );
}

#[test]
fn simple_feed_with_one_item() {
    let mut feed = Feed::new(map(serde_json::json!({"title": "test"}))).unwrap();
    feed.add_item(map(serde_json::json!({"title": "test"}))).unwrap();

    assert_eq!(
        feed.render(&RenderOptions::compact()),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <rss version=\"2.0\"><channel><title>test</title>\
         <item><title>test</title></item></channel></rss>"
    );
}

#[test]
fn namespace_declarations_follow_usage() {
    let mut feed = Feed::default();
    feed.add_item(map(serde_json::json!({"creator": "test"}))).unwrap();

    let xml = feed.render(&RenderOptions::compact());
    assert!(xml.contains(r#"xmlns:dc="http://purl.org/dc/elements/1.1/""#));
    assert!(!xml.contains("xmlns:itunes"));
    assert!(xml.contains("<dc:creator>test</dc:creator>"));
}

#[test]
fn items_sort_by_date_and_last_build_date_defaults() {
    let mut feed = Feed::default();
    feed.add_item(map(serde_json::json!({"pubDate": "2007-01-01"}))).unwrap();
    feed.add_item(map(serde_json::json!({"pubDate": "2006-01-01"}))).unwrap();
    feed.add_item(map(serde_json::json!({"pubDate": "2008-01-01"}))).unwrap();

    let xml = feed.render(&RenderOptions::compact());

    // lastBuildDate picks up the 2008 date, then items run newest to oldest.
    assert!(xml.contains("<lastBuildDate>Tue, 1 Jan 2008"));
    let pos_2008 = xml.find("<item><pubDate>Tue, 1 Jan 2008").unwrap();
    let pos_2007 = xml.find("<item><pubDate>Mon, 1 Jan 2007").unwrap();
    let pos_2006 = xml.find("<item><pubDate>Sun, 1 Jan 2006").unwrap();
    assert!(pos_2008 < pos_2007);
    assert!(pos_2007 < pos_2006);
}

#[test]
fn podcast_feed_end_to_end() {
    let mut feed = Feed::new(map(serde_json::json!({
        "title": "My Show",
        "link": "http://example.com/",
        "atomLink": {"href": "http://example.com/feed.xml", "rel": "self"},
        "itunes": {
            "author": "Jane Host",
            "explicit": false,
            "owner": {"name": "Jane Host", "email": "jane@example.com"},
            "image": "http://example.com/cover.png",
            "category": {"value": "Business", "sub": ["Careers"]}
        }
    })))
    .unwrap();

    feed.add_item(map(serde_json::json!({
        "title": "Episode 1",
        "enclosure": "http://example.com/ep1.mp3",
        "pubDate": "2014-10-31 18:12:21 +0000",
        "itunes": {"duration": "31:00"}
    })))
    .unwrap();

    let xml = feed.render(&RenderOptions::default());

    assert!(xml.contains(r#"xmlns:atom="http://www.w3.org/2005/Atom""#));
    assert!(xml.contains(r#"xmlns:itunes="http://www.itunes.com/dtds/podcast-1.0.dtd""#));
    assert!(xml.contains(
        r#"<atom:link href="http://example.com/feed.xml" rel="self" type="application/rss+xml"/>"#
    ));
    assert!(xml.contains("<itunes:explicit>No</itunes:explicit>"));
    assert!(xml.contains(r#"<itunes:image href="http://example.com/cover.png"/>"#));
    assert!(xml.contains("<itunes:name>Jane Host</itunes:name>"));
    assert!(xml.contains(
        r#"<enclosure url="http://example.com/ep1.mp3" length="0" type="audio/mpeg"/>"#
    ));
    assert!(xml.contains("<pubDate>Fri, 31 Oct 2014 18:12:21 +0000</pubDate>"));
    assert!(xml.contains("<itunes:duration>31:00</itunes:duration>"));

    // Nested category: parent element wraps its sub-category.
    let cat = xml.find(r#"<itunes:category text="Business">"#).unwrap();
    let sub = xml.find(r#"<itunes:category text="Careers"/>"#).unwrap();
    let close = xml.rfind("</itunes:category>").unwrap();
    assert!(cat < sub && sub < close);
}

#[test]
fn html_content_is_escaped_by_the_renderer() {
    let mut feed = Feed::default();
    feed.add_item(map(serde_json::json!({
        "content": "<p>Hello & goodbye</p>"
    })))
    .unwrap();

    let xml = feed.render(&RenderOptions::compact());
    assert!(xml.contains("<content:encoded>&lt;p&gt;Hello &amp; goodbye&lt;/p&gt;</content:encoded>"));
}

#[test]
fn rendering_twice_is_stable() {
    let mut feed = Feed::new(map(serde_json::json!({"title": "t"}))).unwrap();
    feed.add_item(map(serde_json::json!({"pubDate": "2007-01-01"}))).unwrap();
    feed.add_item(map(serde_json::json!({"title": "dateless"}))).unwrap();
    feed.add_item(map(serde_json::json!({"pubDate": "2008-01-01"}))).unwrap();

    let options = RenderOptions::default();
    let first = feed.render(&options);
    let second = feed.render(&options);
    assert_eq!(first, second);
}

#[test]
fn image_header_defaults_render_in_order() {
    let mut feed = Feed::new(map(serde_json::json!({
        "title": "T",
        "link": "L",
        "image": "http://example.com/logo.png"
    })))
    .unwrap();

    let xml = feed.render(&RenderOptions::compact());
    assert!(xml.contains(
        "<image><url>http://example.com/logo.png</url><title>T</title><link>L</link></image>"
    ));
}

#[test]
fn geo_and_slash_extensions_render() {
    let mut feed = Feed::default();
    feed.add_item(map(serde_json::json!({
        "lat": 55.701,
        "long": 12.552,
        "commentCount": 123,
        "commentRss": "http://example.com/comments.rss"
    })))
    .unwrap();

    let xml = feed.render(&RenderOptions::compact());
    assert!(xml.contains("<geo:lat>55.701</geo:lat>"));
    assert!(xml.contains("<geo:long>12.552</geo:long>"));
    assert!(xml.contains("<slash:comments>123</slash:comments>"));
    assert!(xml.contains(r#"xmlns:geo="http://www.w3.org/2003/01/geo/wgs84_pos#""#));
    assert!(xml.contains(r#"xmlns:slash="http://purl.org/rss/1.0/modules/slash/""#));
    assert!(xml.contains(r#"xmlns:wfw="http://wellformedweb.org/CommentAPI/""#));
}

proptest! {
    // Items with identical dates must keep their insertion order no matter
    // how many there are or how often the feed is rebuilt.
    #[test]
    fn prop_equal_dates_are_stable(count in 1usize..20) {
        let mut feed = Feed::default();
        for i in 0..count {
            feed.add_item(map(serde_json::json!({
                "pubDate": "2008-01-01",
                "guid": i.to_string()
            })))
            .unwrap();
        }

        for _ in 0..2 {
            let xml = feed.render(&RenderOptions::compact());
            let positions: Vec<usize> = (0..count)
                .map(|i| xml.find(&format!("<guid>{}</guid>", i)).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
