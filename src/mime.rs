//! MIME type inference from file URLs.
//!
//! Enclosures and media attachments default their `type` attribute from the
//! URL's file extension. The table covers the formats that actually show up
//! in feeds; everything else maps to the generic binary sentinel.

/// Sentinel for an unrecognized extension.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Infers a MIME type from a file path or URL.
///
/// Query strings and fragments are ignored; extension matching is
/// case-insensitive. Unknown or missing extensions yield [`OCTET_STREAM`].
pub fn detect_mime_type(url: &str) -> &'static str {
    let path = url
        .split(['?', '#'])
        .next()
        .unwrap_or(url);
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);

    let Some((_, ext)) = name.rsplit_once('.') else {
        return OCTET_STREAM;
    };

    match ext.to_ascii_lowercase().as_str() {
        "mp3" => "audio/mpeg",
        "m4a" => "audio/mp4",
        "aac" => "audio/aac",
        "ogg" | "oga" => "audio/ogg",
        "opus" => "audio/opus",
        "flac" => "audio/flac",
        "wav" => "audio/wav",
        "mp4" | "m4v" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        "mpg" | "mpeg" => "video/mpeg",
        "avi" => "video/x-msvideo",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "pdf" => "application/pdf",
        "epub" => "application/epub+zip",
        "zip" => "application/zip",
        "torrent" => "application/x-bittorrent",
        "xml" | "rss" => "application/xml",
        "json" => "application/json",
        "html" | "htm" => "text/html",
        "txt" => "text/plain",
        _ => OCTET_STREAM,
    }
}
