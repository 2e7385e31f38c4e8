//! URL helper functions

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped when a value is placed in a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Encode a value for use as one path segment
///
/// # Examples
/// ```ignore
/// encode_segment("a b") // -> "a%20b"
/// ```
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Decode a percent-encoded path segment, `None` if it is not valid UTF-8
pub fn decode_segment(segment: &str) -> Option<String> {
    percent_decode_str(segment)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}

/// Normalize a location into a route path
///
/// Drops the query string and fragment, makes sure there is a leading
/// slash and removes trailing slashes (except for the root).
///
/// # Examples
/// ```ignore
/// normalize_path("blog/?page=2") // -> "/blog"
/// ```
pub fn normalize_path(location: &str) -> String {
    let path = location
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim();

    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Path of a blog post detail page
pub fn post_path(slug: &str) -> String {
    format!("/blog/{}", encode_segment(slug))
}
