//! URL processing utilities.
//!
//! Provides consistent URL handling across the codebase:
//! - Link type detection (external vs internal)
//! - Fragment and query splitting
//! - Route normalization for lookups

use percent_encoding::percent_decode_str;

/// Check if a link is external (has a URL scheme like http:, mailto:, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
///
/// # Examples
/// ```ignore
/// assert!(is_external_link("https://example.com"));
/// assert!(is_external_link("mailto:user@example.com"));
/// assert!(!is_external_link("/about"));
/// assert!(!is_external_link("./file.md"));
/// ```
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Split a URL into path and fragment parts
///
/// # Returns
/// A tuple of (path, fragment) where fragment is empty string if no `#` found
///
/// # Examples
/// ```ignore
/// assert_eq!(split_path_fragment("/about#team"), ("/about", "team"));
/// assert_eq!(split_path_fragment("/about"), ("/about", ""));
/// ```
#[inline]
pub fn split_path_fragment(url: &str) -> (&str, &str) {
    url.split_once('#').unwrap_or((url, ""))
}

/// Drop a `?query` suffix.
#[inline]
pub fn strip_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(path, _)| path)
}

/// Normalize a site route for lookup.
///
/// Fragment and query are dropped, percent-encoding decoded, duplicate
/// and trailing slashes removed. The root is `/`.
///
/// # Examples
/// ```ignore
/// assert_eq!(normalize_route("/docs/intro/#setup"), "/docs/intro");
/// assert_eq!(normalize_route("/docs/my%20page?x=1"), "/docs/my page");
/// assert_eq!(normalize_route(""), "/");
/// ```
pub fn normalize_route(url: &str) -> String {
    let (path, _) = split_path_fragment(url);
    let path = strip_query(path);
    let decoded = percent_decode_str(path).decode_utf8_lossy();

    let mut out = String::with_capacity(decoded.len() + 1);
    for segment in decoded.split('/').filter(|s| !s.is_empty()) {
        out.push('/');
        out.push_str(segment);
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}
