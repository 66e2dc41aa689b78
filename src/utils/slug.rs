//! URL slug generation.

use deunicode::deunicode;

/// Turn free text into a URL slug.
///
/// Unicode is transliterated to ASCII, everything lowercased, and runs of
/// non-alphanumerics collapse into a single `-`.
///
/// # Examples
///
/// - `slugify("Getting Started")` -> `"getting-started"`
/// - `slugify("Café & Crème")` -> `"cafe-creme"`
/// - `slugify("  API v2  ")` -> `"api-v2"`
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text);
    let mut out = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}
