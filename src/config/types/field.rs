//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// A config field path such as `site.url` or `navbar.items[2].href`.
///
/// Static paths come from `#[derive(Config)]`; indexed paths for array
/// entries are built at validation time with [`FieldPath::at`] and
/// [`FieldPath::join`].
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "site")]
/// pub struct SiteInfoConfig {
///     pub url: String,
/// }
///
/// diag.error(SiteInfoConfig::FIELDS.url, "required");
/// diag.error(NavbarConfig::FIELDS.items.at(0).join("href"), "invalid URL");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Index into an array field: `navbar.items` -> `navbar.items[2]`.
    pub fn at(&self, index: usize) -> Self {
        Self(Cow::Owned(format!("{}[{}]", self.0, index)))
    }

    /// Descend into a key: `navbar.items[2]` -> `navbar.items[2].href`.
    pub fn join(&self, key: &str) -> Self {
        if self.0.is_empty() {
            return Self(Cow::Owned(key.to_string()));
        }
        Self(Cow::Owned(format!("{}.{}", self.0, key)))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_paths() {
        let items = FieldPath::new("navbar.items");
        assert_eq!(items.at(2).as_str(), "navbar.items[2]");
        assert_eq!(items.at(2).join("href").as_str(), "navbar.items[2].href");
        assert_eq!(
            FieldPath::new("footer.links").at(0).join("items").at(1).as_str(),
            "footer.links[0].items[1]"
        );
    }

    #[test]
    fn test_join_on_empty() {
        assert_eq!(FieldPath::new("").join("label").as_str(), "label");
    }
}
