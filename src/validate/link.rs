//! Link classification utilities.

use crate::route::MARKDOWN_EXTS;
use crate::utils::path::{is_external_link, split_path_fragment, strip_query};

/// Syntactic classification of links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// External link with URL scheme (https://, mailto:, tel:, etc.)
    External,
    /// Pure fragment/anchor link (#section), never checked.
    Fragment,
    /// Site-root-relative path (/docs/intro, /terms).
    SiteRoot(&'a str),
    /// File-relative path (./setup.md, ../overview.mdx).
    FileRelative(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Parse a link string into its syntactic kind.
    #[inline]
    pub fn parse(link: &'a str) -> Self {
        if is_external_link(link) || link.starts_with("//") {
            Self::External
        } else if link.starts_with('#') || link.starts_with("./#") {
            // ./#fragment is the same page anchor as #fragment
            Self::Fragment
        } else if link.starts_with('/') {
            Self::SiteRoot(link)
        } else {
            Self::FileRelative(link)
        }
    }

    /// File path of a relative link to a markdown file, without fragment
    /// or query. `None` for anything else.
    pub fn markdown_path(&self) -> Option<&'a str> {
        let Self::FileRelative(link) = *self else {
            return None;
        };
        let (path, _) = split_path_fragment(link);
        let path = strip_query(path);
        let (_, ext) = path.rsplit_once('.')?;
        MARKDOWN_EXTS
            .iter()
            .any(|e| ext.eq_ignore_ascii_case(e))
            .then_some(path)
    }
}
