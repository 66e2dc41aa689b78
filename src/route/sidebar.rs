//! Docs sidebars file.
//!
//! One table per sidebar id, each with an ordered `items` array. A bare
//! string is a doc id; tables carry a `type`:
//!
//! ```toml
//! [tutorialSidebar]
//! items = [
//!     "overview",
//!     { type = "category", label = "Tutorials", link = { type = "generated-index" }, items = [
//!         "tutorials/create-collection",
//!     ] },
//!     { type = "doc", id = "specification", label = "Spec" },
//!     { type = "link", label = "GitHub", href = "https://github.com/d3vx-com/brc721-docs" },
//!     { type = "autogenerated", dir = "guides" },
//! ]
//! ```

use super::category::CategoryLink;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// All sidebars, keyed by sidebar id.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Sidebars(BTreeMap<String, Sidebar>);

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Sidebar {
    pub items: Vec<SidebarItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SidebarItem {
    /// Shorthand for `{ type = "doc", id = "..." }`.
    DocId(String),
    Entry(SidebarEntry),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SidebarEntry {
    Doc {
        id: String,
        #[serde(default)]
        label: Option<String>,
    },
    /// Doc reference that does not mark the sidebar active.
    Ref {
        id: String,
        #[serde(default)]
        label: Option<String>,
    },
    Category {
        label: String,
        #[serde(default)]
        items: Vec<SidebarItem>,
        #[serde(default)]
        link: Option<CategoryLink>,
    },
    Link {
        label: String,
        href: String,
    },
    /// Docs generated from a directory, relative to the docs root.
    Autogenerated {
        dir: String,
    },
}

/// A doc id referenced from a sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocRef<'a> {
    pub sidebar: &'a str,
    pub id: &'a str,
}

/// A site-root `href` of a sidebar `link` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteLinkRef<'a> {
    pub sidebar: &'a str,
    pub href: &'a str,
}

impl Sidebars {
    /// Load a sidebars file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        Self::from_str(&content).with_context(|| format!("invalid sidebars file `{}`", path.display()))
    }

    pub fn from_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Sidebar ids in sorted order.
    pub fn ids(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    /// Every doc id referenced by any sidebar, including category links.
    pub fn doc_refs(&self) -> Vec<DocRef<'_>> {
        let mut refs = Vec::new();
        for (sidebar, body) in &self.0 {
            collect_doc_refs(sidebar, &body.items, &mut refs);
        }
        refs
    }

    /// `link` entries pointing into the site (`/docs/x`), not at a URL.
    pub fn site_links(&self) -> Vec<SiteLinkRef<'_>> {
        let mut links = Vec::new();
        for (sidebar, body) in &self.0 {
            collect_site_links(sidebar, &body.items, &mut links);
        }
        links
    }

    /// Categories with a generated index, as `(label, slug)`.
    pub fn generated_indexes(&self) -> Vec<(&str, Option<&str>)> {
        let mut out = Vec::new();
        for body in self.0.values() {
            collect_generated_indexes(&body.items, &mut out);
        }
        out
    }
}

fn collect_doc_refs<'a>(sidebar: &'a str, items: &'a [SidebarItem], refs: &mut Vec<DocRef<'a>>) {
    for item in items {
        match item {
            SidebarItem::DocId(id)
            | SidebarItem::Entry(SidebarEntry::Doc { id, .. } | SidebarEntry::Ref { id, .. }) => {
                refs.push(DocRef { sidebar, id });
            }
            SidebarItem::Entry(SidebarEntry::Category { items, link, .. }) => {
                if let Some(CategoryLink::Doc { id }) = link {
                    refs.push(DocRef { sidebar, id });
                }
                collect_doc_refs(sidebar, items, refs);
            }
            SidebarItem::Entry(SidebarEntry::Link { .. } | SidebarEntry::Autogenerated { .. }) => {}
        }
    }
}

fn collect_site_links<'a>(sidebar: &'a str, items: &'a [SidebarItem], links: &mut Vec<SiteLinkRef<'a>>) {
    for item in items {
        match item {
            SidebarItem::Entry(SidebarEntry::Link { href, .. }) if href.starts_with('/') => {
                links.push(SiteLinkRef { sidebar, href });
            }
            SidebarItem::Entry(SidebarEntry::Category { items, .. }) => {
                collect_site_links(sidebar, items, links);
            }
            _ => {}
        }
    }
}

fn collect_generated_indexes<'a>(items: &'a [SidebarItem], out: &mut Vec<(&'a str, Option<&'a str>)>) {
    for item in items {
        if let SidebarItem::Entry(SidebarEntry::Category { label, items, link }) = item {
            if let Some(CategoryLink::GeneratedIndex { slug, .. }) = link {
                out.push((label.as_str(), slug.as_deref()));
            }
            collect_generated_indexes(items, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIDEBARS: &str = r#"
[tutorialSidebar]
items = [
    "overview",
    { type = "category", label = "Tutorials", link = { type = "generated-index" }, items = [
        "tutorials/create-collection",
        { type = "category", label = "Advanced", link = { type = "doc", id = "tutorials/advanced" }, items = [] },
    ] },
    { type = "doc", id = "specification", label = "Spec" },
    { type = "link", label = "GitHub", href = "https://github.com/d3vx-com/brc721-docs" },
    { type = "autogenerated", dir = "guides" },
]

[apiSidebar]
items = [{ type = "ref", id = "overview" }]
"#;

    #[test]
    fn test_parse_sidebars() {
        let sidebars = Sidebars::from_str(SIDEBARS).unwrap();
        assert_eq!(sidebars.ids(), vec!["apiSidebar", "tutorialSidebar"]);
        assert!(sidebars.contains("tutorialSidebar"));
        assert!(!sidebars.contains("missing"));
    }

    #[test]
    fn test_doc_refs() {
        let sidebars = Sidebars::from_str(SIDEBARS).unwrap();
        let ids: Vec<_> = sidebars.doc_refs().iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            vec![
                "overview",
                "overview",
                "tutorials/create-collection",
                "tutorials/advanced",
                "specification",
            ]
        );
    }

    #[test]
    fn test_site_links() {
        let sidebars = Sidebars::from_str(
            "[main]\nitems = [{ type = \"link\", label = \"GitHub\", href = \"https://github.com\" }, \
             { type = \"category\", label = \"More\", items = [{ type = \"link\", label = \"Terms\", href = \"/terms\" }] }]",
        )
        .unwrap();
        assert_eq!(
            sidebars.site_links(),
            vec![SiteLinkRef {
                sidebar: "main",
                href: "/terms"
            }]
        );
    }

    #[test]
    fn test_generated_indexes() {
        let sidebars = Sidebars::from_str(SIDEBARS).unwrap();
        assert_eq!(sidebars.generated_indexes(), vec![("Tutorials", None)]);
    }

    #[test]
    fn test_invalid_item() {
        assert!(Sidebars::from_str("[s]\nitems = [{ type = \"weird\" }]").is_err());
        assert!(Sidebars::from_str("[s]\nlabel = \"x\"\nitems = []").is_err());
    }
}
