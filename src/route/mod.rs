//! Route table: every internal URL the site will serve.
//!
//! # Module Structure
//!
//! ```text
//! route/
//! ├── category     # _category_ files, generated index routes
//! ├── doc          # Route rules for docs, blog posts, pages
//! ├── frontmatter  # id/slug/tags from markdown front matter
//! ├── scan         # Directory walking
//! └── sidebar      # Sidebars file
//! ```
//!
//! Routes are stored normalized: leading slash, no trailing slash, no
//! fragment or query. Lookups normalize the same way.

mod category;
mod doc;
mod frontmatter;
mod scan;
mod sidebar;

pub use scan::MARKDOWN_EXTS;
pub use sidebar::Sidebars;

use crate::config::SiteConfig;
use crate::utils::path::normalize_route;
use anyhow::Result;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Where a route comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKind {
    Doc,
    Category,
    Blog,
    Page,
    Static,
}

impl RouteKind {
    /// Routes backed by exactly one source file.
    #[inline]
    fn is_content(self) -> bool {
        matches!(self, Self::Doc | Self::Blog | Self::Page)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub kind: RouteKind,
    /// Source file relative to the site root.
    pub source: Option<String>,
}

/// Two content files claiming the same route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteConflict {
    pub route: String,
    pub first: String,
    pub second: String,
}

/// One row of `docsite routes` output.
#[derive(Debug, Serialize)]
pub struct RouteRecord<'a> {
    pub route: &'a str,
    pub kind: RouteKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'a str>,
}

/// The set of internal routes.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: BTreeMap<String, RouteEntry>,
    doc_ids: FxHashSet<String>,
    /// Markdown files whose links get checked.
    markdown: Vec<PathBuf>,
    conflicts: Vec<RouteConflict>,
}

impl RouteTable {
    /// Scan the content directories of `config`.
    ///
    /// `sidebars` contributes generated category indexes.
    pub fn scan(config: &SiteConfig, sidebars: Option<&Sidebars>) -> Result<Self> {
        let table = scan::scan(config, sidebars)?;
        crate::debug!(
            "routes";
            "{} routes, {} docs, {} markdown files",
            table.len(),
            table.doc_ids.len(),
            table.markdown.len()
        );
        Ok(table)
    }

    /// Add a route. A second content file on the same route is recorded
    /// as a conflict; the first one is kept.
    pub fn insert(&mut self, route: String, kind: RouteKind, source: Option<&Path>) {
        let route = normalize_route(&route);
        let source = source.map(|p| p.to_string_lossy().replace('\\', "/"));

        if let Some(existing) = self.routes.get(&route) {
            if existing.kind.is_content()
                && kind.is_content()
                && let (Some(first), Some(second)) = (&existing.source, &source)
            {
                self.conflicts.push(RouteConflict {
                    route,
                    first: first.clone(),
                    second: second.clone(),
                });
            }
            return;
        }
        self.routes.insert(route, RouteEntry { kind, source });
    }

    /// Add a route several sources may share (tag pages, static files).
    pub fn insert_shared(&mut self, route: String, kind: RouteKind) {
        self.routes
            .entry(normalize_route(&route))
            .or_insert(RouteEntry { kind, source: None });
    }

    pub fn add_doc(&mut self, id: String, route: String, source: &Path) {
        self.insert(route, RouteKind::Doc, Some(source));
        self.doc_ids.insert(id);
    }

    /// Whether `link` (a site-root path, base path already stripped)
    /// resolves to a route.
    pub fn contains(&self, link: &str) -> bool {
        self.routes.contains_key(&normalize_route(link))
    }

    #[inline]
    pub fn has_doc(&self, id: &str) -> bool {
        self.doc_ids.contains(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn markdown_files(&self) -> &[PathBuf] {
        &self.markdown
    }

    pub fn conflicts(&self) -> &[RouteConflict] {
        &self.conflicts
    }

    /// Rows in route order.
    pub fn records(&self) -> Vec<RouteRecord<'_>> {
        self.routes
            .iter()
            .map(|(route, entry)| RouteRecord {
                route,
                kind: entry.kind,
                source: entry.source.as_deref(),
            })
            .collect()
    }
}

#[cfg(test)]
impl RouteTable {
    fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    fn get(&self, route: &str) -> Option<&RouteEntry> {
        self.routes.get(&normalize_route(route))
    }
}
