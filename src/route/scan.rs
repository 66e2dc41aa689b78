//! Content directory scanning.
//!
//! Walks docs, blog, pages and static directories and fills a
//! [`RouteTable`]. Missing directories contribute nothing.

use super::category::{CategoryLink, CategoryMeta, generated_index_route};
use super::doc::{blog_post_route, doc_route, join_route, page_route, strip_number_prefix};
use super::frontmatter::FrontMatter;
use super::{RouteKind, RouteTable, Sidebars};
use crate::config::SiteConfig;
use crate::utils::path::slash_path;
use crate::utils::slug::slugify;
use anyhow::{Context, Result};
use jwalk::WalkDir;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Markdown content extensions.
pub const MARKDOWN_EXTS: &[&str] = &["md", "mdx"];

/// Extensions served as standalone pages.
const PAGE_EXTS: &[&str] = &["md", "mdx", "js", "jsx", "ts", "tsx", "html"];

/// Stems that stand for their directory in the docs tree.
const INDEX_STEMS: &[&str] = &["index", "readme"];

/// Build the route table from the configured content directories.
pub fn scan(config: &SiteConfig, sidebars: Option<&Sidebars>) -> Result<RouteTable> {
    let mut table = RouteTable::default();

    scan_docs(config, sidebars, &mut table)?;
    if config.blog.enable {
        scan_blog(config, &mut table)?;
    }
    scan_pages(config, &mut table);
    scan_static(config, &mut table);

    Ok(table)
}

// ============================================================================
// docs
// ============================================================================

fn scan_docs(config: &SiteConfig, sidebars: Option<&Sidebars>, table: &mut RouteTable) -> Result<()> {
    let prefix = config.docs.route_prefix();
    let docs_dir = config.docs_dir();
    let files = collect_files(&docs_dir, MARKDOWN_EXTS);

    let docs = files
        .par_iter()
        .map(|file| -> Result<_> {
            let rel = relative_stem(file, &docs_dir);
            let fm = read_frontmatter(file)?;
            Ok((doc_route(&rel, &fm, &prefix), rel, file))
        })
        .collect::<Result<Vec<_>>>()?;

    // Directories holding docs, and those with an index doc of their own
    let mut dirs = BTreeSet::new();
    let mut indexed = FxHashSet::default();
    for (_, rel, _) in &docs {
        let mut parts: Vec<&str> = rel.split('/').collect();
        let stem = parts.pop().unwrap_or_default();
        for depth in 1..=parts.len() {
            dirs.insert(parts[..depth].join("/"));
        }
        if let Some(parent) = parts.last()
            && (INDEX_STEMS.iter().any(|s| stem.eq_ignore_ascii_case(s))
                || strip_number_prefix(parent).eq_ignore_ascii_case(strip_number_prefix(stem)))
        {
            indexed.insert(parts.join("/"));
        }
    }

    for (doc, _, file) in docs {
        table.add_doc(doc.id, doc.route, config.root_relative(file));
    }

    for dir in dirs {
        let abs = docs_dir.join(&dir);
        let meta = CategoryMeta::load(&abs)?;
        let (source, meta) = match meta {
            Some((path, meta)) => (Some(path), meta),
            None => (None, CategoryMeta::default()),
        };

        let label = meta.label.clone().unwrap_or_else(|| {
            let name = dir.rsplit('/').next().unwrap_or(&dir);
            strip_number_prefix(name).to_string()
        });

        let slug = match &meta.link {
            Some(CategoryLink::GeneratedIndex { slug, .. }) => slug.as_deref(),
            Some(CategoryLink::Doc { .. }) => continue,
            None if indexed.contains(&dir) => continue,
            None => None,
        };

        let source = source.as_deref().unwrap_or(abs.as_path());
        table.insert(
            generated_index_route(&prefix, &label, slug),
            RouteKind::Category,
            Some(config.root_relative(source)),
        );
    }

    if let Some(sidebars) = sidebars {
        for (label, slug) in sidebars.generated_indexes() {
            table.insert(
                generated_index_route(&prefix, label, slug),
                RouteKind::Category,
                config.docs.sidebar_path.as_deref(),
            );
        }
    }

    table.markdown.extend(files);
    Ok(())
}

// ============================================================================
// blog
// ============================================================================

fn scan_blog(config: &SiteConfig, table: &mut RouteTable) -> Result<()> {
    let prefix = config.blog.route_prefix();
    let blog_dir = config.blog_dir();
    if !blog_dir.is_dir() {
        return Ok(());
    }

    for page in ["", "archive", "tags"] {
        table.insert(join_route(&prefix, page), RouteKind::Blog, None);
    }

    let files = collect_files(&blog_dir, MARKDOWN_EXTS);
    let posts = files
        .par_iter()
        .map(|file| -> Result<_> {
            let rel = relative_stem(file, &blog_dir);
            let fm = read_frontmatter(file)?;
            Ok((blog_post_route(&rel, &fm, &prefix), fm.tags, file))
        })
        .collect::<Result<Vec<_>>>()?;

    for (route, tags, file) in posts {
        table.insert(route, RouteKind::Blog, Some(config.root_relative(file)));
        for tag in tags {
            let tag_route = join_route(&prefix, &format!("tags/{}", slugify(&tag)));
            table.insert_shared(tag_route, RouteKind::Blog);
        }
    }

    table.markdown.extend(files);
    Ok(())
}

// ============================================================================
// pages, static
// ============================================================================

fn scan_pages(config: &SiteConfig, table: &mut RouteTable) {
    let pages_dir = config.pages_dir();
    for file in collect_files(&pages_dir, PAGE_EXTS) {
        let rel = relative_stem(&file, &pages_dir);
        let Some(route) = page_route(&rel) else {
            continue;
        };
        table.insert(route, RouteKind::Page, Some(config.root_relative(&file)));
    }
}

fn scan_static(config: &SiteConfig, table: &mut RouteTable) {
    let static_dir = config.static_dir();
    for file in collect_files(&static_dir, &[]) {
        if let Some(rel) = slash_path(&file, &static_dir) {
            table.insert_shared(format!("/{}", rel), RouteKind::Static);
        }
    }
}

// ============================================================================
// helpers
// ============================================================================

/// Collect files under `dir` with one of `exts` (any file when empty),
/// sorted by path. Hidden files are skipped.
pub fn collect_files(dir: &Path, exts: &[&str]) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }
    WalkDir::new(dir)
        .sort(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| exts.is_empty() || has_extension(p, exts))
        .collect()
}

fn has_extension(path: &Path, exts: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| exts.iter().any(|x| e.eq_ignore_ascii_case(x)))
}

/// Path under `base` with `/` separators and no extension.
fn relative_stem(file: &Path, base: &Path) -> String {
    let rel = slash_path(file, base).unwrap_or_default();
    match rel.rsplit_once('.') {
        Some((head, ext)) if !ext.contains('/') && !head.ends_with('/') => head.to_string(),
        _ => rel,
    }
}

fn read_frontmatter(file: &Path) -> Result<FrontMatter> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("failed to read `{}`", file.display()))?;
    FrontMatter::parse(&content).with_context(|| format!("in `{}`", file.display()))
}
