//! Route rules for content files.
//!
//! Pure functions: a relative source path plus front matter in, id and
//! route out. Paths use `/` separators and carry no extension.

use super::frontmatter::FrontMatter;
use regex::Regex;
use std::sync::LazyLock;

/// Ordering prefix such as `01-`, `2_` or `3.`.
static NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+[ \t]*[-_.]+[ \t]*([^-_. \t].*)$").unwrap());

/// Date prefix of a blog post: `2023-05-01-welcome`.
static BLOG_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})[-/]([0-9]{2})[-/]([0-9]{2})[-/]?(.*)$").unwrap());

/// File stems that stand for their directory.
const INDEX_STEMS: &[&str] = &["index", "readme"];

/// Strip an ordering prefix from one path segment.
///
/// A segment that is only a number (`2023`) is kept as is.
pub fn strip_number_prefix(segment: &str) -> &str {
    NUMBER_PREFIX
        .captures(segment)
        .and_then(|c| c.get(1))
        .map_or(segment, |m| m.as_str())
}

/// A resolved doc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocRoute {
    /// Doc id, as referenced from sidebars (`tutorials/create-collection`).
    pub id: String,
    /// Route under the site root (`/docs/tutorials/create-collection`).
    pub route: String,
}

/// Route of a doc.
///
/// `rel` is the path under the docs directory without extension
/// (`01-tutorials/02-create`). `prefix` is the docs route prefix.
pub fn doc_route(rel: &str, fm: &FrontMatter, prefix: &str) -> DocRoute {
    let (dir, stem) = split_dir(rel);
    let dir: Vec<&str> = dir.split('/').filter(|s| !s.is_empty()).map(strip_number_prefix).collect();
    let stem = strip_number_prefix(stem);
    let base_id = fm.id.as_deref().unwrap_or(stem);

    let mut id = dir.join("/");
    if !id.is_empty() {
        id.push('/');
    }
    id.push_str(base_id);

    let route = match fm.slug.as_deref() {
        Some(slug) => join_slug(prefix, &dir.join("/"), slug),
        None if is_category_index(stem, dir.last().copied()) => join_route(prefix, &dir.join("/")),
        None => join_route(prefix, &id),
    };

    DocRoute { id, route }
}

/// `index`, `README` or a file named after its directory.
fn is_category_index(stem: &str, parent: Option<&str>) -> bool {
    INDEX_STEMS.iter().any(|s| stem.eq_ignore_ascii_case(s))
        || parent.is_some_and(|p| p.eq_ignore_ascii_case(stem))
}

/// Blog post route.
///
/// `rel` is the file path without extension; for `2023-05-01-welcome/index`
/// the directory names the post.
pub fn blog_post_route(rel: &str, fm: &FrontMatter, prefix: &str) -> String {
    if let Some(slug) = fm.slug.as_deref() {
        return join_slug(prefix, "", slug);
    }

    let (dir, stem) = split_dir(rel);
    let name_path = if INDEX_STEMS.iter().any(|s| stem.eq_ignore_ascii_case(s)) && !dir.is_empty() {
        dir
    } else {
        rel
    };

    let (parent, name) = split_dir(name_path);
    match BLOG_DATE.captures(name) {
        Some(c) => {
            let text = c.get(4).map_or("", |m| m.as_str());
            let mut path = format!("{}/{}/{}", &c[1], &c[2], &c[3]);
            if !text.is_empty() {
                path.push('/');
                path.push_str(text);
            }
            join_route(prefix, &join_parts(parent, &path))
        }
        None => join_route(prefix, name_path),
    }
}

/// Standalone page route. Returns `None` for skipped files.
///
/// Files and directories starting with `_` are private; `index` maps to
/// its directory.
pub fn page_route(rel: &str) -> Option<String> {
    if rel.split('/').any(|s| s.starts_with('_')) {
        return None;
    }
    let (dir, stem) = split_dir(rel);
    if stem.eq_ignore_ascii_case("index") {
        Some(join_route("", dir))
    } else {
        Some(join_route("", rel))
    }
}

/// `(dir, stem)` of a `/`-separated path.
fn split_dir(rel: &str) -> (&str, &str) {
    rel.rsplit_once('/').unwrap_or(("", rel))
}

fn join_parts(a: &str, b: &str) -> String {
    match (a.is_empty(), b.is_empty()) {
        (true, _) => b.to_string(),
        (_, true) => a.to_string(),
        _ => format!("{}/{}", a, b),
    }
}

/// Absolute slugs hang off `prefix`, relative ones off `dir`.
fn join_slug(prefix: &str, dir: &str, slug: &str) -> String {
    match slug.strip_prefix('/') {
        Some(abs) => join_route(prefix, abs),
        None => join_route(prefix, &join_parts(dir, slug)),
    }
}

/// `prefix` + `/path`, normalized (no trailing slash, root is `/`).
pub fn join_route(prefix: &str, path: &str) -> String {
    crate::utils::path::normalize_route(&format!("{}/{}", prefix, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fm(id: Option<&str>, slug: Option<&str>) -> FrontMatter {
        FrontMatter {
            id: id.map(Into::into),
            slug: slug.map(Into::into),
            ..Default::default()
        }
    }

    fn route(rel: &str) -> DocRoute {
        doc_route(rel, &FrontMatter::default(), "/docs")
    }

    #[test]
    fn test_strip_number_prefix() {
        assert_eq!(strip_number_prefix("01-intro"), "intro");
        assert_eq!(strip_number_prefix("2_setup"), "setup");
        assert_eq!(strip_number_prefix("3. guide"), "guide");
        assert_eq!(strip_number_prefix("10 - final"), "final");
        assert_eq!(strip_number_prefix("2023"), "2023");
        assert_eq!(strip_number_prefix("intro"), "intro");
        assert_eq!(strip_number_prefix("1-"), "1-");
    }

    #[test]
    fn test_doc_routes() {
        assert_eq!(
            route("overview"),
            DocRoute {
                id: "overview".into(),
                route: "/docs/overview".into()
            }
        );
        assert_eq!(route("01-tutorials/02-create").id, "tutorials/create");
        assert_eq!(route("01-tutorials/02-create").route, "/docs/tutorials/create");
    }

    #[test]
    fn test_category_index_docs() {
        assert_eq!(route("index").route, "/docs");
        assert_eq!(route("guides/README").route, "/docs/guides");
        assert_eq!(route("guides/README").id, "guides/README");
        assert_eq!(route("02-guides/guides").route, "/docs/guides");
        assert_eq!(route("guides/index").id, "guides/index");
    }

    #[test]
    fn test_frontmatter_id_and_slug() {
        let r = doc_route("tutorials/02-create", &fm(Some("first"), None), "/docs");
        assert_eq!(r.id, "tutorials/first");
        assert_eq!(r.route, "/docs/tutorials/first");

        let r = doc_route("tutorials/create", &fm(None, Some("/start")), "/docs");
        assert_eq!(r.id, "tutorials/create");
        assert_eq!(r.route, "/docs/start");

        let r = doc_route("01-tutorials/create", &fm(None, Some("begin")), "/docs");
        assert_eq!(r.route, "/docs/tutorials/begin");

        let r = doc_route("intro", &fm(None, Some("/")), "/docs");
        assert_eq!(r.route, "/docs");
    }

    #[test]
    fn test_docs_at_root() {
        assert_eq!(doc_route("intro", &FrontMatter::default(), "").route, "/intro");
        assert_eq!(doc_route("index", &FrontMatter::default(), "").route, "/");
    }

    #[test]
    fn test_blog_routes() {
        let none = FrontMatter::default();
        assert_eq!(
            blog_post_route("2023-05-01-welcome", &none, "/blog"),
            "/blog/2023/05/01/welcome"
        );
        assert_eq!(
            blog_post_route("2023-05-01-launch/index", &none, "/blog"),
            "/blog/2023/05/01/launch"
        );
        assert_eq!(blog_post_route("hello", &none, "/blog"), "/blog/hello");
        assert_eq!(
            blog_post_route("2023-05-01-welcome", &fm(None, Some("hi")), "/blog"),
            "/blog/hi"
        );
        assert_eq!(
            blog_post_route("2023-05-01-welcome", &fm(None, Some("/hi")), "/blog"),
            "/blog/hi"
        );
    }

    #[test]
    fn test_page_routes() {
        assert_eq!(page_route("index").as_deref(), Some("/"));
        assert_eq!(page_route("terms").as_deref(), Some("/terms"));
        assert_eq!(page_route("legal/index").as_deref(), Some("/legal"));
        assert_eq!(page_route("_partial"), None);
        assert_eq!(page_route("_components/button"), None);
    }
}
