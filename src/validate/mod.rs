//! Broken link detection.
//!
//! Checks navbar/footer `to` targets, sidebar doc ids and links inside
//! markdown content against the [`RouteTable`]. External links are
//! never fetched.

mod link;
mod markdown;
mod report;

pub use link::LinkKind;
pub use markdown::extract_links;
pub use report::{LinkClass, LinkError, LinkReport};

use std::fs;
use std::path::Path;

use parking_lot::Mutex;
use percent_encoding::percent_decode_str;
use rayon::prelude::*;

use crate::config::{CONFIG_FILE, SiteConfig, TargetRef};
use crate::log;
use crate::route::{RouteTable, Sidebars};
use crate::utils::plural::plural_count;

/// Collect broken links of every enabled class.
pub fn check_links(
    config: &SiteConfig,
    routes: &RouteTable,
    sidebars: Option<&Sidebars>,
) -> LinkReport {
    let links = &config.links;
    let check_site = links.on_broken_links.is_enabled();
    let check_markdown = links.on_broken_markdown_links.is_enabled();

    let mut report = LinkReport::default();
    if check_site {
        check_config_links(config, routes, &mut report);
        if let Some(sidebars) = sidebars {
            check_sidebar_refs(config, sidebars, routes, &mut report);
        }
    }

    if check_site || check_markdown {
        let files = routes.markdown_files();
        crate::debug!("links"; "scanning {}", plural_count(files.len(), "markdown file"));

        let shared = Mutex::new(LinkReport::default());
        files.par_iter().for_each(|file| {
            match fs::read_to_string(file) {
                Ok(content) => {
                    let local = check_markdown_file(config, routes, file, &content, check_site, check_markdown);
                    if !local.is_empty() {
                        shared.lock().merge(local);
                    }
                }
                Err(e) => log!("warning"; "skipping `{}`: {}", file.display(), e),
            }
        });
        report.merge(shared.into_inner());
    }

    report
}

/// Navbar, footer and logo links from the config file.
fn check_config_links(config: &SiteConfig, routes: &RouteTable, report: &mut LinkReport) {
    let mut check = |to: &str, field: String| {
        if !routes.contains(config.site.strip_base(to)) {
            report.add(LinkClass::Site, CONFIG_FILE, to, field);
        }
    };

    for (i, item) in config.navbar.items.iter().enumerate() {
        if let Ok(TargetRef::Internal(to)) = item.target() {
            check(to, format!("navbar.items[{}].to", i));
        }
    }
    if let Some(href) = config.navbar.logo.as_ref().and_then(|l| l.href.as_deref())
        && href.starts_with('/')
    {
        check(href, "navbar.logo.href".to_string());
    }

    for (i, group) in config.footer.links.iter().enumerate() {
        for (j, item) in group.items.iter().enumerate() {
            if let Ok(TargetRef::Internal(to)) = item.target() {
                check(to, format!("footer.links[{}].items[{}].to", i, j));
            }
        }
    }
}

fn check_sidebar_refs(
    config: &SiteConfig,
    sidebars: &Sidebars,
    routes: &RouteTable,
    report: &mut LinkReport,
) {
    let source = config
        .docs
        .sidebar_path
        .as_deref()
        .map_or_else(|| "sidebars".to_string(), |p| p.display().to_string());

    for doc in sidebars.doc_refs() {
        if !routes.has_doc(doc.id) {
            report.add(
                LinkClass::Site,
                source.as_str(),
                doc.id,
                format!("sidebar `{}`", doc.sidebar),
            );
        }
    }

    for link in sidebars.site_links() {
        if !routes.contains(config.site.strip_base(link.href)) {
            report.add(
                LinkClass::Site,
                source.as_str(),
                link.href,
                format!("sidebar `{}`", link.sidebar),
            );
        }
    }
}

/// Links inside one markdown file.
fn check_markdown_file(
    config: &SiteConfig,
    routes: &RouteTable,
    file: &Path,
    content: &str,
    check_site: bool,
    check_markdown: bool,
) -> LinkReport {
    let mut report = LinkReport::default();
    let source = config.root_relative(file).display().to_string();

    for link in extract_links(content) {
        let kind = LinkKind::parse(&link.dest);
        let location = format!("line {}", link.line);
        match kind {
            LinkKind::SiteRoot(path) if check_site => {
                if !routes.contains(config.site.strip_base(path)) {
                    report.add(LinkClass::Site, source.as_str(), path, location);
                }
            }
            LinkKind::FileRelative(_) if check_markdown => {
                let Some(target) = kind.markdown_path() else {
                    continue;
                };
                let decoded = percent_decode_str(target).decode_utf8_lossy();
                let dir = file.parent().unwrap_or(Path::new(""));
                if !dir.join(&*decoded).is_file() {
                    report.add(LinkClass::Markdown, source.as_str(), target, location);
                }
            }
            _ => {}
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    fn site(files: &[(&str, &str)], extra: &str) -> (TempDir, SiteConfig) {
        let temp = TempDir::new().unwrap();
        for (path, content) in files {
            let path = temp.path().join(path);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        let mut config = test_parse_config(extra);
        config.root = temp.path().to_path_buf();
        (temp, config)
    }

    fn check(config: &SiteConfig) -> LinkReport {
        let routes = RouteTable::scan(config, None).unwrap();
        check_links(config, &routes, None)
    }

    #[test]
    fn test_navbar_and_footer_links() {
        let (_temp, config) = site(
            &[("docs/specification.md", "# Spec")],
            r#"[[navbar.items]]
to = "/docs/specification"
label = "Specification"

[[navbar.items]]
to = "/docs/missing"
label = "Missing"

[[navbar.items]]
href = "https://github.com/d3vx-com/brc721-docs"
label = "GitHub"

[[footer.links]]
title = "Legal"
items = [{ label = "Terms", to = "/terms" }]"#,
        );
        let report = check(&config);
        let broken: Vec<_> = report
            .class(LinkClass::Site)
            .map(|(_, l)| (l.target.as_str(), l.location.as_str()))
            .collect();
        assert_eq!(
            broken,
            vec![
                ("/docs/missing", "navbar.items[1].to"),
                ("/terms", "footer.links[0].items[0].to"),
            ]
        );
    }

    #[test]
    fn test_base_url_stripped() {
        let (_temp, config) = site(
            &[("docs/intro.md", "")],
            "base_url = \"/proj/\"\n[[navbar.items]]\nto = \"/proj/docs/intro/\"\nlabel = \"Intro\"",
        );
        assert!(check(&config).is_empty());
    }

    #[test]
    fn test_markdown_links() {
        let (_temp, config) = site(
            &[
                ("docs/intro.md", "[setup](./guides/setup.md#install) [gone](./gone.md) [spec](/docs/guides/setup) [x](/docs/nope)"),
                ("docs/guides/setup.md", "[back](../intro.md) [img](./diagram.png)"),
            ],
            "",
        );
        let report = check(&config);

        let markdown: Vec<_> = report.class(LinkClass::Markdown).collect();
        assert_eq!(markdown.len(), 1);
        assert_eq!(markdown[0].1.target, "./gone.md");

        let site_links: Vec<_> = report.class(LinkClass::Site).map(|(_, l)| l.target.as_str()).collect();
        assert_eq!(site_links, vec!["/docs/nope"]);
    }

    #[test]
    fn test_ignored_classes_not_collected() {
        let (_temp, config) = site(
            &[("docs/intro.md", "[gone](./gone.md) [x](/nope)")],
            "[links]\non_broken_links = \"ignore\"\non_broken_markdown_links = \"ignore\"\n\
             [[navbar.items]]\nto = \"/missing\"\nlabel = \"M\"",
        );
        assert!(check(&config).is_empty());
    }

    #[test]
    fn test_sidebar_refs() {
        let (_temp, config) = site(&[("docs/intro.md", "")], "[docs]\nsidebar_path = \"sidebars.toml\"");
        let sidebars = Sidebars::from_str(
            "[main]\nitems = [\"intro\", \"missing\", \
             { type = \"link\", label = \"Intro\", href = \"/docs/intro\" }, \
             { type = \"link\", label = \"Gone\", href = \"/docs/gone\" }]",
        )
        .unwrap();
        let routes = RouteTable::scan(&config, Some(&sidebars)).unwrap();
        let report = check_links(&config, &routes, Some(&sidebars));

        let broken: Vec<_> = report.class(LinkClass::Site).collect();
        assert_eq!(broken.len(), 2);
        assert!(broken.iter().all(|(source, _)| *source == "sidebars.toml"));
        let targets: Vec<_> = broken.iter().map(|(_, l)| l.target.as_str()).collect();
        assert!(targets.contains(&"missing"));
        assert!(targets.contains(&"/docs/gone"));
    }
}
