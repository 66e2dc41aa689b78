//! Broken link report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::config::{BrokenLinkPolicy, LinksConfig};
use crate::utils::plural::plural_s;

/// Which policy governs a broken link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LinkClass {
    /// Site routes: navbar/footer `to`, sidebar doc ids, site-root links in content.
    Site,
    /// Relative links to `.md`/`.mdx` files.
    Markdown,
}

impl LinkClass {
    pub const ALL: [Self; 2] = [Self::Site, Self::Markdown];

    pub fn policy(self, links: &LinksConfig) -> BrokenLinkPolicy {
        match self {
            Self::Site => links.on_broken_links,
            Self::Markdown => links.on_broken_markdown_links,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Site => "broken links",
            Self::Markdown => "broken markdown links",
        }
    }
}

/// A single broken link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenLink {
    /// The link that failed.
    pub target: String,
    /// Where in the source (field path or `line N`).
    pub location: String,
}

/// Broken links grouped by class and source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkReport {
    entries: BTreeMap<LinkClass, BTreeMap<String, Vec<BrokenLink>>>,
}

impl LinkReport {
    /// Add a broken link.
    pub fn add(
        &mut self,
        class: LinkClass,
        source: impl Into<String>,
        target: impl Into<String>,
        location: impl Into<String>,
    ) {
        self.entries
            .entry(class)
            .or_default()
            .entry(source.into())
            .or_default()
            .push(BrokenLink {
                target: target.into(),
                location: location.into(),
            });
    }

    /// Merge another report into this one.
    pub fn merge(&mut self, other: Self) {
        for (class, files) in other.entries {
            let own = self.entries.entry(class).or_default();
            for (source, links) in files {
                own.entry(source).or_default().extend(links);
            }
        }
    }

    /// Broken link count of one class.
    pub fn count(&self, class: LinkClass) -> usize {
        self.entries
            .get(&class)
            .map_or(0, |files| files.values().map(Vec::len).sum())
    }

    pub fn total(&self) -> usize {
        LinkClass::ALL.iter().map(|c| self.count(*c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Broken links of one class, by source.
    pub fn class(&self, class: LinkClass) -> impl Iterator<Item = (&str, &BrokenLink)> {
        self.entries
            .get(&class)
            .into_iter()
            .flat_map(|files| files.iter())
            .flat_map(|(source, links)| links.iter().map(move |l| (source.as_str(), l)))
    }

    /// Split out one class as its own report.
    fn take(&mut self, class: LinkClass) -> Self {
        let mut out = Self::default();
        if let Some(files) = self.entries.remove(&class) {
            out.entries.insert(class, files);
        }
        out
    }

    /// Apply the configured policies.
    ///
    /// Classes set to `throw` with any broken link come back as a
    /// [`LinkError`]; `warn` and `log` classes are printed.
    pub fn enforce(mut self, links: &LinksConfig) -> Result<(), LinkError> {
        let mut fatal = Self::default();

        for class in LinkClass::ALL {
            let count = self.count(class);
            if count == 0 {
                continue;
            }
            let part = self.take(class);
            match class.policy(links) {
                BrokenLinkPolicy::Ignore => {}
                BrokenLinkPolicy::Log => {
                    crate::log!("links"; "found {} {}", count, class.name());
                    eprint!("{}", part.render(false));
                }
                BrokenLinkPolicy::Warn => {
                    crate::log!("warning"; "found {} {}", count, class.name());
                    eprint!("{}", part.render(true));
                }
                BrokenLinkPolicy::Throw => fatal.merge(part),
            }
        }

        if fatal.is_empty() {
            Ok(())
        } else {
            Err(LinkError::Broken(fatal))
        }
    }

    /// Detailed listing, one section per class.
    fn render(&self, color: bool) -> String {
        let mut out = String::new();
        for (class, files) in &self.entries {
            let count: usize = files.values().map(Vec::len).sum();
            let header = format!(
                "({} file{}, {} link{})",
                files.len(),
                plural_s(files.len()),
                count,
                plural_s(count)
            );
            if color {
                out.push_str(&format!("{} {}\n", class.name().red().bold(), header.dimmed()));
            } else {
                out.push_str(&format!("{} {}\n", class.name(), header));
            }

            for (source, links) in files {
                if color {
                    out.push_str(&format!("{}{}{}\n", "[".dimmed(), source.cyan(), "]".dimmed()));
                } else {
                    out.push_str(&format!("[{}]\n", source));
                }
                for link in links {
                    let arrow = if color { "→".red().to_string() } else { "→".to_string() };
                    out.push_str(&format!("{} {} ({})\n", arrow, link.target, link.location));
                }
            }
        }
        out
    }
}

impl fmt::Display for LinkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total();
        if total == 0 {
            return write!(f, "{}", "all links valid".green());
        }
        write!(f, "{}", self.render(true))?;
        write!(
            f,
            "{} {} {}",
            "found".dimmed(),
            total.to_string().red().bold(),
            format!("broken link{}", plural_s(total)).dimmed()
        )
    }
}

/// Broken links under a `throw` policy.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("{0}")]
    Broken(LinkReport),
}

impl LinkError {
    pub fn report(&self) -> &LinkReport {
        match self {
            Self::Broken(report) => report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> LinkReport {
        let mut report = LinkReport::default();
        report.add(LinkClass::Site, "docsite.toml", "/docs/missing", "navbar.items[1].to");
        report.add(LinkClass::Site, "docs/intro.md", "/nope", "line 3");
        report.add(LinkClass::Markdown, "docs/intro.md", "./gone.md", "line 5");
        report
    }

    fn links(site: BrokenLinkPolicy, markdown: BrokenLinkPolicy) -> LinksConfig {
        LinksConfig {
            on_broken_links: site,
            on_broken_markdown_links: markdown,
        }
    }

    #[test]
    fn test_counts() {
        let report = report();
        assert_eq!(report.count(LinkClass::Site), 2);
        assert_eq!(report.count(LinkClass::Markdown), 1);
        assert_eq!(report.total(), 3);
        let sources: Vec<_> = report.class(LinkClass::Site).map(|(s, _)| s).collect();
        assert_eq!(sources, vec!["docs/intro.md", "docsite.toml"]);
    }

    #[test]
    fn test_enforce_throw_keeps_only_fatal_class() {
        use BrokenLinkPolicy::*;
        let err = report().enforce(&links(Throw, Warn)).unwrap_err();
        assert_eq!(err.report().count(LinkClass::Site), 2);
        assert_eq!(err.report().count(LinkClass::Markdown), 0);
    }

    #[test]
    fn test_enforce_non_fatal() {
        use BrokenLinkPolicy::*;
        assert!(report().enforce(&links(Warn, Warn)).is_ok());
        assert!(report().enforce(&links(Log, Ignore)).is_ok());
        assert!(LinkReport::default().enforce(&links(Throw, Throw)).is_ok());
    }

    #[test]
    fn test_display_lists_targets() {
        let text = LinkError::Broken(report()).to_string();
        assert!(text.contains("/docs/missing"));
        assert!(text.contains("navbar.items[1].to"));
        assert!(text.contains("./gone.md"));
    }

    #[test]
    fn test_merge() {
        let mut a = LinkReport::default();
        a.add(LinkClass::Site, "a.md", "/x", "line 1");
        let mut b = LinkReport::default();
        b.add(LinkClass::Site, "a.md", "/y", "line 2");
        a.merge(b);
        assert_eq!(a.count(LinkClass::Site), 2);
    }
}
