//! Front matter of markdown content files.
//!
//! Only the keys that affect routing are read. Two formats:
//!
//! ```text
//! ---                  +++
//! id: overview         id = "overview"
//! slug: /start         slug = "/start"
//! tags: [a, b]         tags = ["a", "b"]
//! ---                  +++
//! ```
//!
//! The `---` block is read line by line (`key: value`), not as full YAML.

use anyhow::{Result, anyhow};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub id: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub tags: Vec<String>,
}

impl FrontMatter {
    /// Parse the front matter at the top of `content`.
    ///
    /// Content without front matter yields the default.
    pub fn parse(content: &str) -> Result<Self> {
        match detect_frontmatter(content) {
            Some((fm, true)) => {
                toml::from_str(fm).map_err(|e| anyhow!("invalid TOML front matter: {}", e))
            }
            Some((fm, false)) => Ok(parse_yaml_like(fm)),
            None => Ok(Self::default()),
        }
    }
}

/// Detect and extract front matter.
/// Returns `(frontmatter, is_toml)` if found.
fn detect_frontmatter(content: &str) -> Option<(&str, bool)> {
    let trimmed = content.trim_start_matches('\u{feff}').trim_start();

    for (fence, is_toml) in [("---", false), ("+++", true)] {
        if let Some(rest) = trimmed.strip_prefix(fence)
            && rest.starts_with(['\n', '\r'])
            && let Some(end) = rest.find(&format!("\n{fence}"))
        {
            return Some((rest[..end].trim(), is_toml));
        }
    }
    None
}

fn parse_yaml_like(content: &str) -> FrontMatter {
    let mut meta = FrontMatter::default();
    let mut in_tags = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // `tags:` followed by `- item` lines
        if in_tags && let Some(item) = trimmed.strip_prefix("- ") {
            push_tag(&mut meta.tags, item);
            continue;
        }
        in_tags = false;

        // Nested keys belong to some other mapping
        if line.starts_with([' ', '\t']) {
            continue;
        }

        let Some((key, value)) = trimmed.split_once(':') else {
            continue;
        };
        let value = strip_comment(value.trim());
        match key.trim() {
            "id" => meta.id = non_empty(value),
            "slug" => meta.slug = non_empty(value),
            "title" => meta.title = non_empty(value),
            "tags" if value.is_empty() => in_tags = true,
            "tags" => {
                let list = value
                    .strip_prefix('[')
                    .and_then(|v| v.strip_suffix(']'))
                    .unwrap_or(value);
                for item in list.split(',') {
                    push_tag(&mut meta.tags, item);
                }
            }
            _ => {}
        }
    }

    meta
}

fn push_tag(tags: &mut Vec<String>, raw: &str) {
    if let Some(tag) = non_empty(raw) {
        tags.push(tag);
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = unquote(strip_comment(value.trim()));
    (!value.is_empty()).then(|| value.to_string())
}

/// Drop a trailing ` # comment`. A quoted value ends at its closing quote.
fn strip_comment(value: &str) -> &str {
    if let Some(quote) = value.chars().next().filter(|&c| matches!(c, '"' | '\''))
        && let Some(end) = value[1..].find(quote)
    {
        return &value[..end + 2];
    }
    value
        .char_indices()
        .find(|&(i, c)| c == '#' && value[..i].ends_with([' ', '\t']))
        .map_or(value, |(i, _)| value[..i].trim_end())
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_like() {
        let fm = FrontMatter::parse(
            "---\nid: overview\nslug: \"/start\"\ntitle: 'Overview: BRC721'\ntags: [intro, spec]\n---\n# Body",
        )
        .unwrap();
        assert_eq!(fm.id.as_deref(), Some("overview"));
        assert_eq!(fm.slug.as_deref(), Some("/start"));
        assert_eq!(fm.title.as_deref(), Some("Overview: BRC721"));
        assert_eq!(fm.tags, vec!["intro", "spec"]);
    }

    #[test]
    fn test_yaml_tag_list() {
        let fm = FrontMatter::parse("---\ntags:\n  - release\n  - \"news\"\nslug: v1\n---\n").unwrap();
        assert_eq!(fm.tags, vec!["release", "news"]);
        assert_eq!(fm.slug.as_deref(), Some("v1"));
    }

    #[test]
    fn test_nested_keys_ignored() {
        let fm = FrontMatter::parse("---\nsidebar:\n  id: nope\nid: yes\n---").unwrap();
        assert_eq!(fm.id.as_deref(), Some("yes"));
    }

    #[test]
    fn test_yaml_inline_comments() {
        let fm = FrontMatter::parse(
            "---\nslug: /start # landing\nid: x # note\ntitle: \"C# tips\" # quoted\ntags: [a, b] # two\n---",
        )
        .unwrap();
        assert_eq!(fm.slug.as_deref(), Some("/start"));
        assert_eq!(fm.id.as_deref(), Some("x"));
        assert_eq!(fm.title.as_deref(), Some("C# tips"));
        assert_eq!(fm.tags, vec!["a", "b"]);

        let fm = FrontMatter::parse("---\nslug: /a#b\ntags:\n  - news # latest\n---").unwrap();
        assert_eq!(fm.slug.as_deref(), Some("/a#b"));
        assert_eq!(fm.tags, vec!["news"]);
    }

    #[test]
    fn test_toml() {
        let fm = FrontMatter::parse("+++\nid = \"spec\"\ntags = [\"a\"]\n+++\nbody").unwrap();
        assert_eq!(fm.id.as_deref(), Some("spec"));
        assert_eq!(fm.tags, vec!["a"]);
        assert!(FrontMatter::parse("+++\nid = \n+++\n").is_err());
    }

    #[test]
    fn test_no_frontmatter() {
        assert_eq!(FrontMatter::parse("# Title\n---\n").unwrap(), FrontMatter::default());
        assert_eq!(FrontMatter::parse("").unwrap(), FrontMatter::default());
    }
}
