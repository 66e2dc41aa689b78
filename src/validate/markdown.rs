//! Link extraction from markdown content.

use pulldown_cmark::{Event, Options, Parser, Tag};

/// A link found in a markdown file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLink {
    /// Link destination as written.
    pub dest: String,
    /// 1-based line of the link.
    pub line: usize,
}

/// Extract link and image destinations from Markdown content.
///
/// Front matter blocks and code are skipped by the parser.
pub fn extract_links(content: &str) -> Vec<ScannedLink> {
    let options = Options::ENABLE_YAML_STYLE_METADATA_BLOCKS
        | Options::ENABLE_PLUSES_DELIMITED_METADATA_BLOCKS
        | Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(content, options).into_offset_iter();

    let mut links = Vec::new();
    let mut line = 1;
    let mut counted = 0;

    for (event, range) in parser {
        let dest = match event {
            Event::Start(Tag::Link { dest_url, .. } | Tag::Image { dest_url, .. }) => dest_url,
            _ => continue,
        };
        if dest.is_empty() {
            continue;
        }

        // Offsets only grow, so count newlines incrementally
        if range.start > counted {
            line += content[counted..range.start].matches('\n').count();
            counted = range.start;
        }
        links.push(ScannedLink {
            dest: dest.to_string(),
            line,
        });
    }

    links
}
