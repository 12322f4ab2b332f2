use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::content::slug::slugify;
use crate::content::Heading;

const FENCE_MARKER: &str = "```";
const MAX_DEPTH: usize = 6;

lazy_static! {
    static ref HEADING_REGEX: Regex = Regex::new(r"^(?P<hashes>#{2,6})\s+(?P<body>.*)$").unwrap();
    static ref EXPLICIT_ID_REGEX: Regex = Regex::new(r"\s*\{#.*\}$").unwrap();
    static ref IMAGE_REGEX: Regex = Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap();
    static ref LINK_REGEX: Regex = Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap();
    static ref HTML_TAG_REGEX: Regex = Regex::new(r"<[^>]+>").unwrap();
    static ref MARKER_REGEX: Regex = Regex::new(r"[*_`~]").unwrap();
}

/// Collects the `##` to `######` headings of a post body in source order.
///
/// The single `#` title is rendered apart from the body and is never listed.
/// Lines inside fenced code blocks are skipped.
pub fn extract_headings(content: &str) -> Vec<Heading> {
    let mut headings = vec![];
    let mut inside_fence = false;

    for line in content.lines() {
        let line = line.trim();

        if line.starts_with(FENCE_MARKER) {
            inside_fence = !inside_fence;
            continue;
        }

        if inside_fence {
            continue;
        }

        let Some(caps) = HEADING_REGEX.captures(line) else {
            continue;
        };

        let depth = caps.name("hashes").map(|m| m.as_str().len()).unwrap_or(0);
        let body = caps.name("body").map(|m| m.as_str()).unwrap_or("");
        let text = clean_heading_text(body);

        // Headings made only of markup have nothing to link to
        if text.is_empty() {
            continue;
        }

        headings.push(Heading {
            depth,
            slug: slugify(&text),
            text,
        });
    }

    headings
}

fn clean_heading_text(body: &str) -> String {
    let text = EXPLICIT_ID_REGEX.replace(body, "");
    let text = IMAGE_REGEX.replace_all(&text, "$1");
    let text = LINK_REGEX.replace_all(&text, "$1");
    let text = HTML_TAG_REGEX.replace_all(&text, "");
    let text = MARKER_REGEX.replace_all(&text, "");
    text.trim().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub depth: usize,
    pub slug: String,
    pub text: String,
    pub indent: usize,
}

/// Groups headings for the "On this page" list, one indent step per level
/// below `##`, with `#####` and `######` sharing the deepest step.
pub fn table_of_contents(headings: &[Heading]) -> Vec<TocEntry> {
    headings.iter()
        .filter(|h| h.depth <= MAX_DEPTH)
        .map(|h| TocEntry {
            depth: h.depth,
            slug: h.slug.clone(),
            text: h.text.clone(),
            indent: indent_for(h.depth),
        })
        .collect()
}

fn indent_for(depth: usize) -> usize {
    match depth {
        3 => 1,
        4 => 2,
        5 | 6 => 3,
        _ => 0,
    }
}

/// Renders a heading with its self-link anchor. The id comes from the same
/// slugifier as the table of contents, so both always agree.
pub fn render_heading(level: usize, text: &str) -> String {
    let level = level.clamp(1, MAX_DEPTH);
    let slug = slugify(text);
    format!(
        r##"<h{level} id="{slug}"><a href="#{slug}" class="anchor"></a>{}</h{level}>"##,
        html_escape::encode_text(text)
    )
}
