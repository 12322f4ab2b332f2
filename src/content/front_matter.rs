use lazy_static::lazy_static;
use regex::Regex;

use crate::content::Metadata;

const DELIMITER: &str = "---";
const BYTE_ORDER_MARK: char = '\u{feff}';

// Skips the delimiter line plus the newline in front of it.
const FRONT_MATTER_END_OFFSET: usize = 4;
const FRONT_MATTER_SEARCH_START: usize = 3;

pub struct ParsedContent {
    pub metadata: Metadata,
    pub content: String,
}

/// Splits a raw post into its metadata and its body.
///
/// The block has to open the document (leading blank lines are fine) and both
/// delimiters have to be a whole `---` line. Without such a block the metadata
/// is empty and the body is the trimmed input.
pub fn parse_front_matter(raw: &str) -> ParsedContent {
    lazy_static! {
        static ref FRONT_MATTER_REGEX: Regex = Regex::new(
            r"(?ms)\A\s*---[ \t\r]*$(?P<block>.*?)^---[ \t\r]*$"
        ).unwrap();
    }

    let raw = without_bom(raw);
    let Some(caps) = FRONT_MATTER_REGEX.captures(raw) else {
        return ParsedContent {
            metadata: Metadata::default(),
            content: raw.trim().to_string(),
        };
    };

    let block = caps.name("block").map(|m| m.as_str()).unwrap_or("");
    let whole = caps.get(0).map(|m| m.end()).unwrap_or(0);

    ParsedContent {
        metadata: parse_metadata_block(block),
        content: raw[whole..].trim().to_string(),
    }
}

fn parse_metadata_block(block: &str) -> Metadata {
    let mut metadata = Metadata::default();

    for line in block.trim().lines() {
        let (key, val) = extract_key_val(line);

        match key {
            "title" => metadata.title = val.to_string(),
            "publishedAt" => metadata.published_at = val.to_string(),
            "summary" => metadata.summary = val.to_string(),
            "tags" => metadata.tags = val.to_string(),
            "image" => metadata.image = Some(val.to_string()),
            "hidden" => metadata.hidden = val == "true",
            _ => {}
        }
    }

    metadata
}

/// Splits at the first `": "`. A line without one is all key and no value.
fn extract_key_val(line: &str) -> (&str, &str) {
    match line.split_once(": ") {
        Some((key, val)) => (key.trim(), strip_quotes(val.trim())),
        None => (line.trim(), ""),
    }
}

fn strip_quotes(val: &str) -> &str {
    let bytes = val.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &val[1..val.len() - 1];
        }
    }
    val
}

// Editors on Windows like to save posts with a byte order mark.
fn without_bom(raw: &str) -> &str {
    raw.strip_prefix(BYTE_ORDER_MARK).unwrap_or(raw)
}

/// Drops the front matter the way the export tool sees it: the input has to
/// start with `---` and the block ends at the next line starting with `---`.
/// Anything unexpected leaves the source untouched.
pub fn strip_front_matter(source: &str) -> &str {
    let source = without_bom(source);
    if !source.starts_with(DELIMITER) {
        return source;
    }

    let closing = format!("\n{}", DELIMITER);
    match source[FRONT_MATTER_SEARCH_START..].find(&closing) {
        Some(pos) => &source[FRONT_MATTER_SEARCH_START + pos + FRONT_MATTER_END_OFFSET..],
        None => source,
    }
}
