use std::{fs, io};
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use spdlog::{debug, trace};

use crate::content::front_matter::strip_front_matter;
use crate::data::episode_length::EpisodeGroup;
use crate::export::cleanup::clean_html_artifacts;
use crate::export::episode_table::generate_episode_table;
use crate::export::html_table::convert_html_table;

pub mod cleanup;
pub mod episode_table;
pub mod html_table;

pub const DEFAULT_SITE_URL: &str = "https://www.adithyan.io";

/// Chart components with no plain text form, dropped from the export.
pub const REMOVED_CHART_TAGS: &[&str] = &[
    "<EpisodeLengthHistogram />",
    "<DailyEpisodeLengthChart />",
    "<NearDailyEpisodeLengthChart />",
    "<WeeklyEpisodeLengthChart />",
    "<MonthlyEpisodeLengthChart />",
    "<OtherEpisodeLengthChart />",
];

lazy_static! {
    static ref EPISODE_TABLE_TAG_REGEX: Regex = Regex::new(r#"<EpisodeLengthTable group="(?P<group>.*?)" />"#).unwrap();
    static ref HTML_TABLE_REGEX: Regex = Regex::new(r"(?s)<table.*?</table>").unwrap();
}

/// Plain markdown version of a post, for forums that only understand pipe
/// tables. Links to the site are made absolute with `DEFAULT_SITE_URL`.
pub fn build_export_markdown(raw: &str, data: &[EpisodeGroup], order: &[&str]) -> String {
    build_export_markdown_for_site(raw, data, order, DEFAULT_SITE_URL)
}

/// Each step expects the previous ones to have run: tables are converted
/// before cleanup strips the leftover tags.
pub fn build_export_markdown_for_site(raw: &str, data: &[EpisodeGroup], order: &[&str], site_url: &str) -> String {
    let content = strip_front_matter(raw);
    let content = remove_chart_tags(content);
    let content = substitute_episode_tables(&content, data, order);
    let content = convert_html_tables(&content);
    let content = clean_html_artifacts(&content, site_url);

    content.trim().to_string()
}

fn remove_chart_tags(content: &str) -> String {
    let mut content = content.to_string();
    for tag in REMOVED_CHART_TAGS {
        content = content.replace(tag, "");
    }
    content
}

fn substitute_episode_tables(content: &str, data: &[EpisodeGroup], order: &[&str]) -> String {
    EPISODE_TABLE_TAG_REGEX.replace_all(content, |caps: &Captures| {
        let group = &caps["group"];
        match generate_episode_table(group, data, order) {
            Some(table) => format!("\n{}\n", table),
            None => {
                debug!("dropping episode table for unknown group '{}'", group);
                String::new()
            }
        }
    }).to_string()
}

fn convert_html_tables(content: &str) -> String {
    HTML_TABLE_REGEX.replace_all(content, |caps: &Captures| {
        let html = &caps[0];
        let converted = convert_html_table(html);
        if converted == html {
            trace!("leaving a table without rows untouched");
        }
        converted
    }).to_string()
}

/// Writes the export with a single trailing newline, creating missing parent
/// directories. Returns the absolute path written to.
pub fn write_export(output: &Path, markdown: &str) -> io::Result<PathBuf> {
    let output = std::path::absolute(output)?;
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut buf = markdown.trim_end_matches('\n').to_string();
    buf.push('\n');

    match fs::write(&output, buf) {
        Ok(()) => Ok(output),
        Err(e) => Err(io::Error::new(e.kind(), format!("Error writing export {}: {}", output.display(), e))),
    }
}

#[cfg(test)]
mod tests {
    use crate::data::episode_length::{EPISODE_BUCKET_ORDER, EPISODE_LENGTH_DATA};
    use crate::test_data::POST_DATA_MDX;

    use super::*;

    fn export(raw: &str) -> String {
        build_export_markdown(raw, EPISODE_LENGTH_DATA, EPISODE_BUCKET_ORDER)
    }

    #[test]
    fn test_full_post() {
        assert_eq!(export(POST_DATA_MDX), r##"Most shows land between forty and sixty minutes.

## The overall picture

|Episode length|Shows|Share|
|---|---|---|
|<10 minutes|5|0.5%|
|10–20 minutes|38|3.8%|
|20–40 minutes|232|23.2%|
|40–60 minutes|330|33.0%|
|60–90 minutes|287|28.7%|
|90+ minutes|108|10.8%|

### Daily shows

```bash
# count episodes per show
## not a heading either
```

### Weekly shows

|Cadence|Median length|
|---|---|
|Daily|38 min|
|Weekly|52 min|

## Methodology

See [the about page](https://www.adithyan.io/about) or [the data](//cdn.example.com/data.csv).

---

That's the gist."##);
    }

    #[test]
    fn test_chart_tags_are_removed() {
        let out = export("Before <EpisodeLengthHistogram /> after\n\n<OtherEpisodeLengthChart />");
        assert_eq!(out, "Before  after");
        assert!(!out.contains('<'));
    }

    #[test]
    fn test_unknown_group_is_dropped() {
        assert_eq!(export("A\n\n<EpisodeLengthTable group=\"yearly\" />\n\nB"), "A\n\nB");
    }

    #[test]
    fn test_zero_total_group() {
        let groups = [EpisodeGroup { name: "empty", counts: &[] }];
        let out = build_export_markdown("<EpisodeLengthTable group=\"empty\" />", &groups, EPISODE_BUCKET_ORDER);
        assert!(out.starts_with("|Episode length|Shows|Share|"));
        assert_eq!(out.matches("0.0%").count(), EPISODE_BUCKET_ORDER.len());
    }

    #[test]
    fn test_tables_are_converted_in_order() {
        let raw = "<table><tr><td>first</td></tr></table>\ntext\n<table><tr><td>second</td></tr></table>";
        assert_eq!(export(raw), "|first|\n|---|\ntext\n|second|\n|---|");
    }

    #[test]
    fn test_table_without_rows_is_kept() {
        assert_eq!(export("<table></table>"), "<table></table>");
    }

    #[test]
    fn test_unclosed_front_matter_is_kept() {
        assert_eq!(export("---\ntitle: x\nbody"), "---\ntitle: x\nbody");
    }

    #[test]
    fn test_custom_site_url() {
        let out = build_export_markdown_for_site("[Post](/blog/x)", EPISODE_LENGTH_DATA, EPISODE_BUCKET_ORDER, "https://example.org");
        assert_eq!(out, "[Post](https://example.org/blog/x)");
    }

    #[test]
    fn test_write_export() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let output = dir.path().join("reddit/nested/post.md");

        let written = write_export(&output, "# Export\n\n\n")?;
        assert!(written.is_absolute());
        assert_eq!(fs::read_to_string(&written)?, "# Export\n");

        write_export(&output, "no newline")?;
        assert_eq!(fs::read_to_string(&output)?, "no newline\n");
        Ok(())
    }
}
