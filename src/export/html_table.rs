use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ROW_REGEX: Regex = Regex::new(r"(?s)<tr.*?</tr>").unwrap();
    static ref CELL_REGEX: Regex = Regex::new(r"(?s)<(?:th|td)[^>]*>(?P<cell>.*?)</(?:th|td)>").unwrap();
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]+>").unwrap();
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
];

/// Converts one `<table>...</table>` block into a pipe table, the first row
/// being the header. A table without any cells comes back untouched.
pub fn convert_html_table(html: &str) -> String {
    let rows: Vec<Vec<String>> = ROW_REGEX.find_iter(html)
        .map(|row| {
            CELL_REGEX.captures_iter(row.as_str())
                .filter_map(|caps| caps.name("cell").map(|m| clean_cell(m.as_str())))
                .collect::<Vec<String>>()
        })
        .filter(|cells| !cells.is_empty())
        .collect();

    let Some((header, body)) = rows.split_first() else {
        return html.to_string();
    };

    let separator = vec!["---"; header.len()];
    let mut lines = vec![to_pipe_row(header), to_pipe_row(&separator)];
    lines.extend(body.iter().map(|row| to_pipe_row(row)));

    lines.iter()
        .map(|line| line.trim())
        .collect::<Vec<&str>>()
        .join("\n")
}

fn to_pipe_row<S: AsRef<str>>(cells: &[S]) -> String {
    let cells: Vec<&str> = cells.iter().map(|c| c.as_ref()).collect();
    format!("|{}|", cells.join("|"))
}

fn clean_cell(cell: &str) -> String {
    let mut text = TAG_REGEX.replace_all(cell, "").to_string();
    for (entity, replacement) in ENTITIES {
        text = text.replace(entity, replacement);
    }
    WHITESPACE_REGEX.replace_all(&text, " ").trim().to_string()
}
