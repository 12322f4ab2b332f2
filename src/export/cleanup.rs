use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref HR_REGEX: Regex = Regex::new(r"<hr[^>]*>").unwrap();
    // Any tag whose name is or ends in `div`, e.g. `<div>` or `<motion.div>`
    static ref DIV_REGEX: Regex = Regex::new(r"</?[^<>\s]*div[^>]*>").unwrap();
    static ref CLASS_ATTR_REGEX: Regex = Regex::new(r#" class(?:Name)?="[^"]*""#).unwrap();
    static ref BR_REGEX: Regex = Regex::new(r"<br\s*/?>").unwrap();
    static ref ROOT_LINK_REGEX: Regex = Regex::new(r"\]\(/(?P<next>[^/]|$)").unwrap();
    static ref INDENTED_PIPE_REGEX: Regex = Regex::new(r"(?m)^ +\|").unwrap();
    static ref BLANK_RUN_REGEX: Regex = Regex::new(r"\n{3,}").unwrap();
}

/// Removes what is left of the HTML once tables are converted and points
/// root relative links at `site_url`.
pub fn clean_html_artifacts(content: &str, site_url: &str) -> String {
    let site_url = site_url.trim_end_matches('/');

    let text = HR_REGEX.replace_all(content, "\n---\n");
    let text = DIV_REGEX.replace_all(&text, "");
    let text = CLASS_ATTR_REGEX.replace_all(&text, "");
    let text = BR_REGEX.replace_all(&text, "\n");
    let text = ROOT_LINK_REGEX.replace_all(&text, |caps: &Captures| {
        format!("]({}/{}", site_url, &caps["next"])
    });
    let text = INDENTED_PIPE_REGEX.replace_all(&text, "|");
    let text = BLANK_RUN_REGEX.replace_all(&text, "\n\n");

    text.trim().to_string()
}
