use serde::Serialize;

pub mod content_file;
pub mod front_matter;
pub mod headings;
pub mod slug;

/// Metadata block found at the top of a post.
///
/// Only the keys below are recognized, anything else in the block is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub title: String,
    pub published_at: String,
    pub summary: String,
    pub tags: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub depth: usize,
    pub slug: String,
    pub text: String,
}
