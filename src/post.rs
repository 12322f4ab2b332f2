use std::fmt::{self, Display, Formatter};
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::content::content_file::ContentFile;
use crate::content::front_matter::parse_front_matter;
use crate::content::headings::extract_headings;
use crate::content::{Heading, Metadata};

#[derive(Debug, Clone, Serialize)]
pub struct BlogPost {
    pub metadata: Metadata,
    pub slug: String,
    pub content: String,
    pub headings: Vec<Heading>,
}

impl Display for BlogPost {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "slug={}, date={}, hidden={}\ntitle={}\nheadings={}",
               self.slug,
               self.metadata.published_at,
               self.metadata.hidden,
               self.metadata.title,
               self.headings.len(),
        )
    }
}

impl BlogPost {
    pub fn from_file(file_path: &Path) -> io::Result<BlogPost> {
        let content_file = ContentFile::from_file(file_path)?;
        Ok(Self::from_content_file(content_file))
    }

    pub fn from_content_file(content_file: ContentFile) -> BlogPost {
        Self::from_string(content_file.slug, &content_file.raw_content)
    }

    /// Builds the render data of one post. Headings are recomputed from the
    /// body every time, nothing is cached between reads.
    pub fn from_string(slug: String, raw_content: &str) -> BlogPost {
        let parsed = parse_front_matter(raw_content);
        let headings = extract_headings(&parsed.content);

        BlogPost {
            metadata: parsed.metadata,
            slug,
            content: parsed.content,
            headings,
        }
    }
}
