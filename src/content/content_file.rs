use std::{fs, io};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct ContentFile {
    pub slug: String,
    pub file_path: PathBuf,
    pub raw_content: String,
}

impl ContentFile {
    pub fn from_file(file_path: &Path) -> io::Result<ContentFile> {
        let slug = match Self::slug_from_path(file_path) {
            None => return Err(io::Error::new(
                ErrorKind::InvalidInput,
                format!("Could not derive a slug from the file name {}", file_path.display()))),
            Some(slug) => slug,
        };

        let raw_content = match fs::read_to_string(file_path) {
            Ok(content) => content,
            Err(e) => return Err(io::Error::new(
                e.kind(),
                format!("Error reading content file {}: {}", file_path.display(), e))),
        };

        Ok(ContentFile {
            slug,
            file_path: file_path.to_path_buf(),
            raw_content,
        })
    }

    /// The post slug is the file name without its extension.
    pub fn slug_from_path(file_path: &Path) -> Option<String> {
        let stem = file_path.file_stem()?.to_str()?;
        if stem.is_empty() {
            return None;
        }
        Some(stem.to_string())
    }

    pub fn is_content_file(file_name: &str) -> bool {
        file_name.ends_with(".mdx")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_from_path() {
        let slug = ContentFile::slug_from_path(Path::new("content/how-long-top-podcasts-run.mdx"));
        assert_eq!(slug, Some("how-long-top-podcasts-run".to_string()));
        assert_eq!(ContentFile::slug_from_path(Path::new("content/")), Some("content".to_string()));
        assert_eq!(ContentFile::slug_from_path(Path::new("")), None);
    }

    #[test]
    fn test_is_content_file() {
        assert!(ContentFile::is_content_file("post.mdx"));
        assert!(!ContentFile::is_content_file("post.md"));
        assert!(!ContentFile::is_content_file("mdx"));
    }

    #[test]
    fn test_missing_file() {
        let err = ContentFile::from_file(Path::new("does/not/exist.mdx")).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("does/not/exist.mdx"));
    }
}
