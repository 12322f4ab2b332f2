use std::cmp::Ordering;
use std::{fs, io};
use std::path::{Path, PathBuf};

use spdlog::{debug, trace};

use crate::content::content_file::ContentFile;
use crate::post::BlogPost;
use crate::text_utils::parse_published_date;

pub struct PostList {
    pub root_dir: PathBuf,
}

impl PostList {
    pub fn new(root_dir: &Path) -> Self {
        PostList { root_dir: root_dir.to_path_buf() }
    }

    /// Lists the post files of the content directory, sorted by file name.
    pub fn retrieve_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut posts = vec![];
        let entries = match fs::read_dir(self.root_dir.as_path()) {
            Ok(entries) => entries,
            Err(e) => return Err(io::Error::new(
                e.kind(),
                format!("Error listing content directory {}: {}", self.root_dir.display(), e))),
        };

        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let file_name = entry.file_name();
            match file_name.to_str() {
                Some(name) if ContentFile::is_content_file(name) => posts.push(entry.path()),
                _ => trace!("skipping {}", entry.path().display()),
            }
        }

        posts.sort();
        Ok(posts)
    }

    pub fn all_posts(&self) -> io::Result<Vec<BlogPost>> {
        let mut posts = vec![];
        for file in self.retrieve_files()? {
            posts.push(BlogPost::from_file(&file)?);
        }
        Ok(posts)
    }

    /// The posts of the blog index: no `hidden` ones, newest first.
    pub fn visible_posts(&self) -> io::Result<Vec<BlogPost>> {
        let mut posts: Vec<BlogPost> = self.all_posts()?
            .into_iter()
            .filter(|post| {
                if post.metadata.hidden {
                    debug!("hiding post {}", post.slug);
                }
                !post.metadata.hidden
            })
            .collect();
        sort_newest_first(&mut posts);
        Ok(posts)
    }
}

/// Orders posts by `publishedAt`, newest first. Posts without a readable date
/// go last, and the slug breaks ties.
pub fn sort_newest_first(posts: &mut [BlogPost]) {
    posts.sort_by(|a, b| {
        let a_date = parse_published_date(&a.metadata.published_at).ok();
        let b_date = parse_published_date(&b.metadata.published_at).ok();
        let by_date = match (a_date, b_date) {
            (Some(a_date), Some(b_date)) => b_date.cmp(&a_date),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_date.then_with(|| a.slug.cmp(&b.slug))
    });
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use crate::test_data::{HIDDEN_POST_MDX, POST_DATA_MDX};

    use super::*;

    fn content_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("how-long-top-podcasts-run.mdx"), POST_DATA_MDX).unwrap();
        fs::write(dir.path().join("draft.mdx"), HIDDEN_POST_MDX).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a post").unwrap();
        fs::create_dir(dir.path().join("nested.mdx")).unwrap();
        dir
    }

    #[test]
    fn test_retrieve_files() -> io::Result<()> {
        let dir = content_dir();
        let post_list = PostList::new(dir.path());
        let files = post_list.retrieve_files()?;
        let names: Vec<&str> = files.iter()
            .filter_map(|f| f.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, vec!["draft.mdx", "how-long-top-podcasts-run.mdx"]);
        Ok(())
    }

    #[test]
    fn test_visible_posts() -> io::Result<()> {
        let dir = content_dir();
        let post_list = PostList::new(dir.path());

        let all = post_list.all_posts()?;
        assert_eq!(all.len(), 2);

        let visible = post_list.visible_posts()?;
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].slug, "how-long-top-podcasts-run");
        Ok(())
    }

    fn dated_post(slug: &str, date: &str) -> String {
        format!("---\ntitle: {}\npublishedAt: {}\n---\nbody", slug, date)
    }

    #[test]
    fn test_visible_posts_newest_first() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("a-old.mdx"), dated_post("a-old", "2023-05-01"))?;
        fs::write(dir.path().join("b-undated.mdx"), dated_post("b-undated", "soon"))?;
        fs::write(dir.path().join("c-new.mdx"), dated_post("c-new", "2025-02-10T09:00:00"))?;
        fs::write(dir.path().join("d-mid.mdx"), dated_post("d-mid", "2024-07-15"))?;
        fs::write(dir.path().join("e-mid.mdx"), dated_post("e-mid", "2024-07-15"))?;
        fs::write(dir.path().join("draft.mdx"), HIDDEN_POST_MDX)?;

        let post_list = PostList::new(dir.path());
        let slugs: Vec<String> = post_list.visible_posts()?
            .into_iter()
            .map(|post| post.slug)
            .collect();
        assert_eq!(slugs, vec!["c-new", "d-mid", "e-mid", "a-old", "b-undated"]);

        let mut all = post_list.all_posts()?;
        assert_eq!(all[0].slug, "a-old");
        sort_newest_first(&mut all);
        assert_eq!(all[0].slug, "c-new");
        assert_eq!(all.last().map(|p| p.slug.as_str()), Some("b-undated"));
        Ok(())
    }

    #[test]
    fn test_missing_dir() {
        let post_list = PostList::new(Path::new("no/such/content"));
        assert!(post_list.retrieve_files().is_err());
    }
}
