use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use serde::Serialize;

use folio::config::find_config;
use folio::content::headings::{table_of_contents, TocEntry};
use folio::logger::configure_logger;
use folio::post::BlogPost;
use folio::post_list::{sort_newest_first, PostList};
use folio::text_utils::format_date;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file. Defaults to folio.toml when present
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lists the posts of the content directory as JSON
    Posts {
        /// Include posts marked as hidden
        #[arg(short, long)]
        all: bool,

        /// Append how long ago each post was published
        #[arg(short, long)]
        relative: bool,
    },
    /// Prints the table of contents of one post as JSON
    Toc {
        /// Post file to read
        file: PathBuf,
    },
}

#[derive(Serialize)]
struct PostSummary<'a> {
    slug: &'a str,
    title: &'a str,
    date: String,
    summary: &'a str,
    tags: &'a str,
    headings: usize,
}

fn posts_cmd(content_dir: PathBuf, all: bool, relative: bool) -> anyhow::Result<()> {
    let post_list = PostList::new(&content_dir);
    let posts = if all {
        let mut posts = post_list.all_posts()?;
        sort_newest_first(&mut posts);
        posts
    } else {
        post_list.visible_posts()?
    };

    let today = Local::now().date_naive();
    let summaries: Vec<PostSummary> = posts.iter()
        .map(|post| PostSummary {
            slug: &post.slug,
            title: &post.metadata.title,
            date: format_date(&post.metadata.published_at, relative, today),
            summary: &post.metadata.summary,
            tags: &post.metadata.tags,
            headings: post.headings.len(),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}

fn toc_cmd(file: PathBuf) -> anyhow::Result<()> {
    let post = BlogPost::from_file(&file)?;
    let toc: Vec<TocEntry> = table_of_contents(&post.headings);
    println!("{}", serde_json::to_string_pretty(&toc)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = find_config(args.config.as_deref())?;
    configure_logger(&config.log).context("Error configuring logger")?;

    match args.command {
        Command::Posts { all, relative } => posts_cmd(config.paths.content_dir, all, relative),
        Command::Toc { file } => toc_cmd(file),
    }
}
