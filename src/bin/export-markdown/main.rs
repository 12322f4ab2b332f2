use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::{env, fs};
use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use spdlog::info;

use folio::config::find_config;
use folio::data::episode_length::{EPISODE_BUCKET_ORDER, EPISODE_LENGTH_DATA};
use folio::export::{build_export_markdown_for_site, write_export};
use folio::logger::configure_logger;

/// Exports an MDX post as plain markdown with pipe tables
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Post to export
    input: PathBuf,

    /// File the markdown is written to. Missing directories are created
    output: PathBuf,

    /// Configuration file. Defaults to folio.toml when present
    #[arg(short, long)]
    config: Option<PathBuf>,
}

const USAGE_EXIT_CODE: u8 = 1;

/// Help and version requests exit through clap, any other parse error is
/// reported and turned into the usage exit code.
fn parse_args<I, T>(argv: I) -> Result<Args, u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(argv).map_err(|e| {
        if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
            e.exit();
        }
        // Clap's message already ends with the usage line
        eprint!("{}", e.render());
        USAGE_EXIT_CODE
    })
}

fn confirmation(output: &Path) -> String {
    format!("Markdown exported to {}", output.display())
}

fn run(args: Args) -> anyhow::Result<PathBuf> {
    let config = find_config(args.config.as_deref())?;
    configure_logger(&config.log).context("Error configuring logger")?;

    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("Error reading {}", args.input.display()))?;

    info!("exporting {}", args.input.display());
    let markdown = build_export_markdown_for_site(
        &source,
        EPISODE_LENGTH_DATA,
        EPISODE_BUCKET_ORDER,
        &config.site.base_url,
    );

    let output = write_export(&args.output, &markdown)?;
    Ok(output)
}

fn main() -> anyhow::Result<ExitCode> {
    let args = match parse_args(env::args_os()) {
        Ok(args) => args,
        Err(code) => return Ok(ExitCode::from(code)),
    };

    let output = run(args)?;
    println!("{}", confirmation(&output));
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_arguments() {
        assert_eq!(parse_args(["export-markdown"]).err(), Some(USAGE_EXIT_CODE));
        assert_eq!(parse_args(["export-markdown", "post.mdx"]).err(), Some(USAGE_EXIT_CODE));
        assert_eq!(parse_args(["export-markdown", "a", "b", "c"]).err(), Some(USAGE_EXIT_CODE));
    }

    #[test]
    fn test_parse_args() {
        let args = parse_args(["export-markdown", "post.mdx", "out/post.md", "--config", "site.toml"]).unwrap();
        assert_eq!(args.input, PathBuf::from("post.mdx"));
        assert_eq!(args.output, PathBuf::from("out/post.md"));
        assert_eq!(args.config, Some(PathBuf::from("site.toml")));
    }

    #[test]
    fn test_run_writes_export() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("post.mdx");
        let config = dir.path().join("folio.toml");
        fs::write(&input, "---\ntitle: x\n---\nRead [more](/blog/y).<EpisodeLengthHistogram />")?;
        fs::write(&config, "[site]\nbase_url = \"https://example.org\"\n\n[log]\nlevel = \"Warn\"\n")?;

        let args = parse_args([
            "export-markdown".into(),
            input.clone().into_os_string(),
            dir.path().join("out/post.md").into_os_string(),
            "--config".into(),
            config.into_os_string(),
        ]).unwrap();

        let output = run(args)?;
        assert!(output.is_absolute());
        assert_eq!(fs::read_to_string(&output)?, "Read [more](https://example.org/blog/y).\n");
        assert_eq!(confirmation(&output), format!("Markdown exported to {}", output.display()));
        Ok(())
    }
}
