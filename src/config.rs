use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

use crate::export::DEFAULT_SITE_URL;

pub const CONFIG_FILE_NAME: &str = "folio.toml";

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Site {
    pub base_url: String,
}

impl Default for Site {
    fn default() -> Self {
        Site { base_url: DEFAULT_SITE_URL.to_string() }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Paths {
    pub content_dir: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Paths { content_dir: PathBuf::from("content") }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Log {
    pub level: LogLevel,
    #[serde(default = "default_log_to_console")]
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

fn default_log_to_console() -> bool {
    true
}

impl Default for Log {
    fn default() -> Self {
        Log {
            level: LogLevel::Warn,
            log_to_console: true,
            location: None,
        }
    }
}

#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub site: Site,
    pub paths: Paths,
    pub log: Log,
}

fn parse_path(path: PathBuf) -> io::Result<PathBuf> {
    if !path.starts_with("${exe_dir}") {
        return Ok(path);
    }

    let cur_exe = env::current_exe()?;
    let exe_dir = cur_exe.parent().unwrap_or(Path::new("."));
    let rest = path.strip_prefix("${exe_dir}").unwrap_or(&path);
    Ok(exe_dir.join(rest))
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    cfg.paths.content_dir = parse_path(cfg.paths.content_dir)?;
    if let Some(location) = cfg.log.location.take() {
        cfg.log.location = Some(parse_path(location)?);
    }

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}

/// Looks for `folio.toml` in the working directory, then in the user config
/// directory. No file at all means the defaults.
pub fn find_config(explicit: Option<&Path>) -> io::Result<Config> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let candidates = [
        Some(PathBuf::from(CONFIG_FILE_NAME)),
        dirs::config_dir().map(|dir| dir.join("folio").join(CONFIG_FILE_NAME)),
    ];

    for candidate in candidates.into_iter().flatten() {
        if candidate.is_file() {
            return read_config(&candidate);
        }
    }

    Ok(Config::default())
}
