use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

const DEFAULT_RECORD: &str = "settings.json";
const DEFAULT_GSETTINGS: &str = "gsettings";

/// Paths and tool names resolved once at startup; never mutated after that.
#[derive(Clone, Debug)]
pub struct Ctx {
    pub record_file: PathBuf,
    pub gsettings: String,
}

/// Optional `settings.toml` overrides.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    record: Option<PathBuf>,
    gsettings: Option<String>,
}

impl Ctx {
    /// Built-in defaults, overridden by the config file if one exists.
    pub fn new() -> Result<Self> {
        let config = match config_file() {
            Some(path) => load_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::from_config(config))
    }

    fn from_config(config: FileConfig) -> Self {
        Self {
            record_file: config.record.unwrap_or_else(|| PathBuf::from(DEFAULT_RECORD)),
            gsettings: config
                .gsettings
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_GSETTINGS.to_owned()),
        }
    }

    /// Use `file` instead of the configured record location.
    pub fn with_record(mut self, file: Option<PathBuf>) -> Self {
        if let Some(f) = file {
            self.record_file = f;
        }
        self
    }
}

/// `$XDG_CONFIG_HOME/oxidize/settings.toml`, falling back to `~/.config`.
fn config_file() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;

    Some(base.join("oxidize").join("settings.toml"))
}

fn load_config(path: &Path) -> Result<FileConfig> {
    match fs::read_to_string(path) {
        Ok(src) => parse_config(&src).with_context(|| format!("load {}", path.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
        Err(e) => Err(e).with_context(|| format!("read {}", path.display())),
    }
}

fn parse_config(src: &str) -> Result<FileConfig> {
    toml::from_str(src).context("parse settings.toml")
}
