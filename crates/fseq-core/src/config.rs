use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::sequence::FrameNaming;

/// Source directory used when neither flag nor config names one.
pub const DEFAULT_SOURCE_DIR: &str = "Frames";
/// Destination directory (relative to the working directory) used by default.
pub const DEFAULT_DEST_DIR: &str = "public/frames";

/// Global configuration loaded from `~/.config/fseq/config.toml`.
///
/// Every field is optional in the file; missing fields keep the built-in
/// defaults, which reproduce the fixed `Frames` -> `public/frames` layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FseqConfig {
    /// Directory holding the exported `ezgif-frame-*.jpg` files.
    pub source_dir: PathBuf,
    /// Directory receiving `frame_{i}_delay-…` files; joined onto the working directory.
    pub dest_dir: PathBuf,
    /// Source filter and output naming (optional `[naming]` section).
    pub naming: FrameNaming,
}

impl Default for FseqConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            dest_dir: PathBuf::from(DEFAULT_DEST_DIR),
            naming: FrameNaming::default(),
        }
    }
}

impl FseqConfig {
    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, source_dir: Option<PathBuf>, dest_dir: Option<PathBuf>) -> Self {
        if let Some(src) = source_dir {
            self.source_dir = src;
        }
        if let Some(dest) = dest_dir {
            self.dest_dir = dest;
        }
        self
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fseq")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load configuration from the XDG config dir. A missing file means defaults;
/// no file is written.
pub fn load() -> Result<FseqConfig> {
    let path = config_path()?;
    load_from_path(&path)
}

/// Load configuration from `path`, returning defaults if it does not exist.
pub fn load_from_path(path: &Path) -> Result<FseqConfig> {
    let data = match fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(FseqConfig::default());
        }
        Err(e) => return Err(e).with_context(|| format!("read config: {}", path.display())),
    };
    let cfg: FseqConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
