//! Configuration loading and parsing.
//!
//! Parses `parindent.toml` (or an override path provided by the binary)
//! extracting `[newline] auto_indent = <bool>` with default `true` when
//! absent. The switch is consumed by the fallback insert-newline command:
//! when enabled, a fresh line copies the leading whitespace of the line the
//! caret was on.
//!
//! Breadth-first: only the newline section is implemented. Unknown fields are
//! ignored (TOML deserialization tolerance) to allow forward evolution
//! without immediate warnings; a missing or unparseable file falls back to
//! defaults rather than failing startup.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone)]
pub struct NewlineConfig {
    #[serde(default = "NewlineConfig::default_auto_indent")]
    pub auto_indent: bool,
}

impl Default for NewlineConfig {
    fn default() -> Self {
        Self {
            auto_indent: Self::default_auto_indent(),
        }
    }
}

impl NewlineConfig {
    const fn default_auto_indent() -> bool {
        true
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub newline: NewlineConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub file: ConfigFile,    // parsed (or default) data
}

impl Config {
    /// Whether the fallback newline command copies the current line's leading
    /// whitespace onto the fresh line.
    pub fn auto_indent(&self) -> bool {
        self.file.newline.auto_indent
    }
}

/// Best-effort config path following platform conventions (XDG / AppData
/// Roaming): prefer a local working-directory `parindent.toml` before falling
/// back to the platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from("parindent.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("parindent").join("parindent.toml");
    }
    // Final fallback relative filename.
    PathBuf::from("parindent.toml")
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    if let Ok(content) = fs::read_to_string(&path) {
        match toml::from_str::<ConfigFile>(&content) {
            Ok(file) => {
                info!(target: "config", path = %path.display(), auto_indent = file.newline.auto_indent, "config_loaded");
                Ok(Config {
                    raw: Some(content),
                    file,
                })
            }
            Err(_e) => {
                // On parse error fall back to defaults (breadth-first resilience).
                Ok(Config::default())
            }
        }
    } else {
        Ok(Config::default())
    }
}
