use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::locator::DEFAULT_EXTENSION;

/// Global configuration loaded from `~/.config/qian/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QianConfig {
    /// Directory holding the slip images (relative paths resolve against the working directory).
    pub asset_root: PathBuf,
    /// Image extension without the dot.
    pub extension: String,
    /// Prefix prepended to asset paths when printing servable URLs.
    pub url_prefix: String,
}

impl Default for QianConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("static").join("qian"),
            extension: DEFAULT_EXTENSION.to_string(),
            url_prefix: "/".to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("qian")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<QianConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Same as [`load_or_init`] with an explicit file location.
pub fn load_or_init_at(path: &Path) -> Result<QianConfig> {
    if !path.exists() {
        let default_cfg = QianConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: QianConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
