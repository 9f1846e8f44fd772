use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::probe::ProbeOptions;

/// Global configuration loaded from `~/.config/amr/config.toml`.
///
/// Redirect rules themselves are compiled-in constants; the config only
/// supplies where the consumer and the mirror live, and probe bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmrConfig {
    /// Consumer application origin; relative asset URLs resolve against it.
    pub origin: String,
    /// Mirror URL prefix the built-in rule table is rooted at.
    pub mirror_base: String,
    /// Existence probe connect timeout in seconds.
    pub probe_connect_timeout_secs: u64,
    /// Existence probe total timeout in seconds.
    pub probe_timeout_secs: u64,
    /// Optional override for the resolution cache file location.
    #[serde(default)]
    pub cache_path: Option<PathBuf>,
}

impl Default for AmrConfig {
    fn default() -> Self {
        Self {
            origin: "https://game.example".to_string(),
            mirror_base: "https://cdn.example/images".to_string(),
            probe_connect_timeout_secs: 5,
            probe_timeout_secs: 10,
            cache_path: None,
        }
    }
}

impl AmrConfig {
    /// Probe timeout bounds as configured.
    pub fn probe_options(&self) -> ProbeOptions {
        ProbeOptions {
            connect_timeout: Duration::from_secs(self.probe_connect_timeout_secs),
            timeout: Duration::from_secs(self.probe_timeout_secs),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("amr")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AmrConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = AmrConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: AmrConfig = toml::from_str(&data)?;
    Ok(cfg)
}
