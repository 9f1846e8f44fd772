//! Resolution cache persistence: one JSON document under the XDG state dir.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// On-disk form of the resolution cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedResolutionCache {
    #[serde(default = "default_version")]
    pub version: u8,
    pub entries: HashMap<String, String>,
}

fn default_version() -> u8 {
    1
}

/// Default cache file: `~/.local/state/amr/resolution_cache.json`.
pub fn default_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("amr")?;
    Ok(xdg_dirs.get_state_home().join("resolution_cache.json"))
}

/// Write the full cache to `path` (creates the parent dir if needed).
pub(super) fn save_to_path(path: &Path, entries: &HashMap<String, String>) -> Result<()> {
    let snapshot = PersistedResolutionCache {
        version: 1,
        entries: entries.clone(),
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create dir: {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(&snapshot).context("serialize resolution cache")?;
    std::fs::write(path, json)
        .with_context(|| format!("write resolution cache: {}", path.display()))?;
    Ok(())
}

/// Load entries from `path`. A missing file yields None (caller starts with
/// an empty cache).
pub(super) fn load_from_path(path: &Path) -> Result<Option<HashMap<String, String>>> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e).with_context(|| format!("read resolution cache: {}", path.display()))
        }
    };
    let snapshot: PersistedResolutionCache = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse resolution cache: {}", path.display()))?;
    Ok(Some(snapshot.entries))
}
