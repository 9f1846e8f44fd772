//! Persistent resolution cache: normalized original URL → resolved URL.
//!
//! Loaded once at open; every mutation rewrites the full JSON document
//! before returning, so a decision observed in this process is durable.
//! Persistence failures are non-fatal: the in-memory result stands and only
//! future-session cache warmth is lost.

mod persist;

pub use persist::PersistedResolutionCache;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;

/// Original→resolved URL map with an optional backing file.
#[derive(Debug)]
pub struct ResolutionCache {
    entries: HashMap<String, String>,
    path: Option<PathBuf>,
}

impl ResolutionCache {
    /// Cache with no backing file, for tests and ephemeral resolvers.
    pub fn in_memory() -> Self {
        Self {
            entries: HashMap::new(),
            path: None,
        }
    }

    /// Open the cache at its default XDG state path.
    pub fn open_default() -> Result<Self> {
        Self::open_at(&persist::default_path()?)
    }

    /// Open a cache backed by `path`, loading prior entries if the file
    /// exists. A missing file is a fresh cache, not an error.
    pub fn open_at(path: &Path) -> Result<Self> {
        let entries = persist::load_from_path(path)?.unwrap_or_default();
        Ok(Self {
            entries,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn get(&self, url: &str) -> Option<&str> {
        self.entries.get(url).map(String::as_str)
    }

    /// Record a resolution outcome and persist the full cache.
    pub fn record(&mut self, url: &str, resolved: &str) {
        self.entries
            .insert(url.to_string(), resolved.to_string());
        self.persist();
    }

    /// Drop the entry for `url`, forcing re-resolution on the next lookup.
    /// Returns true if an entry existed.
    pub fn invalidate(&mut self, url: &str) -> bool {
        let removed = self.entries.remove(url).is_some();
        if removed {
            self.persist();
        }
        removed
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries as (original, resolved), unordered.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn persist(&self) {
        let Some(path) = &self.path else { return };
        if let Err(err) = persist::save_to_path(path, &self.entries) {
            tracing::warn!(
                "failed to persist resolution cache to {}: {err:#}",
                path.display()
            );
        }
    }
}
