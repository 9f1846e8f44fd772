//! CLI command handlers, one file per command.

mod check;
mod clear;
mod invalidate;
mod resolve;
mod status;

pub use check::run_check;
pub use clear::run_clear;
pub use invalidate::run_invalidate;
pub use resolve::run_resolve;
pub use status::run_status;

use amr_core::cache::ResolutionCache;
use amr_core::config::AmrConfig;
use anyhow::Result;

pub(crate) fn open_cache(cfg: &AmrConfig) -> Result<ResolutionCache> {
    match &cfg.cache_path {
        Some(path) => ResolutionCache::open_at(path),
        None => ResolutionCache::open_default(),
    }
}
