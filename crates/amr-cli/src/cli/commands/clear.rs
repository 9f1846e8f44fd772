//! `amr clear` – drop every cached resolution.

use amr_core::config::AmrConfig;
use anyhow::Result;

pub fn run_clear(cfg: &AmrConfig) -> Result<()> {
    let mut cache = super::open_cache(cfg)?;
    let count = cache.len();
    cache.clear();
    println!("Cleared {count} cached resolutions.");
    Ok(())
}
