//! `amr status` – show the persistent resolution cache.

use amr_core::config::AmrConfig;
use anyhow::Result;

pub fn run_status(cfg: &AmrConfig) -> Result<()> {
    let cache = super::open_cache(cfg)?;
    if cache.is_empty() {
        println!("Resolution cache is empty.");
        return Ok(());
    }
    println!("{:<64} {}", "ORIGINAL", "RESOLVED");
    let mut entries: Vec<_> = cache.iter().collect();
    entries.sort();
    for (original, resolved) in entries {
        let shown = if original == resolved { "(unchanged)" } else { resolved };
        println!("{:<64} {}", original, shown);
    }
    Ok(())
}
