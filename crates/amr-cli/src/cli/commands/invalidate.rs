//! `amr invalidate <url>` – drop a cached resolution.

use amr_core::resolve::UrlResolver;
use anyhow::Result;

pub fn run_invalidate(resolver: &mut UrlResolver, url: &str) -> Result<()> {
    if resolver.invalidate(url) {
        println!("Invalidated cached resolution for {url}");
    } else {
        println!("No cached resolution for {url}");
    }
    Ok(())
}
