//! `amr check <url>` – probe a URL and report whether it exists.

use amr_core::config::AmrConfig;
use amr_core::existence::ExistenceChecker;
use anyhow::Result;

pub fn run_check(cfg: &AmrConfig, url: &str) -> Result<()> {
    let mut checker = ExistenceChecker::with_curl(cfg.probe_options());
    if checker.exists(url) {
        println!("{url}: exists");
    } else {
        println!("{url}: missing or unreachable");
    }
    Ok(())
}
