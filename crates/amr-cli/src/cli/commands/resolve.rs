//! `amr resolve <url>…` – resolve asset URLs and print the outcome.

use amr_core::resolve::UrlResolver;
use anyhow::Result;

pub fn run_resolve(resolver: &mut UrlResolver, urls: &[String]) -> Result<()> {
    for url in urls {
        let resolved = resolver.resolve(url);
        if &resolved == url {
            println!("{url} (unchanged)");
        } else {
            println!("{url} -> {resolved}");
        }
    }
    Ok(())
}
