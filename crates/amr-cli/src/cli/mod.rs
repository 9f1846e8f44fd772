//! CLI for the AMR asset mirror redirector.

mod commands;

use amr_core::config;
use amr_core::resolve::UrlResolver;
use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{run_check, run_clear, run_invalidate, run_resolve, run_status};

/// Top-level CLI for the AMR asset mirror redirector.
#[derive(Debug, Parser)]
#[command(name = "amr")]
#[command(about = "AMR: existence-checked asset URL redirection", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve one or more asset URLs and print the outcome.
    Resolve {
        /// Asset URLs (absolute, or relative to the configured origin).
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Show the persistent resolution cache.
    Status,

    /// Drop the cached resolution for a URL, forcing re-resolution.
    Invalidate {
        /// Original asset URL.
        url: String,
    },

    /// Drop every cached resolution.
    Clear,

    /// Probe a URL directly and report whether it exists on its host.
    Check {
        /// Candidate URL to probe.
        url: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve { urls } => {
                let mut resolver = UrlResolver::from_config(&cfg)?;
                run_resolve(&mut resolver, &urls)
            }
            CliCommand::Status => run_status(&cfg),
            CliCommand::Invalidate { url } => {
                let mut resolver = UrlResolver::from_config(&cfg)?;
                run_invalidate(&mut resolver, &url)
            }
            CliCommand::Clear => run_clear(&cfg),
            CliCommand::Check { url } => run_check(&cfg, &url),
        }
    }
}

#[cfg(test)]
mod tests;
