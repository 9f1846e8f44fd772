//! Blocking HTTP existence probing.
//!
//! Uses the curl crate (libcurl) to issue a GET against a candidate URL and
//! report the final response status. Runs in the current thread; call from
//! `spawn_blocking` if used from async code.

mod status;

pub use status::status_indicates_existence;

use anyhow::{Context, Result};
use std::time::Duration;

/// Timeout bounds for a single probe. Probes block the caller, so both
/// bounds must stay small.
#[derive(Debug, Clone, Copy)]
pub struct ProbeOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Probe backend. The existence layer (and tests) depend on this trait
/// rather than on curl directly.
pub trait UrlProber {
    /// Issue the probe and return the final HTTP status code.
    fn probe_status(&self, url: &str) -> Result<u32>;
}

/// Probe backend over a curl Easy handle. Follows redirects and discards
/// the response body.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlProber {
    options: ProbeOptions,
}

impl CurlProber {
    pub fn new(options: ProbeOptions) -> Self {
        Self { options }
    }
}

impl UrlProber for CurlProber {
    fn probe_status(&self, url: &str) -> Result<u32> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url).context("invalid URL")?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.connect_timeout(self.options.connect_timeout)?;
        easy.timeout(self.options.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| Ok(data.len()))?;
            transfer.perform().context("probe request failed")?;
        }

        easy.response_code().context("no response code")
    }
}
