//! Session-scoped existence cache over a probe backend.
//!
//! A candidate URL is probed at most once per process; both positive and
//! negative outcomes (including transport failures) are remembered. Entries
//! are never evicted; keys are candidate URLs, bounded by what the consumer
//! session actually requests.

use std::collections::HashMap;

use crate::probe::{status_indicates_existence, CurlProber, ProbeOptions, UrlProber};

/// In-memory existence cache plus the probe backend that fills it.
pub struct ExistenceChecker {
    prober: Box<dyn UrlProber>,
    cache: HashMap<String, bool>,
}

impl ExistenceChecker {
    /// Checker over an arbitrary probe backend (tests use scripted probers).
    pub fn new(prober: Box<dyn UrlProber>) -> Self {
        Self {
            prober,
            cache: HashMap::new(),
        }
    }

    /// Checker over the curl backend with the given timeout bounds.
    pub fn with_curl(options: ProbeOptions) -> Self {
        Self::new(Box::new(CurlProber::new(options)))
    }

    /// True if `candidate` answered with a success-range status, consulting
    /// the cache first. A transport failure counts as "does not exist" and
    /// is cached like any other outcome.
    pub fn exists(&mut self, candidate: &str) -> bool {
        if let Some(&known) = self.cache.get(candidate) {
            return known;
        }
        let exists = match self.prober.probe_status(candidate) {
            Ok(code) => status_indicates_existence(code),
            Err(err) => {
                tracing::debug!("existence probe failed for {candidate}: {err:#}");
                false
            }
        };
        self.cache.insert(candidate.to_string(), exists);
        exists
    }

    /// Drop the cached verdict for `candidate` so the next check re-probes.
    /// Returns true if a verdict was cached.
    pub fn forget(&mut self, candidate: &str) -> bool {
        self.cache.remove(candidate).is_some()
    }

    /// Cached verdict for a candidate, if probed before.
    pub fn cached(&self, candidate: &str) -> Option<bool> {
        self.cache.get(candidate).copied()
    }

    /// Number of candidates probed so far this session.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
