//! URL resolution: the engine's public entry point.
//!
//! Walks the rule table, verifies candidate existence on the mirror, and
//! commits every non-excluded decision to the persistent resolution cache.
//! `resolve` is total: the worst case returns its input unchanged.

mod filename;
mod normalize;

pub use filename::strip_variant_suffix;
pub use normalize::{is_data_url, normalize};

use anyhow::{Context, Result};
use url::Url;

use crate::cache::ResolutionCache;
use crate::config::AmrConfig;
use crate::existence::ExistenceChecker;
use crate::rules::{default_rule_table, RuleTable};

/// Orchestrates rule matching, existence verification, and both caches.
///
/// Owns all of its state; multiple independent resolvers can coexist (tests
/// rely on this). Takes `&mut self` throughout: callers on multiple threads
/// must synchronize externally, which also serializes invalidation against
/// in-flight resolutions of the same URL.
pub struct UrlResolver {
    origin: Url,
    rules: RuleTable,
    existence: ExistenceChecker,
    cache: ResolutionCache,
}

impl UrlResolver {
    /// Resolver over explicit parts. `origin` is the consumer application
    /// origin that relative asset URLs resolve against.
    pub fn new(
        origin: &str,
        rules: RuleTable,
        existence: ExistenceChecker,
        cache: ResolutionCache,
    ) -> Result<Self> {
        let origin = Url::parse(origin).with_context(|| format!("parse origin: {origin}"))?;
        Ok(Self {
            origin,
            rules,
            existence,
            cache,
        })
    }

    /// Resolver wired from config: built-in rule table, curl probe backend,
    /// resolution cache at its default (or configured) path.
    pub fn from_config(cfg: &AmrConfig) -> Result<Self> {
        let rules = default_rule_table(&cfg.mirror_base)?;
        let existence = ExistenceChecker::with_curl(cfg.probe_options());
        let cache = match &cfg.cache_path {
            Some(path) => ResolutionCache::open_at(path)?,
            None => ResolutionCache::open_default()?,
        };
        let resolver = Self::new(&cfg.origin, rules, existence, cache)?;
        tracing::info!(
            "asset redirector ready: {} rules, {} cached resolutions",
            resolver.rules.len(),
            resolver.cache.len()
        );
        Ok(resolver)
    }

    /// Maps an original asset URL to the URL the request should use.
    ///
    /// Data URLs and URLs that cannot be parsed come back unchanged and
    /// uncached. Excluded URLs come back normalized and uncached. Everything
    /// else gets a durable cache entry before this returns.
    pub fn resolve(&mut self, original: &str) -> String {
        if is_data_url(original) {
            return original.to_string();
        }
        let normalized = match normalize(original, &self.origin) {
            Ok(normalized) => normalized,
            Err(err) => {
                tracing::debug!("cannot normalize {original}: {err:#}");
                return original.to_string();
            }
        };
        if let Some(hit) = self.cache.get(&normalized) {
            tracing::trace!("cache hit: {normalized} -> {hit}");
            return hit.to_string();
        }
        if self.rules.is_excluded(&normalized) {
            return normalized;
        }
        let resolved = self.resolve_uncached(&normalized);
        self.cache.record(&normalized, &resolved);
        resolved
    }

    /// Forget the cached decision for `url` (and the existence verdict for
    /// its candidate) so the next resolve performs a fresh rule walk and
    /// probe. Called when a request made with a previously resolved URL
    /// failed at the transport level. Returns true if a decision was cached.
    pub fn invalidate(&mut self, url: &str) -> bool {
        if is_data_url(url) {
            return false;
        }
        let key = match normalize(url, &self.origin) {
            Ok(normalized) => normalized,
            Err(_) => url.to_string(),
        };
        if let Some(candidate) = self.candidate_for(&key) {
            self.existence.forget(&candidate);
        }
        self.cache.invalidate(&key)
    }

    /// The persistent resolution cache (for inspection).
    pub fn cache(&self) -> &ResolutionCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut ResolutionCache {
        &mut self.cache
    }

    /// Rule walk plus existence gate for a URL with no cached decision.
    fn resolve_uncached(&mut self, normalized: &str) -> String {
        // A rule match with no usable filename still claims the URL; it just
        // produces no candidate, so the URL stays as-is.
        let Some(candidate) = self.candidate_for(normalized) else {
            return normalized.to_string();
        };
        if self.existence.exists(&candidate) {
            tracing::debug!("redirect: {normalized} -> {candidate}");
            candidate
        } else {
            tracing::debug!("candidate missing on mirror, keeping {normalized}");
            normalized.to_string()
        }
    }

    /// Substitute URL the rule table maps `normalized` to, if any.
    fn candidate_for(&self, normalized: &str) -> Option<String> {
        let matched = self.rules.find_match(normalized)?;
        let filename = matched.filename?;
        let filename = if matched.rule.special_naming {
            strip_variant_suffix(&filename)
        } else {
            filename
        };
        Some(format!("{}{}", matched.rule.target_base, filename))
    }
}
