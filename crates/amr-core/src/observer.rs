//! Seam between the engine and whatever intercepts outgoing requests.
//!
//! Host integrations (network-call hooks, DOM attribute rewriting, a local
//! proxy) implement interception however they like and talk to the engine
//! only through this trait, staying ignorant of the resolution internals.
//! Probes issued by the engine itself go out directly and never pass back
//! through an observer.

use crate::resolve::UrlResolver;

/// Observer consulted around every outgoing asset request.
pub trait RequestObserver {
    /// Called before the request is issued; returns the URL to use.
    fn before_request(&mut self, url: &str) -> String;

    /// Called when a request issued with the URL previously returned for
    /// `original` failed at the transport level (not merely a non-2xx body).
    fn request_failed(&mut self, original: &str);
}

impl RequestObserver for UrlResolver {
    fn before_request(&mut self, url: &str) -> String {
        self.resolve(url)
    }

    fn request_failed(&mut self, original: &str) {
        if self.invalidate(original) {
            tracing::debug!("dropped cached resolution for {original} after request failure");
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use crate::cache::ResolutionCache;
    use crate::existence::ExistenceChecker;
    use crate::probe::UrlProber;
    use crate::rules::{RedirectRule, RuleTable};
    use crate::resolve::UrlResolver;

    use super::RequestObserver;

    struct AlwaysThere;

    impl UrlProber for AlwaysThere {
        fn probe_status(&self, _url: &str) -> Result<u32> {
            Ok(200)
        }
    }

    fn resolver() -> UrlResolver {
        let table = RuleTable::new(
            vec![RedirectRule::new(
                r".+/img/(?P<filename>[^?.]+\.[^?]+)(?:\?.*)?$",
                "https://cdn.example/images/img/",
            )
            .unwrap()],
            Vec::new(),
        );
        UrlResolver::new(
            "https://game.example",
            table,
            ExistenceChecker::new(Box::new(AlwaysThere)),
            ResolutionCache::in_memory(),
        )
        .unwrap()
    }

    #[test]
    fn observer_surface_drives_resolution_and_invalidation() {
        let mut resolver = resolver();
        let observer: &mut dyn RequestObserver = &mut resolver;

        let rewritten = observer.before_request("/img/logo.png");
        assert_eq!(rewritten, "https://cdn.example/images/img/logo.png");

        observer.request_failed("/img/logo.png");
        assert!(resolver.cache().is_empty());
    }
}
