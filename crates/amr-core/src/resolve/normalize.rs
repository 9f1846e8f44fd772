//! URL normalization for cache keys and rule matching.

use anyhow::{Context, Result};
use url::Url;

/// True for inline `data:` URLs, which are never rewritten or cached.
pub fn is_data_url(url: &str) -> bool {
    url.starts_with("data:")
}

/// Canonical form used as the cache key: absolute, with the query stripped.
/// Relative inputs (including scheme-relative ones) resolve against the
/// consumer application origin.
pub fn normalize(url: &str, origin: &Url) -> Result<String> {
    let mut parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(url::ParseError::RelativeUrlWithoutBase) => origin
            .join(url)
            .with_context(|| format!("resolve relative URL against origin: {url}"))?,
        Err(err) => return Err(err).with_context(|| format!("parse URL: {url}")),
    };
    parsed.set_query(None);
    Ok(parsed.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Url {
        Url::parse("https://game.example").unwrap()
    }

    #[test]
    fn absolute_url_keeps_host_and_loses_query() {
        assert_eq!(
            normalize("https://game.example/img/logo.png?v=2", &origin()).unwrap(),
            "https://game.example/img/logo.png"
        );
    }

    #[test]
    fn relative_url_resolves_against_origin() {
        assert_eq!(
            normalize("/img/logo.png?v=2", &origin()).unwrap(),
            "https://game.example/img/logo.png"
        );
        assert_eq!(
            normalize("img/logo.png", &origin()).unwrap(),
            "https://game.example/img/logo.png"
        );
    }

    #[test]
    fn scheme_relative_url_takes_origin_scheme() {
        assert_eq!(
            normalize("//cdn.game.example/custom/skins/1.png", &origin()).unwrap(),
            "https://cdn.game.example/custom/skins/1.png"
        );
    }

    #[test]
    fn unparseable_url_is_an_error() {
        assert!(normalize("http://[", &origin()).is_err());
    }

    #[test]
    fn data_url_detection() {
        assert!(is_data_url("data:image/png;base64,iVBORw0KGgo="));
        assert!(!is_data_url("https://game.example/img/logo.png"));
    }
}
