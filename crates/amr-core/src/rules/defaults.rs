//! Built-in rule set for the consumer application's asset namespaces.

use anyhow::Result;
use regex::Regex;

use super::{RedirectRule, RuleTable};

/// Builds the fixed rule table rooted at `mirror_base` (a URL prefix such as
/// `https://cdn.example/images`; a trailing slash is tolerated).
///
/// Order is priority: specific asset namespaces come before the catch-all
/// interface image rule. JSON metadata never redirects; spritesheet and
/// animation descriptors must keep coming from the origin, in sync with the
/// code that requests them.
pub fn default_rule_table(mirror_base: &str) -> Result<RuleTable> {
    let base = mirror_base.trim_end_matches('/');
    let rules = vec![
        // Animations
        RedirectRule::new(
            r".+/assets/animations/(?P<filename>[^?.]+\.[^?]+)(?:\?.*)?$",
            format!("{base}/default/animations/"),
        )?,
        // Characters
        RedirectRule::new(
            r".+/assets/characters/(?P<filename>[^?.]+\.[^?]+)(?:\?.*)?$",
            format!("{base}/characters/"),
        )?,
        // Spritesheets
        RedirectRule::new(
            r".+/assets/spritesheets/(?P<filename>[^?.]+\.[^?]+)(?:\?.*)?$",
            format!("{base}/default/spritesheets/"),
        )?,
        // Map asset packs
        RedirectRule::new(
            r".+/assets/packs/(?P<filename>[^?.]+\.[^?]+)(?:\?.*)?$",
            format!("{base}/default/asset-packs/"),
        )?,
        // Interface images (logo, menu and loading backgrounds, ...)
        RedirectRule::new(
            r".+/img/(?P<filename>[^?.]+\.[^?]+)(?:\?.*)?$",
            format!("{base}/img/"),
        )?,
        // Pets
        RedirectRule::new(
            r".+/custom/pets/(?P<filename>[^?.]+\.[^?]+)(?:\?.*)?$",
            format!("{base}/custom/pets/"),
        )?,
        // Skins hosted on the origin
        RedirectRule::new(
            r".+/assets/skins/(?P<filename>[^?.]+\.[^?]+)(?:\?.*)?$",
            format!("{base}/skins/"),
        )?,
        // Skins hosted on the CDN; uploaded variants share one canonical
        // image, reached by stripping the variant suffix.
        RedirectRule::with_special_naming(
            r".+/custom/skins/(?P<filename>[^?.]+\.[^?]+)(?:\?.*)?$",
            format!("{base}/skins/custom/"),
        )?,
    ];
    let exclusions = vec![
        // Per-user imagery the mirror can never hold.
        Regex::new(r".+/img/(avatar|badges|stats|verified)")?,
        // Terrain textures
        Regex::new(r".+/assets/packs/\d+/textures")?,
        // JSON metadata
        Regex::new(r"\.json(?:\?.*)?$")?,
    ];
    Ok(RuleTable::new(rules, exclusions))
}
