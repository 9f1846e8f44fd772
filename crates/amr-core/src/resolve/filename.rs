//! Filename transform for shared-asset naming conventions.

/// Strips a per-variant suffix from a filename: everything after the first
/// hyphen goes, the extension (after the final dot) stays.
///
/// `"hat-variant2.png"` → `"hat.png"`. Filenames without a hyphen are
/// already canonical and pass through unchanged.
pub fn strip_variant_suffix(filename: &str) -> String {
    let Some((stem, _)) = filename.split_once('-') else {
        return filename.to_string();
    };
    if stem.is_empty() {
        return filename.to_string();
    }
    match filename.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => format!("{stem}.{ext}"),
        _ => stem.to_string(),
    }
}
