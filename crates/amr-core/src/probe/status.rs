//! Map probe response statuses to an existence verdict.

/// Success range for an existence probe: [200, 400).
///
/// Redirect statuses count as existing, so a mirror answering with its own
/// redirect chain still counts as holding the asset.
pub fn status_indicates_existence(code: u32) -> bool {
    (200..400).contains(&code)
}
