//! Download filename sanitization

/// Maximum number of characters kept from a title.
pub const MAX_TITLE_CHARS: usize = 100;

/// Stem used when nothing of the title survives sanitization.
pub const FALLBACK_NAME: &str = "audio";

/// Reduce a title to a safe filename stem.
///
/// Keeps alphanumeric characters (any script), spaces, hyphens and
/// underscores, trims, and caps the length at [`MAX_TITLE_CHARS`]. Never
/// returns an empty string.
pub fn sanitize_title(title: &str) -> String {
    let kept: String = title
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();

    let truncated: String = kept.trim().chars().take(MAX_TITLE_CHARS).collect();
    let clean = truncated.trim_end();

    if clean.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        clean.to_string()
    }
}
