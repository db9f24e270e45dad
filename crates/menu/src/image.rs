/// Attribute on card images holding the path to fall back to
pub const FALLBACK_ATTRIBUTE: &str = "data-fallback";
/// Set on an image once it has been switched to its fallback
pub const FALLBACK_APPLIED_ATTRIBUTE: &str = "data-fallback-applied";

/// Decide what a card image that failed to load should show next
///
/// `current_src` is the image's `src` attribute as written, `fallback` its
/// `data-fallback` attribute. The swap happens at most once: after that, or
/// when the failing source already is the fallback, the image stays broken.
pub fn fallback_source(
    current_src: Option<&str>,
    fallback: Option<&str>,
    already_applied: bool,
) -> Option<String> {
    if already_applied {
        return None;
    }

    let fallback = fallback.filter(|path| !path.is_empty())?;
    if current_src == Some(fallback) {
        return None;
    }

    Some(fallback.to_string())
}
