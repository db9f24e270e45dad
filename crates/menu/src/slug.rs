use regex::Regex;
use std::sync::LazyLock;

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Convert a category name into the slug used for `data-category`
///
/// Lowercases the name, collapses each run of whitespace into a single
/// hyphen, then drops ampersands. "Breads & Parottas" becomes
/// "breads--parottas": the hyphens around the ampersand are kept.
pub fn category_slug(category_name: &str) -> String {
    let lowered = category_name.to_lowercase();

    RE_WHITESPACE.replace_all(&lowered, "-").replace('&', "")
}
