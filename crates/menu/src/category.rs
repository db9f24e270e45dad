use indexmap::IndexMap;
use std::sync::LazyLock;

/// Filter identifier -> category name as it appears in the menu document
///
/// Order here is the order filter controls are rendered in.
static CATEGORY_MAP: LazyLock<IndexMap<&'static str, &'static str>> = LazyLock::new(|| {
    IndexMap::from([
        ("soups", "Soups"),
        ("veg-appetizer", "Veg Appetizer"),
        ("non-veg-appetizer", "Non Veg Appetizer"),
        ("egg-appetizer", "Egg Appetizer"),
        ("biriyani", "Briyani"),
        ("veg-curries", "Veg Curries"),
        ("non-veg-curries", "Non Veg Curries"),
        ("south-indian-specials", "South Indian Specials"),
        ("thanjai-specials", "Thanjai Specials"),
        ("chinese", "Chinese"),
        ("breads-parottas", "Breads & Parottas"),
        ("dosai-corner", "Dosai Corner"),
        ("desserts", "Desserts"),
        ("beverages", "Beverages"),
    ])
});

/// Look up the category name behind a filter identifier
pub fn category_name(filter_id: &str) -> Option<&'static str> {
    CATEGORY_MAP.get(filter_id).copied()
}

/// All `(filter identifier, category name)` pairs in display order
pub fn categories() -> impl Iterator<Item = (&'static str, &'static str)> {
    CATEGORY_MAP.iter().map(|(id, name)| (*id, *name))
}
