//! Transaction categories
//!
//! Categories are plain strings on the transaction. The list below is what the
//! interface offers by default; any other value is still accepted.

/// Categories offered when no list is configured
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Salary",
    "Groceries",
    "Rent",
    "Utilities",
    "Transportation",
    "Entertainment",
    "Dining Out",
    "Healthcare",
    "Shopping",
    "Investment",
    "Other",
];

/// The category offered list as owned strings
pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

/// Category pre-selected for a new transaction: the second entry of the list
pub fn default_category(categories: &[String]) -> &str {
    categories
        .get(1)
        .or_else(|| categories.first())
        .map(String::as_str)
        .unwrap_or("Other")
}

/// Look up a category in the list, ignoring case
///
/// Returns the canonical spelling if known.
pub fn canonical_category<'a>(categories: &'a [String], name: &str) -> Option<&'a str> {
    let name = name.trim();
    categories
        .iter()
        .find(|c| c.eq_ignore_ascii_case(name))
        .map(String::as_str)
}
