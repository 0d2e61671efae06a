//! Splits market names such as `"P90 | Freight (Well-Worn)"` into item name
//! and exterior.

use regex::Regex;
use std::sync::LazyLock;

static NAME_AND_CONDITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*) \(([^)]+)\)$").unwrap());

/// Separate the item name from its trailing parenthesized condition.
///
/// Both parts are trimmed. Strings without a parenthesized suffix come back
/// unchanged with no condition.
///
/// ```
/// use skinbaron_sdk::matcher::split_name_and_condition;
///
/// let (name, condition) = split_name_and_condition("P90 | Freight (Well-Worn)");
/// assert_eq!(name, "P90 | Freight");
/// assert_eq!(condition.as_deref(), Some("Well-Worn"));
/// ```
pub fn split_name_and_condition(s: &str) -> (String, Option<String>) {
    match NAME_AND_CONDITION.captures(s) {
        Some(caps) => (
            caps[1].trim().to_string(),
            Some(caps[2].trim().to_string()),
        ),
        None => (s.to_string(), None),
    }
}
