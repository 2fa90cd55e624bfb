use std::collections::HashMap;
use std::sync::LazyLock;

/// Label keywords that mark header or section rows rather than meals.
///
/// Matched case-insensitively as substrings of a candidate label; the
/// value records why the keyword disqualifies it.
pub static IGNORE_KEYWORDS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("options", "substitution list header");
    m.insert("diet", "plan title row");
    m.insert("meal", "column header");
    m.insert("food", "column header");
    m
});

/// Default meal display order, by name fragment. The first fragment
/// contained in a meal name decides its rank; fragments are matched
/// case-sensitively.
pub const MEAL_PRIORITY: &[&str] = &[
    "Breakfast",
    "Workout",
    "Lunch",
    "Snack",
    "Dinner",
    "Late Snack",
];

/// Why a label is excluded from meal candidates, if it is.
pub fn ignore_reason(label: &str) -> Option<&'static str> {
    let lower = label.to_lowercase();
    IGNORE_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(*keyword))
        .map(|(_, reason)| *reason)
}

/// The default ignore keywords as an owned, configurable list.
pub fn default_ignore_keywords() -> Vec<String> {
    let mut keywords: Vec<String> = IGNORE_KEYWORDS.keys().map(|k| k.to_string()).collect();
    keywords.sort_unstable();
    keywords
}

/// The default meal priority as an owned, configurable list.
pub fn default_meal_priority() -> Vec<String> {
    MEAL_PRIORITY.iter().map(|f| f.to_string()).collect()
}

/// Rank of a meal name against a priority fragment list.
///
/// The first fragment found as a substring of the name wins; names that
/// match no fragment rank after all of them.
pub fn priority_rank(name: &str, priority: &[String]) -> usize {
    priority
        .iter()
        .position(|fragment| name.contains(fragment.as_str()))
        .unwrap_or(priority.len())
}
