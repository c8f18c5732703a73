//! Pluralization for log lines.

/// Format count with noun, handling pluralization
///
/// - `plural_count(0, "item")` -> `"0 items"`
/// - `plural_count(1, "entry")` -> `"1 entry"`
/// - `plural_count(5, "entry")` -> `"5 entries"`
pub fn plural_count(count: usize, noun: &str) -> String {
    if count == 1 {
        return format!("{count} {noun}");
    }
    match noun.strip_suffix('y') {
        Some(stem) if !stem.ends_with(['a', 'e', 'i', 'o', 'u']) => format!("{count} {stem}ies"),
        _ => format!("{count} {noun}s"),
    }
}
