//! Placeholder normalisation for behavioural step definitions.

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| trimmed.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(trimmed)
}

/// Splits a comma-separated placeholder such as `"Acme, Beta"` into trimmed,
/// unquoted, non-empty items.
#[must_use]
pub fn split_list(value: &str) -> Vec<String> {
    unquote(value)
        .split(',')
        .map(|item| unquote(item).to_owned())
        .filter(|item| !item.is_empty())
        .collect()
}
