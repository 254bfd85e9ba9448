/// Lowercases a filter value. Missing and empty values both mean "no filter".
pub fn normalize(value: Option<&str>) -> Option<String> {
    value
        .filter(|value| !value.is_empty())
        .map(str::to_lowercase)
}

/// `needle` must already be lowercase.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// `needle` must already be lowercase.
pub fn equals_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase() == needle
}
