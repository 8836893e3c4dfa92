//! Whitespace normalization for pattern-based extraction

/// Collapse any run of whitespace (newlines, tabs, repeated spaces) into a
/// single space. Field extraction patterns run against this single-line form;
/// skill tokenization keeps working on the original text.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
