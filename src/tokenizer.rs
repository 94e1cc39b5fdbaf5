//! Whitespace tokenization for node configuration strings.

/// Split `text` into its whitespace-delimited tokens.
///
/// Contiguous runs of whitespace (spaces, tabs, newlines and other Unicode
/// whitespace) count as a single delimiter, so the result never contains
/// empty strings. Leading and trailing whitespace is ignored. Token order
/// follows left-to-right order of appearance in `text`.
///
/// Total over all inputs: an empty or all-whitespace `text` yields an empty
/// vector rather than an error.
pub fn split(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}
