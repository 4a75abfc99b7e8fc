//! Text normalization into comparable word tokens.

/// Splits text into lower-cased word tokens.
///
/// Every character that is not a letter, digit, or whitespace acts as a separator,
/// so `"rust-lang"` yields `["rust", "lang"]` rather than `["rustlang"]`.
/// Order and duplicates are preserved: repeated query words each contribute a score.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    normalized
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Tokenizes each text and flattens the results, keeping input order.
pub(crate) fn tokenize_all<'a, I>(texts: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    texts.into_iter().flat_map(|text| tokenize(text)).collect()
}
