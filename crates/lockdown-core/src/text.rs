// crates/lockdown-core/src/text.rs

/// Convert a string into a folded key suitable for name comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Côte d'Ivoire` -> `Cote d'Ivoire`)
/// 2\) Normalize to lowercase
/// 3\) Replace every non-alphanumeric character with a space and collapse runs
///
/// # Examples
///
/// ```rust
/// use lockdown_core::text::fold_key;
///
/// assert_eq!(fold_key("Côte d'Ivoire"), "cote d ivoire");
/// assert_eq!(fold_key("  Bosnia-and  Herzegovina "), "bosnia and herzegovina");
/// ```
pub fn fold_key(s: &str) -> String {
    let ascii = deunicode::deunicode(s).to_lowercase();
    let spaced: String = ascii
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `true` if `prefix` is made of the leading whole words of `haystack`.
///
/// Both arguments must already be folded.
pub(crate) fn starts_with_words(haystack: &str, prefix: &str) -> bool {
    if prefix.is_empty() {
        return false;
    }
    match haystack.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with(' '),
        None => false,
    }
}

/// Strip a trailing bracketed footnote reference from a token.
///
/// Tables copied from wiki pages carry references like `2020-03-17[12]`.
///
/// ```rust
/// use lockdown_core::text::strip_reference;
///
/// assert_eq!(strip_reference("2020-03-17[12]"), "2020-03-17");
/// assert_eq!(strip_reference("National"), "National");
/// ```
pub fn strip_reference(token: &str) -> &str {
    match token.find('[') {
        Some(idx) => &token[..idx],
        None => token,
    }
}
