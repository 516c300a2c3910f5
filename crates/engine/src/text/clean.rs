//! Punctuation removal for the optional cleaning pass.

/// Characters replaced by a space. Apostrophes, digits and letters in any
/// script are kept.
const DENY_LIST: &[char] = &[
    '\n', '\t', '\r', '.', ',', '!', '?', ';', ':', '"', '(', ')', '[', ']', '{', '}', '/', '<',
    '>', '\\', '|', '@', '#', '$', '%', '^', '&', '*', '+', '-', '=', '_', '~', '`', '\u{201C}',
    '\u{201D}', '«', '»', '§', '¶', '†', '‡', '•', '·',
];

#[inline]
fn is_denied(c: char) -> bool {
    DENY_LIST.contains(&c)
}

/// Replace deny-listed characters with spaces, collapse whitespace runs to
/// one space and trim.
///
/// ```
/// use stemma_engine::text::clean_non_alphanumeric;
///
/// assert_eq!(
///     clean_non_alphanumeric("user@email.com\n\tPhone: (555) 123-4567"),
///     "user email com Phone 555 123 4567"
/// );
/// ```
pub fn clean_non_alphanumeric(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let words = text
        .split(|c: char| c.is_whitespace() || is_denied(c))
        .filter(|w| !w.is_empty());
    for (i, word) in words.enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
