/// Characters that carry meaning outside a character class and are therefore
/// escaped by [`escape_literal`].
pub const LITERAL_SPECIALS: &[char] = &[
    '\\', '?', '.', '+', '*', '^', '$', '(', ')', '[', ']', '{', '}', '|',
];

/// Escape `text` so that it matches itself literally.
///
/// Each input character is looked at exactly once, so a backslash added for
/// one character is never escaped again.
///
/// ```rust
/// use fluent_regex_syntax::escape_literal;
///
/// assert_eq!(escape_literal("1+1=2?"), r"1\+1=2\?");
/// assert_eq!(escape_literal(r"C:\dir"), r"C:\\dir");
/// ```
pub fn escape_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if LITERAL_SPECIALS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escape the members of a custom character class (the part between `[` and
/// `]`).
///
/// Only `]` is escaped, plus a leading `^` so the class is not read as a
/// negation. Hyphens and backslashes pass through unchanged, so `a-z` still
/// forms a range.
///
/// ```rust
/// use fluent_regex_syntax::escape_class;
///
/// assert_eq!(escape_class("^a]"), r"\^a\]");
/// assert_eq!(escape_class("a-z"), "a-z");
/// ```
pub fn escape_class(chars: &str) -> String {
    let escaped = chars.replace(']', r"\]");
    if escaped.starts_with('^') {
        format!("\\{escaped}")
    } else {
        escaped
    }
}

#[cfg(test)]
mod tests {
    use super::{escape_class, escape_literal};
    use pretty_assertions::assert_eq;

    #[test]
    fn every_special_is_escaped_once() {
        assert_eq!(
            escape_literal(r"\?.+*^$()[]{}|"),
            r"\\\?\.\+\*\^\$\(\)\[\]\{\}\|"
        );
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(escape_literal("hello world-#&~"), "hello world-#&~");
        assert_eq!(escape_literal(""), "");
    }

    #[test]
    fn backslashes_next_to_specials() {
        assert_eq!(escape_literal(r"\."), r"\\\.");
        assert_eq!(escape_literal(r"\\"), r"\\\\");
    }

    #[test]
    fn class_closing_bracket() {
        assert_eq!(escape_class("a]b"), r"a\]b");
        assert_eq!(escape_class("]]"), r"\]\]");
    }

    #[test]
    fn class_leading_caret_only() {
        assert_eq!(escape_class("^ab"), r"\^ab");
        assert_eq!(escape_class("a^b"), "a^b");
    }

    #[test]
    fn class_leaves_other_metacharacters() {
        assert_eq!(escape_class(r".*\-"), r".*\-");
    }
}
