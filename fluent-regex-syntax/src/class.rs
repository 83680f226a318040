use std::fmt::{Display, Formatter};

/// Predefined single-character classes.
#[derive(Hash, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// `.`
    Any,
    /// `\s`
    Whitespace,
    /// `\S`
    NonWhitespace,
    /// `\d`
    Digit,
    /// `\D`
    NonDigit,
    /// `[a-zA-Z]`
    Letter,
    /// `[^a-zA-Z]`
    NonLetter,
    /// `[A-Z]`
    UppercaseLetter,
    /// `[a-z]`
    LowercaseLetter,
    /// `[a-zA-Z0-9]`
    LetterOrDigit,
    /// `[^a-zA-Z0-9]`
    NonLetterOrDigit,
    /// `[0-9A-Fa-f]`
    HexDigit,
    /// `[0-9A-F]`
    UppercaseHexDigit,
    /// `[0-9a-f]`
    LowercaseHexDigit,
    /// `[^0-9A-Fa-f]`
    NonHexDigit,
    /// `\w`
    Word,
    /// `\W`
    NonWord,
}

impl CharClass {
    /// Pattern text for this class. Every class renders as a single atom, so a
    /// quantifier can follow it directly.
    pub const fn as_str(&self) -> &'static str {
        match self {
            CharClass::Any => ".",
            CharClass::Whitespace => r"\s",
            CharClass::NonWhitespace => r"\S",
            CharClass::Digit => r"\d",
            CharClass::NonDigit => r"\D",
            CharClass::Letter => "[a-zA-Z]",
            CharClass::NonLetter => "[^a-zA-Z]",
            CharClass::UppercaseLetter => "[A-Z]",
            CharClass::LowercaseLetter => "[a-z]",
            CharClass::LetterOrDigit => "[a-zA-Z0-9]",
            CharClass::NonLetterOrDigit => "[^a-zA-Z0-9]",
            CharClass::HexDigit => "[0-9A-Fa-f]",
            CharClass::UppercaseHexDigit => "[0-9A-F]",
            CharClass::LowercaseHexDigit => "[0-9a-f]",
            CharClass::NonHexDigit => "[^0-9A-Fa-f]",
            CharClass::Word => r"\w",
            CharClass::NonWord => r"\W",
        }
    }
}

impl Display for CharClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Zero-width assertions. These cannot be quantified.
#[derive(Hash, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// `^`
    StartOfString,
    /// `$`
    EndOfString,
    /// `\b`
    WordBoundary,
}

impl Anchor {
    /// Pattern text for this anchor.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Anchor::StartOfString => "^",
            Anchor::EndOfString => "$",
            Anchor::WordBoundary => r"\b",
        }
    }
}

impl Display for Anchor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{Anchor, CharClass};

    #[test]
    fn negated_classes_complement_their_positive_form() {
        let pairs = [
            (CharClass::Letter, CharClass::NonLetter),
            (CharClass::LetterOrDigit, CharClass::NonLetterOrDigit),
            (CharClass::HexDigit, CharClass::NonHexDigit),
        ];

        for (positive, negative) in pairs {
            let body = &positive.as_str()[1..];
            assert_eq!(negative.as_str(), format!("[^{body}"));
        }
    }

    #[test]
    fn escapes_are_upper_case_for_complements() {
        assert_eq!(CharClass::Digit.as_str(), r"\d");
        assert_eq!(CharClass::NonDigit.as_str(), r"\D");
        assert_eq!(CharClass::Word.to_string(), r"\w");
        assert_eq!(CharClass::NonWord.to_string(), r"\W");
        assert_eq!(CharClass::Whitespace.to_string(), r"\s");
        assert_eq!(CharClass::NonWhitespace.to_string(), r"\S");
    }

    #[test]
    fn anchors() {
        assert_eq!(Anchor::StartOfString.to_string(), "^");
        assert_eq!(Anchor::EndOfString.to_string(), "$");
        assert_eq!(Anchor::WordBoundary.to_string(), r"\b");
    }
}
