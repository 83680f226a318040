//! Compile-time options: the [`Flags`] passed to
//! [`PatternBuilder::compile`](crate::PatternBuilder::compile) and the
//! [`Config`] a builder is created with.

use std::fmt::{Display, Formatter};
use std::ops::{BitOr, BitOrAssign};

/// A set of engine flags.
///
/// Flags combine with `|`:
///
/// ```rust
/// use fluent_regex::Flags;
///
/// let flags = Flags::CASE_INSENSITIVE | Flags::MULTI_LINE;
/// assert!(flags.contains(Flags::MULTI_LINE));
/// assert_eq!(flags.to_string(), "im");
/// ```
#[derive(Hash, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags(u8);

impl Flags {
    /// No flags set.
    pub const NONE: Flags = Flags(0);
    /// Letters match both their upper and lower case forms (`i`).
    pub const CASE_INSENSITIVE: Flags = Flags(1 << 0);
    /// `^` and `$` match at line boundaries (`m`).
    pub const MULTI_LINE: Flags = Flags(1 << 1);
    /// `.` also matches `\n` (`s`).
    pub const DOT_MATCHES_NEW_LINE: Flags = Flags(1 << 2);
    /// Quantifiers are lazy by default (`U`).
    pub const SWAP_GREED: Flags = Flags(1 << 3);

    const LETTERS: [(Flags, char); 4] = [
        (Flags::CASE_INSENSITIVE, 'i'),
        (Flags::MULTI_LINE, 'm'),
        (Flags::DOT_MATCHES_NEW_LINE, 's'),
        (Flags::SWAP_GREED, 'U'),
    ];

    /// Raw bit representation.
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Whether every flag in `other` is also set in `self`.
    pub const fn contains(&self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Every flag set in either `self` or `other`.
    pub const fn union(self, other: Flags) -> Flags {
        Flags(self.0 | other.0)
    }

    /// True when no flag is set.
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Multi-line anchors and dot-matches-new-line are mutually exclusive.
    pub const fn is_conflicting(&self) -> bool {
        self.contains(Flags::MULTI_LINE.union(Flags::DOT_MATCHES_NEW_LINE))
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        self.union(rhs)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        *self = self.union(rhs);
    }
}

impl FromIterator<Flags> for Flags {
    fn from_iter<T: IntoIterator<Item = Flags>>(iter: T) -> Self {
        iter.into_iter().fold(Flags::NONE, Flags::union)
    }
}

impl Display for Flags {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (flag, letter) in Flags::LETTERS {
            if self.contains(flag) {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

/// Builder-wide settings.
///
/// `default_flags` are merged into the flags of every compile. The limits are
/// handed to the regex engine untouched; `None` keeps the engine's default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Flags applied to every compile, in addition to the ones passed in.
    pub default_flags: Flags,
    /// Approximate size limit of the compiled program, in bytes.
    pub size_limit: Option<usize>,
    /// Maximum nesting depth of the pattern.
    pub nest_limit: Option<u32>,
}

impl Config {
    /// No default flags and the engine's own limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the flags merged into every compile.
    pub fn with_default_flags(mut self, flags: Flags) -> Self {
        self.default_flags = flags;
        self
    }

    /// Sets the engine's size limit, in bytes.
    pub fn with_size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = Some(bytes);
        self
    }

    /// Sets the engine's nesting limit.
    pub fn with_nest_limit(mut self, depth: u32) -> Self {
        self.nest_limit = Some(depth);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, Flags};
    use pretty_assertions::assert_eq;

    #[test]
    fn combine() {
        let mut flags = Flags::CASE_INSENSITIVE | Flags::SWAP_GREED;
        assert!(flags.contains(Flags::CASE_INSENSITIVE));
        assert!(!flags.contains(Flags::MULTI_LINE));

        flags |= Flags::MULTI_LINE;
        assert!(flags.contains(Flags::MULTI_LINE | Flags::SWAP_GREED));
        assert_eq!(flags.bits(), 0b1011);
    }

    #[test]
    fn collect() {
        let flags: Flags = [Flags::SWAP_GREED, Flags::CASE_INSENSITIVE, Flags::SWAP_GREED]
            .into_iter()
            .collect();
        assert_eq!(flags, Flags::SWAP_GREED | Flags::CASE_INSENSITIVE);
        assert!(std::iter::empty::<Flags>().collect::<Flags>().is_empty());
    }

    #[test]
    fn conflicts() {
        assert!(!Flags::MULTI_LINE.is_conflicting());
        assert!(!Flags::DOT_MATCHES_NEW_LINE.is_conflicting());
        assert!((Flags::MULTI_LINE | Flags::DOT_MATCHES_NEW_LINE).is_conflicting());
        assert!(
            (Flags::CASE_INSENSITIVE | Flags::MULTI_LINE | Flags::DOT_MATCHES_NEW_LINE)
                .is_conflicting()
        );
    }

    #[test]
    fn display() {
        assert_eq!(Flags::NONE.to_string(), "");
        assert_eq!(
            (Flags::SWAP_GREED | Flags::DOT_MATCHES_NEW_LINE | Flags::CASE_INSENSITIVE).to_string(),
            "isU"
        );
    }

    #[test]
    fn config_builder() {
        let config = Config::new()
            .with_default_flags(Flags::CASE_INSENSITIVE)
            .with_size_limit(1 << 16)
            .with_nest_limit(8);

        assert_eq!(config.default_flags, Flags::CASE_INSENSITIVE);
        assert_eq!(config.size_limit, Some(1 << 16));
        assert_eq!(config.nest_limit, Some(8));
        assert_eq!(Config::new(), Config::default());
    }
}
