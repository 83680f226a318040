use std::fmt::{Display, Formatter};

/// A repetition suffix, applied to the atom or group right before it.
///
/// Quantifiers are plain values: they never touch a pattern buffer, they only
/// render their own suffix through [`Quantifier::suffix`] or [`Display`].
///
/// Ranges are not checked. `Quantifier::between(5, 2)` renders `{5,2}` and it
/// is up to the regex engine to reject it once the pattern is compiled.
///
/// ```rust
/// use fluent_regex_syntax::Quantifier;
///
/// assert_eq!(Quantifier::one_or_more().suffix(), "+");
/// assert_eq!(Quantifier::between(2, 5).suffix(), "{2,5}");
/// assert_eq!(Quantifier::no_more_than(3).to_string(), "{0,3}");
/// ```
#[derive(Hash, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
    /// `?`
    NoneOrOne,
    /// `{n}`
    Exactly(u32),
    /// `{n,}`
    AtLeast(u32),
    /// `{0,m}`
    NoMoreThan(u32),
    /// `{n,m}`
    Between(u32, u32),
}

impl Quantifier {
    /// `*`
    pub const fn zero_or_more() -> Self {
        Self::ZeroOrMore
    }

    /// `+`
    pub const fn one_or_more() -> Self {
        Self::OneOrMore
    }

    /// `?`
    pub const fn none_or_one() -> Self {
        Self::NoneOrOne
    }

    /// Exactly `n` repetitions, `{n}`.
    pub const fn exactly(n: u32) -> Self {
        Self::Exactly(n)
    }

    /// `n` or more repetitions, `{n,}`.
    pub const fn at_least(n: u32) -> Self {
        Self::AtLeast(n)
    }

    /// At most `m` repetitions, `{0,m}`.
    pub const fn no_more_than(m: u32) -> Self {
        Self::NoMoreThan(m)
    }

    /// From `n` to `m` repetitions, `{n,m}`.
    pub const fn between(n: u32, m: u32) -> Self {
        Self::Between(n, m)
    }

    /// The suffix this quantifier appends after an atom.
    pub fn suffix(&self) -> String {
        self.to_string()
    }
}

impl Display for Quantifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Quantifier::ZeroOrMore => write!(f, "*"),
            Quantifier::OneOrMore => write!(f, "+"),
            Quantifier::NoneOrOne => write!(f, "?"),
            Quantifier::Exactly(n) => write!(f, "{{{n}}}"),
            Quantifier::AtLeast(n) => write!(f, "{{{n},}}"),
            Quantifier::NoMoreThan(m) => write!(f, "{{0,{m}}}"),
            Quantifier::Between(n, m) => write!(f, "{{{n},{m}}}"),
        }
    }
}
