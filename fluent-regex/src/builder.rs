use std::fmt::{Display, Formatter};

use fluent_regex_syntax::{escape_class, escape_literal, Anchor, CharClass, GroupKind, Quantifier};
use regex::{Regex, RegexBuilder};

use crate::{BuildError, Config, Flags};

/// An open group: what opened it and where its opening syntax starts in the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Scope {
    kind: GroupKind,
    start: usize,
}

/// Assembles a pattern string fragment by fragment.
///
/// The builder owns a single text buffer and a stack of open groups. Every
/// fragment operation appends to the buffer and returns the builder again so
/// calls can be chained. Opening a group pushes a scope, [`end_group`]
/// pops it, and [`compile`] refuses to run until the stack is empty.
///
/// Since every operation goes through `&mut self`, there is no separate
/// handle per group that could outlive the group it belongs to.
///
/// A builder is not meant to be shared between threads without external
/// synchronisation.
///
/// [`end_group`]: PatternBuilder::end_group
/// [`compile`]: PatternBuilder::compile
#[derive(Debug, Clone, Default)]
pub struct PatternBuilder {
    pattern: String,
    scopes: Vec<Scope>,
    config: Config,
}

impl PatternBuilder {
    /// Creates an empty builder with the default [`Config`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder that compiles with `config`.
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The pattern accumulated so far.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Number of groups that are currently open.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// True when no group is open.
    pub fn is_root(&self) -> bool {
        self.scopes.is_empty()
    }

    /// The settings used by [`compile`](PatternBuilder::compile).
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Drops the accumulated pattern, including any open groups.
    pub fn clear(&mut self) -> &mut Self {
        self.pattern.clear();
        self.scopes.clear();
        self
    }

    /* fragments */

    /// Appends `text` so that it matches itself literally.
    ///
    /// With a quantifier, text longer than one character is wrapped in a
    /// non-capturing group so the quantifier repeats all of it.
    pub fn literal(
        &mut self,
        text: &str,
        quantifier: impl Into<Option<Quantifier>>,
    ) -> &mut Self {
        let escaped = escape_literal(text);
        match quantifier.into() {
            Some(q) if text.chars().count() != 1 => self.push_wrapped(&escaped, q),
            quantifier => self.push_atom(&escaped, quantifier),
        }
    }

    /// Appends `text` as pattern syntax, without escaping.
    ///
    /// With a quantifier the text is always wrapped in a non-capturing group
    /// first, so `raw("ab", one_or_more)` repeats `ab` rather than `b`.
    pub fn raw(&mut self, text: &str, quantifier: impl Into<Option<Quantifier>>) -> &mut Self {
        match quantifier.into() {
            Some(q) => self.push_wrapped(text, q),
            None => self.push_atom(text, None),
        }
    }

    /// Appends one of the predefined character classes.
    pub fn class(
        &mut self,
        class: CharClass,
        quantifier: impl Into<Option<Quantifier>>,
    ) -> &mut Self {
        self.push_atom(class.as_str(), quantifier.into())
    }

    /// `.`
    pub fn any_char(&mut self, quantifier: impl Into<Option<Quantifier>>) -> &mut Self {
        self.class(CharClass::Any, quantifier)
    }

    /// `\s`
    pub fn whitespace(&mut self, quantifier: impl Into<Option<Quantifier>>) -> &mut Self {
        self.class(CharClass::Whitespace, quantifier)
    }

    /// `\S`
    pub fn non_whitespace(&mut self, quantifier: impl Into<Option<Quantifier>>) -> &mut Self {
        self.class(CharClass::NonWhitespace, quantifier)
    }

    /// `\d`
    pub fn digit(&mut self, quantifier: impl Into<Option<Quantifier>>) -> &mut Self {
        self.class(CharClass::Digit, quantifier)
    }

    /// `\D`
    pub fn non_digit(&mut self, quantifier: impl Into<Option<Quantifier>>) -> &mut Self {
        self.class(CharClass::NonDigit, quantifier)
    }

    /// `[a-zA-Z]`
    pub fn letter(&mut self, quantifier: impl Into<Option<Quantifier>>) -> &mut Self {
        self.class(CharClass::Letter, quantifier)
    }

    /// `[^a-zA-Z]`
    pub fn non_letter(&mut self, quantifier: impl Into<Option<Quantifier>>) -> &mut Self {
        self.class(CharClass::NonLetter, quantifier)
    }

    /// `[A-Z]`
    pub fn uppercase_letter(&mut self, quantifier: impl Into<Option<Quantifier>>) -> &mut Self {
        self.class(CharClass::UppercaseLetter, quantifier)
    }

    /// `[a-z]`
    pub fn lowercase_letter(&mut self, quantifier: impl Into<Option<Quantifier>>) -> &mut Self {
        self.class(CharClass::LowercaseLetter, quantifier)
    }

    /// `[a-zA-Z0-9]`
    pub fn letter_or_digit(&mut self, quantifier: impl Into<Option<Quantifier>>) -> &mut Self {
        self.class(CharClass::LetterOrDigit, quantifier)
    }

    /// `[^a-zA-Z0-9]`
    pub fn non_letter_or_digit(
        &mut self,
        quantifier: impl Into<Option<Quantifier>>,
    ) -> &mut Self {
        self.class(CharClass::NonLetterOrDigit, quantifier)
    }

    /// `[0-9A-Fa-f]`
    pub fn hex_digit(&mut self, quantifier: impl Into<Option<Quantifier>>) -> &mut Self {
        self.class(CharClass::HexDigit, quantifier)
    }

    /// `[0-9A-F]`
    pub fn uppercase_hex_digit(
        &mut self,
        quantifier: impl Into<Option<Quantifier>>,
    ) -> &mut Self {
        self.class(CharClass::UppercaseHexDigit, quantifier)
    }

    /// `[0-9a-f]`
    pub fn lowercase_hex_digit(
        &mut self,
        quantifier: impl Into<Option<Quantifier>>,
    ) -> &mut Self {
        self.class(CharClass::LowercaseHexDigit, quantifier)
    }

    /// `[^0-9A-Fa-f]`
    pub fn non_hex_digit(&mut self, quantifier: impl Into<Option<Quantifier>>) -> &mut Self {
        self.class(CharClass::NonHexDigit, quantifier)
    }

    /// `\w`
    pub fn word_char(&mut self, quantifier: impl Into<Option<Quantifier>>) -> &mut Self {
        self.class(CharClass::Word, quantifier)
    }

    /// `\W`
    pub fn non_word_char(&mut self, quantifier: impl Into<Option<Quantifier>>) -> &mut Self {
        self.class(CharClass::NonWord, quantifier)
    }

    /// A character class made of `chars`.
    ///
    /// Only `]` and a leading `^` are escaped, so `"a-f"` still means the
    /// range `a` to `f`.
    pub fn any_of_chars(
        &mut self,
        chars: &str,
        quantifier: impl Into<Option<Quantifier>>,
    ) -> &mut Self {
        let set = format!("[{}]", escape_class(chars));
        self.push_atom(&set, quantifier.into())
    }

    /// A negated character class matching anything except `chars`.
    pub fn none_of_chars(
        &mut self,
        chars: &str,
        quantifier: impl Into<Option<Quantifier>>,
    ) -> &mut Self {
        let set = format!("[^{}]", escape_class(chars));
        self.push_atom(&set, quantifier.into())
    }

    /// Matches any one of `alternatives`, each taken literally.
    ///
    /// No alternatives leave the builder unchanged. A single alternative
    /// behaves like [`literal`](PatternBuilder::literal). Two or more are
    /// joined with `|` inside a non-capturing group, and the quantifier
    /// applies to that whole group.
    pub fn any_of<I, S>(
        &mut self,
        alternatives: I,
        quantifier: impl Into<Option<Quantifier>>,
    ) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alternatives: Vec<_> = alternatives.into_iter().collect();
        match alternatives.as_slice() {
            [] => self,
            [single] => self.literal(single.as_ref(), quantifier),
            many => {
                let joined = many
                    .iter()
                    .map(|s| escape_literal(s.as_ref()))
                    .collect::<Vec<_>>()
                    .join("|");
                let group = format!("{}{joined})", GroupKind::NonCapturing);
                self.push_atom(&group, quantifier.into())
            }
        }
    }

    /* anchors */

    /// Appends a zero-width assertion.
    pub fn anchor(&mut self, anchor: Anchor) -> &mut Self {
        self.pattern.push_str(anchor.as_str());
        self
    }

    /// `^`
    pub fn start_of_string(&mut self) -> &mut Self {
        self.anchor(Anchor::StartOfString)
    }

    /// `$`
    pub fn end_of_string(&mut self) -> &mut Self {
        self.anchor(Anchor::EndOfString)
    }

    /// `\b`
    pub fn word_boundary(&mut self) -> &mut Self {
        self.anchor(Anchor::WordBoundary)
    }

    /* groups */

    /// Opens a group of the given kind.
    pub fn start(&mut self, kind: GroupKind) -> &mut Self {
        let start = self.pattern.len();
        self.pattern.push_str(&kind.to_string());
        log::trace!("open {:?} at depth {}", kind, self.scopes.len() + 1);
        self.scopes.push(Scope { kind, start });
        self
    }

    /// Opens a capturing group, `(`.
    pub fn start_group(&mut self) -> &mut Self {
        self.start(GroupKind::Capturing)
    }

    /// Opens a non-capturing group, `(?:`.
    pub fn start_non_capturing_group(&mut self) -> &mut Self {
        self.start(GroupKind::NonCapturing)
    }

    /// Opens a named capturing group, `(?<name>`.
    ///
    /// The name is not checked here; an illegal name makes
    /// [`compile`](PatternBuilder::compile) fail with [`BuildError::Engine`].
    pub fn start_named_group(&mut self, name: impl Into<String>) -> &mut Self {
        self.start(GroupKind::named(name))
    }

    /// Closes the innermost open group, applying `quantifier` to the whole group.
    ///
    /// Fails with [`BuildError::NoOpenGroup`] when no group is open.
    pub fn end_group(
        &mut self,
        quantifier: impl Into<Option<Quantifier>>,
    ) -> Result<&mut Self, BuildError> {
        let Some(scope) = self.scopes.pop() else {
            return Err(BuildError::NoOpenGroup {
                pattern: self.pattern.clone(),
            });
        };

        log::trace!(
            "close {:?} opened at offset {}: `{}`",
            scope.kind,
            scope.start,
            &self.pattern[scope.start..]
        );
        Ok(self.push_atom(")", quantifier.into()))
    }

    /* output */

    /// Compiles the accumulated pattern with `flags` (merged with the
    /// configured default flags) and clears the builder for the next pattern.
    ///
    /// Fails without touching the buffer when multi-line and
    /// dot-matches-new-line are both requested, when a group is still open,
    /// or when the engine rejects the pattern.
    pub fn compile(&mut self, flags: Flags) -> Result<Regex, BuildError> {
        let flags = self.config.default_flags | flags;
        if flags.is_conflicting() {
            return Err(BuildError::ConflictingOptions {
                pattern: self.pattern.clone(),
            });
        }
        self.ensure_closed()?;

        log::debug!("compiling `{}` with flags `{}`", self.pattern, flags);
        let mut builder = RegexBuilder::new(&self.pattern);
        builder
            .case_insensitive(flags.contains(Flags::CASE_INSENSITIVE))
            .multi_line(flags.contains(Flags::MULTI_LINE))
            .dot_matches_new_line(flags.contains(Flags::DOT_MATCHES_NEW_LINE))
            .swap_greed(flags.contains(Flags::SWAP_GREED));
        if let Some(size_limit) = self.config.size_limit {
            builder.size_limit(size_limit);
        }
        if let Some(nest_limit) = self.config.nest_limit {
            builder.nest_limit(nest_limit);
        }

        let regex = builder.build()?;
        self.clear();
        Ok(regex)
    }

    /// Hands out the assembled pattern string without compiling it, leaving
    /// the builder empty.
    ///
    /// Fails with [`BuildError::UnclosedGroup`] when a group is still open.
    pub fn finish(&mut self) -> Result<String, BuildError> {
        self.ensure_closed()?;
        log::debug!("finished `{}`", self.pattern);
        Ok(std::mem::take(&mut self.pattern))
    }

    fn ensure_closed(&self) -> Result<(), BuildError> {
        if self.scopes.is_empty() {
            Ok(())
        } else {
            Err(BuildError::UnclosedGroup {
                open: self.scopes.len(),
                pattern: self.pattern.clone(),
            })
        }
    }

    /// Appends a fragment that already forms a single atom, followed by the
    /// quantifier's suffix.
    fn push_atom(&mut self, atom: &str, quantifier: Option<Quantifier>) -> &mut Self {
        self.pattern.push_str(atom);
        if let Some(q) = quantifier {
            self.pattern.push_str(&q.suffix());
        }
        self
    }

    fn push_wrapped(&mut self, text: &str, quantifier: Quantifier) -> &mut Self {
        let group = format!("{}{text})", GroupKind::NonCapturing);
        self.push_atom(&group, Some(quantifier))
    }
}

impl Display for PatternBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pattern)
    }
}
