use std::fmt::{Display, Formatter};

/// The kind of group a scope opens. [`Display`] renders the opening syntax;
/// every kind is closed by a single `)`.
#[derive(Hash, Debug, Clone, PartialEq, Eq)]
pub enum GroupKind {
    /// `(`
    Capturing,
    /// `(?:`
    NonCapturing,
    /// `(?<name>`. The name is emitted as given, the engine decides whether
    /// it is a legal group name.
    Named(String),
}

impl GroupKind {
    /// A named capturing group.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

impl Display for GroupKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupKind::Capturing => write!(f, "("),
            GroupKind::NonCapturing => write!(f, "(?:"),
            GroupKind::Named(name) => write!(f, "(?<{name}>"),
        }
    }
}
