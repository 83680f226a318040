use thiserror::Error;

/// Everything that can go wrong while assembling or compiling a pattern.
///
/// The usage errors carry the pattern text accumulated up to the failing
/// call, which shows which fragment came right before the mistake.
#[derive(Error, Debug)]
pub enum BuildError {
    /// [`end_group`](crate::PatternBuilder::end_group) was called without an open group.
    #[error("no group is open to be closed (pattern so far: `{pattern}`)")]
    NoOpenGroup {
        /// The pattern assembled so far.
        pattern: String,
    },
    /// The pattern was compiled or finished while groups were still open.
    #[error("{open} group(s) still open (pattern so far: `{pattern}`)")]
    UnclosedGroup {
        /// Number of groups that were never closed.
        open: usize,
        /// The pattern assembled so far.
        pattern: String,
    },
    /// Multi-line anchors and dot-matches-new-line were requested together.
    #[error(
        "multi-line and dot-matches-new-line cannot be combined (pattern so far: `{pattern}`)"
    )]
    ConflictingOptions {
        /// The pattern assembled so far.
        pattern: String,
    },
    /// The regex engine rejected the assembled pattern.
    #[error(transparent)]
    Engine(#[from] regex::Error),
}

impl BuildError {
    /// The partial pattern attached to a usage error. Engine errors carry
    /// their own copy of the pattern and return `None` here.
    pub fn pattern(&self) -> Option<&str> {
        match self {
            BuildError::NoOpenGroup { pattern }
            | BuildError::UnclosedGroup { pattern, .. }
            | BuildError::ConflictingOptions { pattern } => Some(pattern),
            BuildError::Engine(_) => None,
        }
    }
}
