//! Value types shared by the pattern builder: quantifier suffixes, predefined
//! character classes, anchors, group openers and the escaping rules used for
//! literal text.
//!
//! Nothing in this crate touches a regex engine. Every type here only knows
//! how to render itself as a piece of pattern text.

mod class;
mod escape;
mod group;
mod quantifier;

pub use class::{Anchor, CharClass};
pub use escape::{escape_class, escape_literal, LITERAL_SPECIALS};
pub use group::GroupKind;
pub use quantifier::Quantifier;
