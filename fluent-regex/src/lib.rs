#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
//! ## This Documentation
//!
//! * [`PatternBuilder`]: the fluent builder
//! * [`Quantifier`], [`CharClass`], [`Anchor`], [`GroupKind`]: the pieces it assembles
//! * [`Flags`] and [`Config`]: compile options
//! * [`patterns`]: ready-made patterns (feature `patterns`)
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![allow(unexpected_cfgs)]

pub use fluent_regex_syntax::*;

mod builder;
pub use builder::PatternBuilder;

mod error;
pub use error::BuildError;

mod options;
pub use options::{Config, Flags};

#[cfg(feature = "patterns")]
pub mod patterns;

/// The compiled pattern type produced by [`PatternBuilder::compile`].
pub use regex::Regex;
