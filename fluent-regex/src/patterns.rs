//! Ready-made patterns, assembled with the [`PatternBuilder`].

use lazy_static::lazy_static;
use regex::Regex;

use crate::{BuildError, Flags, PatternBuilder};

const OCTET: &str = "25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9]";

lazy_static! {
    /// Dotted-decimal IPv4 address between word boundaries. Each of the four
    /// octets (0 to 255) is captured by its own group.
    ///
    /// ```rust
    /// use fluent_regex::patterns::IPV4_ADDRESS;
    ///
    /// let caps = IPV4_ADDRESS.captures("gateway 192.168.0.1").unwrap();
    /// assert_eq!(&caps[1], "192");
    /// assert_eq!(&caps[4], "1");
    /// ```
    pub static ref IPV4_ADDRESS: Regex =
        ipv4_address().expect("the IPv4 pattern is well-formed");
}

/// Builds a fresh copy of [`struct@IPV4_ADDRESS`].
pub fn ipv4_address() -> Result<Regex, BuildError> {
    let mut b = PatternBuilder::new();
    b.word_boundary();
    for i in 0..4 {
        if i > 0 {
            b.literal(".", None);
        }
        b.start_group().raw(OCTET, None).end_group(None)?;
    }
    b.word_boundary();
    b.compile(Flags::NONE)
}

#[cfg(test)]
mod tests {
    use super::{ipv4_address, IPV4_ADDRESS, OCTET};
    use pretty_assertions::assert_eq;

    #[test]
    fn assembled_pattern() {
        let group = format!("({OCTET})");
        let expected = format!(r"\b{group}\.{group}\.{group}\.{group}\b");
        assert_eq!(ipv4_address().unwrap().as_str(), expected);
    }

    #[test]
    fn four_groups_plus_the_whole_match() {
        assert_eq!(IPV4_ADDRESS.captures_len(), 5);
    }
}
