//! Entity metadata tokens.
//!
//! Languages, character sets and encodings are carried as opaque tokens
//! compared case-insensitively, as HTTP requires. Media types use
//! [`mime::Mime`] directly and are re-exported from the crate root.

use std::fmt;

/// A natural language tag, such as `en` or `fr-CA`.
#[derive(Debug, Clone, Eq)]
pub struct Language(String);

impl Language {
    /// The `*` wildcard matching any language.
    pub fn all() -> Self {
        Self("*".to_string())
    }

    /// Creates a language from its tag.
    pub fn new<S: Into<String>>(tag: S) -> Self {
        Self(tag.into())
    }

    /// Returns the tag as given.
    pub fn tag(&self) -> &str {
        &self.0
    }

    /// Returns the primary subtag (`en` for `en-US`).
    pub fn primary_tag(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// Returns true for the `*` wildcard.
    pub fn is_wildcard(&self) -> bool {
        self.0 == "*"
    }

    /// Returns true when `other` is covered by this tag: an exact
    /// case-insensitive match, a primary-subtag match (`en` covers `en-US`),
    /// or the wildcard.
    pub fn includes(&self, other: &Language) -> bool {
        self.is_wildcard()
            || self.0.eq_ignore_ascii_case(other.tag())
            || self.0.eq_ignore_ascii_case(other.primary_tag())
    }
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A character set token, such as `UTF-8`.
#[derive(Debug, Clone, Eq)]
pub struct CharacterSet(String);

impl CharacterSet {
    /// Creates a character set from its token.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// Returns the token as given.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl PartialEq for CharacterSet {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A content coding token, such as `gzip`.
#[derive(Debug, Clone, Eq)]
pub struct Encoding(String);

impl Encoding {
    /// Creates an encoding from its token.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// Returns the token as given.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Encoding {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_matching() {
        let en = Language::new("en");
        let en_us = Language::new("en-US");

        assert!(en.includes(&en_us));
        assert!(!en_us.includes(&en));
        assert!(Language::all().includes(&en_us));
        assert_eq!(Language::new("EN-us"), en_us);
    }

    #[test]
    fn tokens_compare_case_insensitively() {
        assert_eq!(CharacterSet::new("utf-8"), CharacterSet::new("UTF-8"));
        assert_eq!(Encoding::new("GZIP"), Encoding::new("gzip"));
    }
}
