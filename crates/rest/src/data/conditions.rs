//! Conditional call data.

use std::time::SystemTime;

/// An opaque entity tag name.
///
/// Tags are carried verbatim; no quoting or weakness semantics are applied
/// at this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag(String);

impl Tag {
    /// Creates a tag from its opaque name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// Returns the tag name as given.
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// The set of conditions attached to a request.
///
/// Empty tag lists and unset instants mean the corresponding conditional
/// header is not emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conditions {
    match_tags: Vec<Tag>,
    none_match: Vec<Tag>,
    modified_since: Option<SystemTime>,
    unmodified_since: Option<SystemTime>,
}

impl Conditions {
    /// Creates an unconditioned set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags the target entity must match (`If-Match`).
    pub fn match_tags(&self) -> &[Tag] {
        &self.match_tags
    }

    /// Tags the target entity must not match (`If-None-Match`).
    pub fn none_match(&self) -> &[Tag] {
        &self.none_match
    }

    /// The `If-Modified-Since` instant, if set.
    pub fn modified_since(&self) -> Option<SystemTime> {
        self.modified_since
    }

    /// The `If-Unmodified-Since` instant, if set.
    pub fn unmodified_since(&self) -> Option<SystemTime> {
        self.unmodified_since
    }

    /// Adds an `If-Match` tag.
    pub fn push_match_tag(&mut self, tag: Tag) {
        self.match_tags.push(tag);
    }

    /// Adds an `If-None-Match` tag.
    pub fn push_none_match(&mut self, tag: Tag) {
        self.none_match.push(tag);
    }

    /// Sets the `If-Modified-Since` instant.
    pub fn set_modified_since(&mut self, instant: SystemTime) {
        self.modified_since = Some(instant);
    }

    /// Sets the `If-Unmodified-Since` instant.
    pub fn set_unmodified_since(&mut self, instant: SystemTime) {
        self.unmodified_since = Some(instant);
    }
}
