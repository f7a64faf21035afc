//! Ordered header list.
//!
//! Wire calls expose their headers as ordered lists rather than maps: order
//! is significant for deterministic serialization, and repeated names (such
//! as `Set-Cookie`) are legal. [`HeaderList`] keeps the insertion order and
//! offers case-insensitive lookup, which `http::HeaderName` gives us for
//! free through its lowercase normalization.

use http::{HeaderName, HeaderValue};

/// A single header entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    name: HeaderName,
    value: HeaderValue,
}

impl Header {
    /// Creates a new header entry.
    pub fn new(name: HeaderName, value: HeaderValue) -> Self {
        Self { name, value }
    }

    /// Returns the header name.
    pub fn name(&self) -> &HeaderName {
        &self.name
    }

    /// Returns the header value.
    pub fn value(&self) -> &HeaderValue {
        &self.value
    }
}

/// An ordered list of headers, duplicates allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderList {
    headers: Vec<Header>,
}

impl HeaderList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Returns true if the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Appends an entry, preserving insertion order and any duplicates.
    pub fn append(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.push(Header::new(name, value));
    }

    /// Returns the first value stored under `name`.
    pub fn get(&self, name: &HeaderName) -> Option<&HeaderValue> {
        self.headers.iter().find(|header| header.name() == name).map(Header::value)
    }

    /// Returns every value stored under `name`, in insertion order.
    pub fn get_all<'a>(&'a self, name: &'a HeaderName) -> impl Iterator<Item = &'a HeaderValue> {
        self.headers.iter().filter(move |header| header.name() == name).map(Header::value)
    }

    /// Iterates over all entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Header> {
        self.headers.iter()
    }
}

impl<'a> IntoIterator for &'a HeaderList {
    type Item = &'a Header;
    type IntoIter = std::slice::Iter<'a, Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.headers.iter()
    }
}

impl FromIterator<(HeaderName, HeaderValue)> for HeaderList {
    fn from_iter<I: IntoIterator<Item = (HeaderName, HeaderValue)>>(iter: I) -> Self {
        Self { headers: iter.into_iter().map(|(name, value)| Header::new(name, value)).collect() }
    }
}
