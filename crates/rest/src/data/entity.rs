//! Call entities.
//!
//! An [`Entity`] is the payload of a request or response together with its
//! descriptive facets: media type, content coding and natural language.
//! Each facet is independent and optional; length and transfer framing are
//! transport concerns and never appear here.

use bytes::Bytes;
use mime::Mime;

use crate::data::{Encoding, Language};

/// A request or response payload with its descriptive metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    data: Bytes,
    media_type: Option<Mime>,
    encoding: Option<Encoding>,
    language: Option<Language>,
}

impl Entity {
    /// Creates an entity from raw bytes, without metadata.
    pub fn from_bytes<B: Into<Bytes>>(data: B) -> Self {
        Self { data: data.into(), media_type: None, encoding: None, language: None }
    }

    /// Creates an entity from raw bytes with a media type.
    pub fn new<B: Into<Bytes>>(data: B, media_type: Mime) -> Self {
        Self { data: data.into(), media_type: Some(media_type), encoding: None, language: None }
    }

    /// Builder-style language facet.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Builder-style encoding facet.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Returns the payload bytes.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Returns the payload size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true when the payload is zero bytes long.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the media type facet, if present.
    pub fn media_type(&self) -> Option<&Mime> {
        self.media_type.as_ref()
    }

    /// Returns the content coding facet, if present.
    pub fn encoding(&self) -> Option<&Encoding> {
        self.encoding.as_ref()
    }

    /// Returns the language facet, if present.
    pub fn language(&self) -> Option<&Language> {
        self.language.as_ref()
    }

    /// Sets the media type facet.
    pub fn set_media_type(&mut self, media_type: Mime) {
        self.media_type = Some(media_type);
    }

    /// Sets the content coding facet.
    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.encoding = Some(encoding);
    }

    /// Sets the language facet.
    pub fn set_language(&mut self, language: Language) {
        self.language = Some(language);
    }
}
