//! Client-side call metadata.

use mime::Mime;

use crate::data::{CharacterSet, Encoding, Language, PreferenceList};

/// What the calling client declares about itself: its agent string and its
/// content negotiation preferences along the four standard axes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientInfo {
    agent: Option<String>,
    accepted_media_types: PreferenceList<Mime>,
    accepted_character_sets: PreferenceList<CharacterSet>,
    accepted_encodings: PreferenceList<Encoding>,
    accepted_languages: PreferenceList<Language>,
}

impl ClientInfo {
    /// Creates an empty client info: no agent, no preferences.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the client agent string, if declared.
    pub fn agent(&self) -> Option<&str> {
        self.agent.as_deref()
    }

    /// Sets the client agent string.
    pub fn set_agent<S: Into<String>>(&mut self, agent: S) {
        self.agent = Some(agent.into());
    }

    /// Returns the accepted media types.
    pub fn accepted_media_types(&self) -> &PreferenceList<Mime> {
        &self.accepted_media_types
    }

    /// Returns the accepted media types for modification.
    pub fn accepted_media_types_mut(&mut self) -> &mut PreferenceList<Mime> {
        &mut self.accepted_media_types
    }

    /// Returns the accepted character sets.
    pub fn accepted_character_sets(&self) -> &PreferenceList<CharacterSet> {
        &self.accepted_character_sets
    }

    /// Returns the accepted character sets for modification.
    pub fn accepted_character_sets_mut(&mut self) -> &mut PreferenceList<CharacterSet> {
        &mut self.accepted_character_sets
    }

    /// Returns the accepted content codings.
    pub fn accepted_encodings(&self) -> &PreferenceList<Encoding> {
        &self.accepted_encodings
    }

    /// Returns the accepted content codings for modification.
    pub fn accepted_encodings_mut(&mut self) -> &mut PreferenceList<Encoding> {
        &mut self.accepted_encodings
    }

    /// Returns the accepted languages.
    pub fn accepted_languages(&self) -> &PreferenceList<Language> {
        &self.accepted_languages
    }

    /// Returns the accepted languages for modification.
    pub fn accepted_languages_mut(&mut self) -> &mut PreferenceList<Language> {
        &mut self.accepted_languages
    }
}
