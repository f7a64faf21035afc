//! Content negotiation preferences.
//!
//! A preference associates a negotiable value (media type, character set,
//! encoding, language) with a quality in `[0.0, 1.0]`. Evaluation does not
//! depend on list order, but the order is preserved so serialization stays
//! deterministic.

/// A single negotiable value with its quality.
#[derive(Debug, Clone, PartialEq)]
pub struct Preference<T> {
    value: T,
    quality: f32,
}

impl<T> Preference<T> {
    /// Creates a preference with the implicit default quality of 1.0.
    pub fn new(value: T) -> Self {
        Self { value, quality: 1.0 }
    }

    /// Creates a preference with an explicit quality.
    ///
    /// The quality is stored as given; range validation happens at
    /// serialization time so that a malformed preference degrades to a
    /// skipped header instead of a panic.
    pub fn with_quality(value: T, quality: f32) -> Self {
        Self { value, quality }
    }

    /// Returns the preferred value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the quality.
    pub fn quality(&self) -> f32 {
        self.quality
    }
}

/// An ordered collection of preferences for one negotiation axis.
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceList<T> {
    preferences: Vec<Preference<T>>,
}

impl<T> PreferenceList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self { preferences: Vec::new() }
    }

    /// Appends a preference, keeping insertion order.
    pub fn push(&mut self, preference: Preference<T>) {
        self.preferences.push(preference);
    }

    /// Number of preferences.
    pub fn len(&self) -> usize {
        self.preferences.len()
    }

    /// Returns true when the caller expressed no preference on this axis.
    pub fn is_empty(&self) -> bool {
        self.preferences.is_empty()
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Preference<T>> {
        self.preferences.iter()
    }
}

impl<T> Default for PreferenceList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<Preference<T>>> for PreferenceList<T> {
    fn from(preferences: Vec<Preference<T>>) -> Self {
        Self { preferences }
    }
}

impl<'a, T> IntoIterator for &'a PreferenceList<T> {
    type Item = &'a Preference<T>;
    type IntoIter = std::slice::Iter<'a, Preference<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.preferences.iter()
    }
}
