//! Authentication challenges.
//!
//! A [`ChallengeResponse`] is what a client offers (`Authorization`); a
//! [`ChallengeRequest`] is what a server demands (`WWW-Authenticate`). Both
//! are a scheme token plus scheme-specific material, kept opaque at this
//! layer — credential encoding is the caller's business.

use std::fmt;

/// An HTTP authentication scheme token.
#[derive(Debug, Clone, Eq)]
pub struct ChallengeScheme(String);

impl ChallengeScheme {
    /// The `Basic` scheme.
    pub fn basic() -> Self {
        Self("Basic".to_string())
    }

    /// The `Digest` scheme.
    pub fn digest() -> Self {
        Self("Digest".to_string())
    }

    /// Creates a scheme from an arbitrary token.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// Returns the scheme token as given.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl PartialEq for ChallengeScheme {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl fmt::Display for ChallengeScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Credentials a client attaches to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeResponse {
    scheme: ChallengeScheme,
    credentials: String,
}

impl ChallengeResponse {
    /// Creates a challenge response from a scheme and pre-encoded credentials.
    pub fn new<S: Into<String>>(scheme: ChallengeScheme, credentials: S) -> Self {
        Self { scheme, credentials: credentials.into() }
    }

    /// Returns the authentication scheme.
    pub fn scheme(&self) -> &ChallengeScheme {
        &self.scheme
    }

    /// Returns the opaque credential material.
    pub fn credentials(&self) -> &str {
        &self.credentials
    }
}

/// An authentication demand a server attaches to a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeRequest {
    scheme: ChallengeScheme,
    parameters: Vec<(String, String)>,
}

impl ChallengeRequest {
    /// Creates a challenge request without parameters.
    pub fn new(scheme: ChallengeScheme) -> Self {
        Self { scheme, parameters: Vec::new() }
    }

    /// Returns the authentication scheme.
    pub fn scheme(&self) -> &ChallengeScheme {
        &self.scheme
    }

    /// Appends a scheme parameter, keeping order.
    pub fn push_parameter<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        self.parameters.push((name.into(), value.into()));
    }

    /// Returns all scheme parameters in order.
    pub fn parameters(&self) -> &[(String, String)] {
        &self.parameters
    }

    /// Returns the first parameter stored under `name`, compared
    /// case-insensitively.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|(parameter, _)| parameter.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns the protection realm, when the scheme carries one.
    pub fn realm(&self) -> Option<&str> {
        self.parameter("realm")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_compares_case_insensitively() {
        assert_eq!(ChallengeScheme::basic(), ChallengeScheme::new("BASIC"));
        assert_ne!(ChallengeScheme::basic(), ChallengeScheme::digest());
    }

    #[test]
    fn realm_lookup() {
        let mut request = ChallengeRequest::new(ChallengeScheme::basic());
        request.push_parameter("Realm", "restricted");
        assert_eq!(request.realm(), Some("restricted"));
        assert_eq!(request.parameter("missing"), None);
    }
}
