//! Call status handling.
//!
//! A [`Status`] carries the numeric result code of a handled call plus an
//! optional human readable description. Unlike `http::StatusCode` it also
//! covers connector-side result codes above the HTTP range (such as
//! [`Status::CONNECTOR_ERROR_INTERNAL`]), which is why it is a dedicated
//! type instead of a re-export.

use std::borrow::Cow;
use std::fmt;

/// The result status of a handled call.
///
/// A status is a numeric code plus an optional description that refines the
/// generic reason phrase for one specific occurrence (for example the cause
/// of a connector failure). Equality compares codes only, so a described
/// status still matches its bare constant.
#[derive(Debug, Clone, Eq)]
pub struct Status {
    code: u16,
    description: Option<Cow<'static, str>>,
}

impl PartialEq for Status {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Status {
    /// The request has succeeded.
    pub const SUCCESS_OK: Status = Status::new(200);

    /// The server has not found anything matching the resource reference.
    pub const CLIENT_ERROR_NOT_FOUND: Status = Status::new(404);

    /// The method is not allowed on the target resource.
    pub const CLIENT_ERROR_METHOD_NOT_ALLOWED: Status = Status::new(405);

    /// The resource cannot produce (or the request lacks) an acceptable entity.
    pub const CLIENT_ERROR_NOT_ACCEPTABLE: Status = Status::new(406);

    /// The server does not support the functionality required by the request.
    pub const SERVER_ERROR_NOT_IMPLEMENTED: Status = Status::new(501);

    /// The connector failed internally while processing the call.
    ///
    /// This is a connector-side code, distinct from any server-side HTTP
    /// error, and deliberately lies outside the 100..=599 HTTP range.
    pub const CONNECTOR_ERROR_INTERNAL: Status = Status::new(1002);

    /// Creates a status from its numeric code, without description.
    #[inline]
    pub const fn new(code: u16) -> Self {
        Self { code, description: None }
    }

    /// Returns a copy of this status carrying the given description.
    pub fn with_description<S: Into<Cow<'static, str>>>(&self, description: S) -> Self {
        Self { code: self.code, description: Some(description.into()) }
    }

    /// Returns the numeric code.
    #[inline]
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Returns the occurrence-specific description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the generic reason phrase for the code, when one is defined.
    pub fn reason_phrase(&self) -> Option<&'static str> {
        match self.code {
            200 => Some("OK"),
            404 => Some("Not Found"),
            405 => Some("Method Not Allowed"),
            406 => Some("Not Acceptable"),
            501 => Some("Not Implemented"),
            1002 => Some("Internal Connector Error"),
            _ => http::StatusCode::from_u16(self.code).ok().and_then(|code| code.canonical_reason()),
        }
    }

    /// Returns true for codes in the 2xx success class.
    #[inline]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    /// Returns true for codes in the 4xx client error class.
    #[inline]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.code)
    }

    /// Returns true for codes in the 5xx server error class.
    #[inline]
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.code)
    }

    /// Returns true for connector-side codes (1000 and above).
    #[inline]
    pub fn is_connector_error(&self) -> bool {
        self.code >= 1000
    }

    /// Returns true if the code belongs to any error class.
    pub fn is_error(&self) -> bool {
        self.is_client_error() || self.is_server_error() || self.is_connector_error()
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::SUCCESS_OK
    }
}

impl From<u16> for Status {
    fn from(code: u16) -> Self {
        Status::new(code)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)?;
        match (self.description.as_deref(), self.reason_phrase()) {
            (Some(description), _) => write!(f, " ({description})"),
            (None, Some(phrase)) => write!(f, " ({phrase})"),
            (None, None) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert!(Status::SUCCESS_OK.is_success());
        assert!(Status::CLIENT_ERROR_NOT_FOUND.is_client_error());
        assert!(Status::SERVER_ERROR_NOT_IMPLEMENTED.is_server_error());
        assert!(Status::CONNECTOR_ERROR_INTERNAL.is_connector_error());
        assert!(!Status::CONNECTOR_ERROR_INTERNAL.is_client_error());
        assert!(Status::CONNECTOR_ERROR_INTERNAL.is_error());
    }

    #[test]
    fn description_overrides_reason_phrase() {
        let status = Status::CLIENT_ERROR_NOT_ACCEPTABLE.with_description("Missing request entity");
        assert_eq!(status.code(), 406);
        assert_eq!(status.description(), Some("Missing request entity"));
        assert_eq!(status.to_string(), "406 (Missing request entity)");
    }

    #[test]
    fn equality_compares_codes_only() {
        assert_eq!(Status::SUCCESS_OK.with_description("done"), Status::SUCCESS_OK);
        assert_eq!(Status::new(404), Status::CLIENT_ERROR_NOT_FOUND);
        assert_ne!(Status::new(404), Status::new(405));
    }
}
