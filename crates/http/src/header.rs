//! The closed set of protocol-managed header names.
//!
//! The converter owns every header it knows how to produce or interpret;
//! callers may add arbitrary extension headers but must not override a
//! protocol-managed one through that path. The set below is fixed and
//! checked in O(1) — `HeaderName` normalizes to lowercase, so membership is
//! case-insensitive by construction.

use std::collections::HashSet;

use http::HeaderName;
use http::header;
use once_cell::sync::Lazy;

/// `Content-MD5`, absent from `http::header`.
pub static CONTENT_MD5: HeaderName = HeaderName::from_static("content-md5");

/// `Set-Cookie2`, the RFC 2965 variant of `Set-Cookie`.
pub static SET_COOKIE2: HeaderName = HeaderName::from_static("set-cookie2");

static STANDARD_HEADERS: Lazy<HashSet<HeaderName>> = Lazy::new(|| {
    HashSet::from([
        header::ACCEPT,
        header::ACCEPT_CHARSET,
        header::ACCEPT_ENCODING,
        header::ACCEPT_LANGUAGE,
        header::ACCEPT_RANGES,
        header::AGE,
        header::ALLOW,
        header::AUTHORIZATION,
        header::CACHE_CONTROL,
        header::CONNECTION,
        header::CONTENT_ENCODING,
        header::CONTENT_LANGUAGE,
        header::CONTENT_LENGTH,
        header::CONTENT_LOCATION,
        CONTENT_MD5.clone(),
        header::CONTENT_RANGE,
        header::CONTENT_TYPE,
        header::COOKIE,
        header::DATE,
        header::ETAG,
        header::EXPECT,
        header::EXPIRES,
        header::FROM,
        header::HOST,
        header::IF_MATCH,
        header::IF_MODIFIED_SINCE,
        header::IF_NONE_MATCH,
        header::IF_RANGE,
        header::IF_UNMODIFIED_SINCE,
        header::LAST_MODIFIED,
        header::LOCATION,
        header::MAX_FORWARDS,
        header::PRAGMA,
        header::PROXY_AUTHENTICATE,
        header::PROXY_AUTHORIZATION,
        header::RANGE,
        header::REFERER,
        header::RETRY_AFTER,
        header::SERVER,
        header::SET_COOKIE,
        SET_COOKIE2.clone(),
        header::TE,
        header::TRAILER,
        header::TRANSFER_ENCODING,
        header::UPGRADE,
        header::USER_AGENT,
        header::VARY,
        header::VIA,
        header::WARNING,
        header::WWW_AUTHENTICATE,
    ])
});

/// Returns true when `name` belongs to the closed protocol-managed set and
/// therefore cannot be supplied as an extension header.
pub fn is_standard_header(name: &HeaderName) -> bool {
    STANDARD_HEADERS.contains(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_case_insensitive() {
        // HeaderName normalizes at construction, whatever the input case
        let name = HeaderName::from_bytes(b"SET-COOKIE2").unwrap();
        assert!(is_standard_header(&name));

        let name = HeaderName::from_bytes(b"Content-Md5").unwrap();
        assert!(is_standard_header(&name));
    }

    #[test]
    fn extension_names_stay_open() {
        let name = HeaderName::from_bytes(b"x-request-id").unwrap();
        assert!(!is_standard_header(&name));
    }

    #[test]
    fn the_set_is_closed_at_fifty() {
        assert_eq!(STANDARD_HEADERS.len(), 50);
    }
}
