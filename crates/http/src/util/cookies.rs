//! Cookie header syntax.
//!
//! Requests carry cookies as a single `name=value; name=value` header with
//! no attributes. Responses carry one `Set-Cookie`/`Set-Cookie2` header per
//! cookie, with storage attributes. Parsing is per header value: a
//! malformed setting fails on its own and the caller skips just that
//! header.

use uni_rest::data::{Cookie, CookieSetting};

use crate::error::ParseError;

/// Formats request cookies into a single `Cookie` header value.
pub fn format(cookies: &[Cookie]) -> String {
    let mut value = String::new();

    for (index, cookie) in cookies.iter().enumerate() {
        if index > 0 {
            value.push_str("; ");
        }
        value.push_str(cookie.name());
        value.push('=');
        value.push_str(cookie.value());
    }

    value
}

/// Parses one `Set-Cookie`/`Set-Cookie2` header value.
///
/// The first `name=value` pair is the cookie itself; the remaining
/// semicolon-separated parts are attributes, matched case-insensitively.
/// Unknown attributes are ignored.
pub fn parse_setting(value: &str) -> Result<CookieSetting, ParseError> {
    let mut parts = value.split(';');

    let pair = parts.next().unwrap_or("").trim();
    let (name, cookie_value) = pair
        .split_once('=')
        .ok_or_else(|| ParseError::invalid_cookie_setting(format!("missing name=value pair: {pair}")))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::invalid_cookie_setting("empty cookie name"));
    }

    let mut setting = CookieSetting::new(name, cookie_value.trim());

    for part in parts {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let (attribute, attribute_value) = match part.split_once('=') {
            Some((attribute, attribute_value)) => (attribute.trim(), attribute_value.trim()),
            None => (part, ""),
        };

        if attribute.eq_ignore_ascii_case("secure") {
            setting.set_secure(true);
        } else if attribute.eq_ignore_ascii_case("domain") {
            setting.set_domain(attribute_value);
        } else if attribute.eq_ignore_ascii_case("path") {
            setting.set_path(attribute_value);
        } else if attribute.eq_ignore_ascii_case("comment") {
            setting.set_comment(attribute_value);
        } else if attribute.eq_ignore_ascii_case("version") {
            let version = attribute_value
                .trim_matches('"')
                .parse::<u8>()
                .map_err(|_| ParseError::invalid_cookie_setting(format!("version is not a number: {attribute_value}")))?;
            setting.set_version(version);
        } else if attribute.eq_ignore_ascii_case("max-age") {
            let max_age = attribute_value
                .parse::<u32>()
                .map_err(|_| ParseError::invalid_cookie_setting(format!("max-age is not a number: {attribute_value}")))?;
            setting.set_max_age(max_age);
        } else if attribute.eq_ignore_ascii_case("expires") {
            let expires = httpdate::parse_http_date(attribute_value)
                .map_err(|e| ParseError::invalid_cookie_setting(format!("unparsable expires date: {e}")))?;
            setting.set_expires(expires);
        }
    }

    Ok(setting)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_cookies_join_without_attributes() {
        let mut session = Cookie::new("session", "abc123");
        session.set_path("/app");

        let cookies = vec![session, Cookie::new("theme", "dark")];
        assert_eq!(format(&cookies), "session=abc123; theme=dark");
    }

    #[test]
    fn setting_parses_with_attributes() {
        let setting =
            parse_setting("id=a3fWa; Domain=example.com; Path=/; Max-Age=2592000; Secure; Version=1").unwrap();

        assert_eq!(setting.name(), "id");
        assert_eq!(setting.value(), "a3fWa");
        assert_eq!(setting.domain(), Some("example.com"));
        assert_eq!(setting.path(), Some("/"));
        assert_eq!(setting.max_age(), Some(2_592_000));
        assert!(setting.secure());
        assert_eq!(setting.version(), 1);
    }

    #[test]
    fn setting_parses_expires_date() {
        let setting = parse_setting("id=x; Expires=Sun, 06 Nov 1994 08:49:37 GMT").unwrap();
        assert!(setting.expires().is_some());
    }

    #[test]
    fn unknown_attributes_are_ignored() {
        let setting = parse_setting("id=x; SameSite=Lax; HttpOnly").unwrap();
        assert_eq!(setting.name(), "id");
        assert_eq!(setting.value(), "x");
    }

    #[test]
    fn missing_pair_is_an_error() {
        assert!(matches!(parse_setting("just-a-token"), Err(ParseError::InvalidCookieSetting { .. })));
        assert!(matches!(parse_setting("=value"), Err(ParseError::InvalidCookieSetting { .. })));
    }

    #[test]
    fn bad_max_age_is_an_error() {
        assert!(parse_setting("id=x; Max-Age=soon").is_err());
    }
}
