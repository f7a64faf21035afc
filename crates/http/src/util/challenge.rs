//! Authentication challenge syntax.
//!
//! `Authorization` serializes a scheme token followed by the caller's
//! pre-encoded credential material. `WWW-Authenticate` parses into a
//! scheme plus its comma-separated, optionally quoted parameters.

use uni_rest::data::{ChallengeRequest, ChallengeResponse, ChallengeScheme};

use crate::error::ParseError;

/// Formats client credentials into an `Authorization` header value.
pub fn format_response(response: &ChallengeResponse) -> String {
    format!("{} {}", response.scheme(), response.credentials())
}

/// Parses a `WWW-Authenticate` header value.
pub fn parse_request(value: &str) -> Result<ChallengeRequest, ParseError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ParseError::invalid_challenge("empty header value"));
    }

    let (scheme, parameters) = match value.split_once(char::is_whitespace) {
        Some((scheme, parameters)) => (scheme, parameters.trim()),
        None => (value, ""),
    };

    let mut request = ChallengeRequest::new(ChallengeScheme::new(scheme));

    for parameter in parameters.split(',') {
        let parameter = parameter.trim();
        if parameter.is_empty() {
            continue;
        }

        let (name, parameter_value) = parameter
            .split_once('=')
            .ok_or_else(|| ParseError::invalid_challenge(format!("parameter without value: {parameter}")))?;

        request.push_parameter(name.trim(), unquote(parameter_value.trim()));
    }

    Ok(request)
}

/// Strips one layer of double quotes, if present.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|value| value.strip_suffix('"'))
        .unwrap_or(value)
}
