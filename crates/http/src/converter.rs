//! Translation between uniform calls and wire calls.
//!
//! The [`ClientConverter`] is the client-side half of the translation
//! layer: it serializes a uniform [`Request`] into the request headers of a
//! [`WireCall`], commits the exchange, and interprets the wire response
//! headers back into the uniform [`Response`]. It is stateless — every
//! operation is a pure function of the uniform model and the wire call,
//! with `tracing` as the only side channel.
//!
//! # Error containment
//!
//! Failures are handled in two tiers. A single header that cannot be
//! formatted or parsed is logged and skipped; the rest of the call
//! proceeds. An error escaping [`ClientConverter::commit`] is logged and
//! swallowed, leaving the response however far it got, and an error
//! escaping the response-header pass degrades the response status to the
//! connector-internal error code instead of propagating.

use http::{HeaderName, HeaderValue, Method, header};
use std::fmt::Display;
use tracing::{debug, info, warn};

use uni_rest::data::{HeaderList, PreferenceList, Status, Tag};
use uni_rest::{Request, Response};

use crate::call::{WireCall, WireTransport};
use crate::error::{ParseError, WireError};
use crate::header::{SET_COOKIE2, is_standard_header};
use crate::util::{challenge, cookies, preference};

/// The library identification sent when the caller declares no agent.
pub const AGENT: &str = concat!("uni-http/", env!("CARGO_PKG_VERSION"));

/// Converts uniform calls into wire calls and back.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientConverter;

impl ClientConverter {
    /// Creates a converter.
    pub fn new() -> Self {
        Self
    }

    /// Creates a wire call bound to the request's target and populates its
    /// request headers.
    pub fn to_wire<T: WireTransport>(
        &self,
        transport: &T,
        request: &Request,
        response: &Response,
    ) -> Result<T::Call, WireError> {
        let mut call = transport.create(request)?;
        self.write_request_headers(&mut call, request, response);
        Ok(call)
    }

    /// Serializes the uniform request into the call's request headers.
    ///
    /// Assembly order is fixed: Host, User-Agent, conditionals, cookies,
    /// referrer, the four Accept axes, Authorization, the entity's
    /// descriptive headers, and the caller's extension headers last.
    /// Entity length and transfer framing are left to the transport.
    pub fn write_request_headers<C: WireCall + ?Sized>(&self, call: &mut C, request: &Request, response: &Response) {
        let headers = call.request_headers_mut();

        // The host name and port may differ from the ones in the target
        // resource reference, so they travel on the server info.
        if let Some(name) = response.server_info().name() {
            let host = match response.server_info().port() {
                Some(port) => format!("{name}:{port}"),
                None => name.to_string(),
            };
            append_header(headers, header::HOST, &host);
        }

        match request.client_info().agent() {
            Some(agent) => append_header(headers, header::USER_AGENT, agent),
            None => append_header(headers, header::USER_AGENT, AGENT),
        }

        let conditions = request.conditions();
        if !conditions.match_tags().is_empty() {
            append_header(headers, header::IF_MATCH, &join_tags(conditions.match_tags()));
        }
        if let Some(instant) = conditions.modified_since() {
            append_header(headers, header::IF_MODIFIED_SINCE, &httpdate::fmt_http_date(instant));
        }
        if !conditions.none_match().is_empty() {
            append_header(headers, header::IF_NONE_MATCH, &join_tags(conditions.none_match()));
        }
        if let Some(instant) = conditions.unmodified_since() {
            append_header(headers, header::IF_UNMODIFIED_SINCE, &httpdate::fmt_http_date(instant));
        }

        if !request.cookies().is_empty() {
            append_header(headers, header::COOKIE, &cookies::format(request.cookies()));
        }

        if let Some(referrer) = request.referrer_ref() {
            append_header(headers, header::REFERER, referrer);
        }

        let client_info = request.client_info();
        if client_info.accepted_media_types().is_empty() {
            // no media preference means everything is welcome
            append_header(headers, header::ACCEPT, mime::STAR_STAR.as_ref());
        } else {
            append_preferences(headers, header::ACCEPT, client_info.accepted_media_types());
        }
        if !client_info.accepted_character_sets().is_empty() {
            append_preferences(headers, header::ACCEPT_CHARSET, client_info.accepted_character_sets());
        }
        if !client_info.accepted_encodings().is_empty() {
            append_preferences(headers, header::ACCEPT_ENCODING, client_info.accepted_encodings());
        }
        if !client_info.accepted_languages().is_empty() {
            append_preferences(headers, header::ACCEPT_LANGUAGE, client_info.accepted_languages());
        }

        if let Some(challenge_response) = request.challenge_response() {
            append_header(headers, header::AUTHORIZATION, &challenge::format_response(challenge_response));
        }

        if let Some(entity) = request.entity() {
            if let Some(media_type) = entity.media_type() {
                append_header(headers, header::CONTENT_TYPE, media_type.as_ref());
            }
            if let Some(encoding) = entity.encoding() {
                append_header(headers, header::CONTENT_ENCODING, encoding.name());
            }
            if let Some(language) = entity.language() {
                append_header(headers, header::CONTENT_LANGUAGE, language.tag());
            }
        }

        for extension in request.extension_headers() {
            if is_standard_header(extension.name()) {
                // Standard headers can't be overridden through the
                // extension path.
                warn!(header = %extension.name(), "addition of the standard header is not allowed");
            } else {
                headers.append(extension.name().clone(), extension.value().clone());
            }
        }
    }

    /// Commits the call: sends the request, then folds the wire response
    /// back into the uniform response.
    ///
    /// Never fails: an error anywhere in the sequence is logged and the
    /// response is left however far it got. Callers inspect the response
    /// status rather than rely on an exception-free path.
    pub async fn commit<C: WireCall + ?Sized>(&self, call: &mut C, request: &Request, response: &mut Response) {
        if let Err(e) = self.try_commit(call, request, response).await {
            info!(cause = %e, "error intercepted while committing the call");
        }
    }

    async fn try_commit<C: WireCall + ?Sized>(
        &self,
        call: &mut C,
        request: &Request,
        response: &mut Response,
    ) -> Result<(), WireError> {
        let status = call.send_request(request.entity()).await?;
        response.set_status(status);

        if let Some(address) = call.server_address() {
            response.server_info_mut().set_address(address);
        }

        self.read_response_headers(call, response);

        response.set_entity_option(call.response_entity());
        Ok(())
    }

    /// Interprets the wire response headers into the uniform response.
    ///
    /// The full raw header list is stored into the response's header bag
    /// before interpretation, so nothing a server sent is lost. An error
    /// escaping the pass degrades the response status to the
    /// connector-internal error code with the cause attached.
    pub fn read_response_headers<C: WireCall + ?Sized>(&self, call: &C, response: &mut Response) {
        if let Err(e) = self.try_read_response_headers(call, response) {
            debug!(cause = %e, "an error occurred while processing the response headers");
            response.set_status(
                Status::CONNECTOR_ERROR_INTERNAL.with_description(format!("Unable to process the response. {e}")),
            );
        }
    }

    fn try_read_response_headers<C: WireCall + ?Sized>(
        &self,
        call: &C,
        response: &mut Response,
    ) -> Result<(), WireError> {
        response.set_headers(call.response_headers().clone());

        for header in call.response_headers() {
            let name = header.name();
            let value = header
                .value()
                .to_str()
                .map_err(|_| ParseError::invalid_header_value(format!("header {name} is not visible ascii")))?;

            if name == header::LOCATION {
                response.set_redirect_ref(value);
            } else if name == header::SET_COOKIE || name == &SET_COOKIE2 {
                match cookies::parse_setting(value) {
                    Ok(setting) => response.push_cookie_setting(setting),
                    Err(e) => {
                        warn!(header = value, cause = %e, "error while parsing a cookie setting, skipping the header");
                    }
                }
            } else if name == header::WWW_AUTHENTICATE {
                let challenge_request = challenge::parse_request(value)?;
                response.set_challenge_request(challenge_request);
            } else if name == header::SERVER {
                response.server_info_mut().set_agent(value);
            } else if name == header::ALLOW {
                for token in value.split(|c: char| c == ',' || c.is_whitespace()).filter(|token| !token.is_empty()) {
                    let method = Method::from_bytes(token.as_bytes())
                        .map_err(|_| ParseError::invalid_method(token))?;
                    response.allowed_methods_mut().insert(method);
                }
            }
        }

        Ok(())
    }
}

/// Appends one header, or warns and drops it when the value is not a legal
/// header value.
fn append_header(headers: &mut HeaderList, name: HeaderName, value: &str) {
    match HeaderValue::from_str(value) {
        Ok(value) => headers.append(name, value),
        Err(e) => warn!(header = %name, cause = %e, "unable to format the header value, skipping the header"),
    }
}

/// Appends one preference header, or warns and drops just that header when
/// the list cannot be formatted.
fn append_preferences<T: Display>(headers: &mut HeaderList, name: HeaderName, preferences: &PreferenceList<T>) {
    match preference::format(preferences) {
        Ok(value) => append_header(headers, name, &value),
        Err(e) => warn!(header = %name, cause = %e, "unable to format the preference header, skipping the header"),
    }
}

/// Joins entity tag names with commas, raw, no quoting.
fn join_tags(tags: &[Tag]) -> String {
    let mut value = String::new();
    for (index, tag) in tags.iter().enumerate() {
        if index > 0 {
            value.push_str(", ");
        }
        value.push_str(tag.name());
    }
    value
}
