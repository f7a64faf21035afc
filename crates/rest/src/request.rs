//! The uniform request.
//!
//! A [`Request`] is the transport-independent half of a call that the
//! application builds and the connectors read. It is treated as immutable
//! for the duration of one call: converters and routers take `&Request`
//! and never write back into it.

use http::Method;

use crate::data::{
    ChallengeResponse, ClientInfo, Conditions, Cookie, Entity, HeaderList,
};

/// A uniform call request.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    resource_ref: String,
    referrer_ref: Option<String>,
    client_info: ClientInfo,
    conditions: Conditions,
    cookies: Vec<Cookie>,
    challenge_response: Option<ChallengeResponse>,
    entity: Option<Entity>,
    extension_headers: HeaderList,
}

impl Request {
    /// Creates a request for `method` against the target `resource_ref`.
    pub fn new<S: Into<String>>(method: Method, resource_ref: S) -> Self {
        Self {
            method,
            resource_ref: resource_ref.into(),
            referrer_ref: None,
            client_info: ClientInfo::new(),
            conditions: Conditions::new(),
            cookies: Vec::new(),
            challenge_response: None,
            entity: None,
            extension_headers: HeaderList::new(),
        }
    }

    /// Returns the call method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the target resource reference.
    pub fn resource_ref(&self) -> &str {
        &self.resource_ref
    }

    /// Returns the referrer reference, if any.
    pub fn referrer_ref(&self) -> Option<&str> {
        self.referrer_ref.as_deref()
    }

    /// Returns the client metadata and preferences.
    pub fn client_info(&self) -> &ClientInfo {
        &self.client_info
    }

    /// Returns the client metadata for modification while building.
    pub fn client_info_mut(&mut self) -> &mut ClientInfo {
        &mut self.client_info
    }

    /// Returns the call conditions.
    pub fn conditions(&self) -> &Conditions {
        &self.conditions
    }

    /// Returns the call conditions for modification while building.
    pub fn conditions_mut(&mut self) -> &mut Conditions {
        &mut self.conditions
    }

    /// Returns the cookies to send.
    pub fn cookies(&self) -> &[Cookie] {
        &self.cookies
    }

    /// Returns the credentials to offer, if any.
    pub fn challenge_response(&self) -> Option<&ChallengeResponse> {
        self.challenge_response.as_ref()
    }

    /// Returns the request entity, if one is available.
    pub fn entity(&self) -> Option<&Entity> {
        self.entity.as_ref()
    }

    /// Returns true when a request entity is available.
    pub fn is_entity_available(&self) -> bool {
        self.entity.is_some()
    }

    /// Returns the caller-supplied additional wire headers.
    ///
    /// Entries matching a protocol-managed standard header are rejected at
    /// serialization time, not here.
    pub fn extension_headers(&self) -> &HeaderList {
        &self.extension_headers
    }

    /// Returns the additional wire headers for modification while building.
    pub fn extension_headers_mut(&mut self) -> &mut HeaderList {
        &mut self.extension_headers
    }

    /// Sets the referrer reference.
    pub fn set_referrer_ref<S: Into<String>>(&mut self, referrer_ref: S) {
        self.referrer_ref = Some(referrer_ref.into());
    }

    /// Adds a cookie to send.
    pub fn push_cookie(&mut self, cookie: Cookie) {
        self.cookies.push(cookie);
    }

    /// Sets the credentials to offer.
    pub fn set_challenge_response(&mut self, challenge_response: ChallengeResponse) {
        self.challenge_response = Some(challenge_response);
    }

    /// Attaches the request entity.
    pub fn set_entity(&mut self, entity: Entity) {
        self.entity = Some(entity);
    }
}
