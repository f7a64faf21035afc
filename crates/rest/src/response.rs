//! The uniform response.
//!
//! A [`Response`] is mutated in place during one call: the dispatch engine
//! writes status and entity, the wire converter writes status, server info,
//! redirect, cookies, challenge and the raw header bag. Nothing here is
//! shared across calls.

use std::collections::HashSet;

use http::Method;

use crate::data::{ChallengeRequest, CookieSetting, Entity, HeaderList, ServerInfo, Status};

/// A uniform call response.
#[derive(Debug, Clone, Default)]
pub struct Response {
    status: Status,
    entity: Option<Entity>,
    server_info: ServerInfo,
    redirect_ref: Option<String>,
    cookie_settings: Vec<CookieSetting>,
    challenge_request: Option<ChallengeRequest>,
    allowed_methods: HashSet<Method>,
    headers: HeaderList,
}

impl Response {
    /// Creates a fresh response: 200 OK, no entity, empty header bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the call status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Sets the call status.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Returns the response entity, if one was set.
    pub fn entity(&self) -> Option<&Entity> {
        self.entity.as_ref()
    }

    /// Sets the response entity.
    pub fn set_entity(&mut self, entity: Entity) {
        self.entity = Some(entity);
    }

    /// Sets or clears the response entity.
    pub fn set_entity_option(&mut self, entity: Option<Entity>) {
        self.entity = entity;
    }

    /// Returns the server metadata.
    pub fn server_info(&self) -> &ServerInfo {
        &self.server_info
    }

    /// Returns the server metadata for modification.
    pub fn server_info_mut(&mut self) -> &mut ServerInfo {
        &mut self.server_info
    }

    /// Returns the redirect reference, if the server set one.
    pub fn redirect_ref(&self) -> Option<&str> {
        self.redirect_ref.as_deref()
    }

    /// Sets the redirect reference.
    pub fn set_redirect_ref<S: Into<String>>(&mut self, redirect_ref: S) {
        self.redirect_ref = Some(redirect_ref.into());
    }

    /// Returns the cookie settings the server sent.
    pub fn cookie_settings(&self) -> &[CookieSetting] {
        &self.cookie_settings
    }

    /// Appends a cookie setting.
    pub fn push_cookie_setting(&mut self, setting: CookieSetting) {
        self.cookie_settings.push(setting);
    }

    /// Returns the authentication demand, if the server issued one.
    pub fn challenge_request(&self) -> Option<&ChallengeRequest> {
        self.challenge_request.as_ref()
    }

    /// Sets the authentication demand.
    pub fn set_challenge_request(&mut self, challenge_request: ChallengeRequest) {
        self.challenge_request = Some(challenge_request);
    }

    /// Returns the methods the target resource allows.
    pub fn allowed_methods(&self) -> &HashSet<Method> {
        &self.allowed_methods
    }

    /// Returns the allowed-methods set for modification.
    ///
    /// Dispatch recomputes this set from the resource's capability flags on
    /// every report; it is never carried over between decisions.
    pub fn allowed_methods_mut(&mut self) -> &mut HashSet<Method> {
        &mut self.allowed_methods
    }

    /// Returns the raw response header bag.
    ///
    /// The converter stores every wire header here, interpreted or not, so
    /// nothing a server sent is lost.
    pub fn headers(&self) -> &HeaderList {
        &self.headers
    }

    /// Replaces the raw response header bag.
    pub fn set_headers(&mut self, headers: HeaderList) {
        self.headers = headers;
    }
}
