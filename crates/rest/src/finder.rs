//! Resource dispatch.
//!
//! The [`Finder`] routes one uniform call to the operations of a target
//! resource. It resolves the target through a caller-supplied
//! [`TargetLookup`], applies per-method policy from the resource's
//! capability flags, and writes the resulting status and entity into the
//! response. It holds no per-call state: the only thing shared across calls
//! is the started flag of its lifecycle.
//!
//! Method policy:
//!
//! - GET/HEAD negotiate a representation from the resource's variants; the
//!   transport layer is responsible for suppressing the HEAD body.
//! - POST/PUT require a request entity and delegate to the resource.
//! - DELETE delegates to the resource.
//! - A method the resource does not allow reports 405 together with the
//!   currently allowed methods.
//! - A reference that resolves to no resource reports 404.
//! - CONNECT and TRACE report 501; OPTIONS and unrecognized methods leave
//!   the response untouched.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use http::Method;
use tracing::{debug, trace};

use crate::data::{Language, Status};
use crate::negotiate;
use crate::resource::Resource;
use crate::{Request, Response};

/// The agent string stamped on responses this engine initializes.
pub const SERVER_AGENT: &str = concat!("uni-rest/", env!("CARGO_PKG_VERSION"));

/// Resolves the target resource of a call.
///
/// Polymorphic over the request/response pair: a lookup may inspect the
/// resource reference, headers or anything else, and may annotate the
/// response while resolving.
#[async_trait]
pub trait TargetLookup: Send + Sync {
    /// Returns the target resource, or `None` when the reference resolves
    /// to nothing.
    async fn find_target(&self, request: &Request, response: &mut Response) -> Option<Arc<dyn Resource>>;
}

/// A target lookup wrapping a plain closure over the request.
pub struct LookupFn<F>(F);

#[async_trait]
impl<F> TargetLookup for LookupFn<F>
where
    F: Fn(&Request) -> Option<Arc<dyn Resource>> + Send + Sync,
{
    async fn find_target(&self, request: &Request, _response: &mut Response) -> Option<Arc<dyn Resource>> {
        (self.0)(request)
    }
}

/// Creates a [`TargetLookup`] from a closure.
pub fn lookup_fn<F>(f: F) -> LookupFn<F>
where
    F: Fn(&Request) -> Option<Arc<dyn Resource>> + Send + Sync,
{
    LookupFn(f)
}

/// Dispatches uniform calls to the operations of found resources.
pub struct Finder<L> {
    lookup: L,
    fallback_language: Option<Language>,
    started: AtomicBool,
}

impl<L: TargetLookup> Finder<L> {
    /// Creates a stopped finder around the given target lookup.
    pub fn new(lookup: L) -> Self {
        Self { lookup, fallback_language: None, started: AtomicBool::new(false) }
    }

    /// Sets the language to fall back to when negotiation cannot produce a
    /// language match.
    pub fn with_fallback_language(mut self, language: Language) -> Self {
        self.fallback_language = Some(language);
        self
    }

    /// Returns the configured fallback language, if any.
    pub fn fallback_language(&self) -> Option<&Language> {
        self.fallback_language.as_ref()
    }

    /// Makes the finder accept calls.
    pub fn start(&self) {
        self.started.store(true, Ordering::Release);
    }

    /// Makes the finder ignore calls.
    pub fn stop(&self) {
        self.started.store(false, Ordering::Release);
    }

    /// Returns true while the finder accepts calls.
    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::Acquire)
    }

    /// Handles one call: resolves the target and applies method policy.
    ///
    /// A stopped finder initializes the response but executes no handler
    /// and never consults the target lookup.
    pub async fn handle(&self, request: &Request, response: &mut Response) {
        self.init(request, response);

        if !self.is_started() {
            trace!("finder stopped, no handler executes");
            return;
        }

        match request.method().as_str() {
            "GET" => self.handle_get(request, response).await,
            "POST" => self.handle_post(request, response).await,
            "PUT" => self.handle_put(request, response).await,
            "DELETE" => self.handle_delete(request, response).await,
            "HEAD" => self.handle_head(request, response).await,
            "CONNECT" => self.default_handle(request, response),
            "OPTIONS" => self.handle_options(request, response),
            "TRACE" => self.default_handle(request, response),
            method => {
                debug!(method, "unrecognized method, using catch-all handler");
                self.handle_others(request, response);
            }
        }
    }

    /// Fresh bookkeeping for one call: success status until a handler says
    /// otherwise, and the engine's agent string when none is set.
    fn init(&self, _request: &Request, response: &mut Response) {
        response.set_status(Status::SUCCESS_OK);
        if response.server_info().agent().is_none() {
            response.server_info_mut().set_agent(SERVER_AGENT);
        }
    }

    /// Shared default for methods without a dedicated policy.
    fn default_handle(&self, _request: &Request, response: &mut Response) {
        response.set_status(Status::SERVER_ERROR_NOT_IMPLEMENTED);
    }

    async fn handle_get(&self, request: &Request, response: &mut Response) {
        match self.lookup.find_target(request, response).await {
            Some(target) => {
                if target.allow_get() {
                    let variant = negotiate::preferred_variant(
                        target.variants(),
                        request.client_info(),
                        self.fallback_language.as_ref(),
                    );
                    match variant {
                        Some(entity) => response.set_entity(entity),
                        None => response.set_status(
                            Status::CLIENT_ERROR_NOT_ACCEPTABLE.with_description("No acceptable representation"),
                        ),
                    }
                } else {
                    response.set_status(Status::CLIENT_ERROR_METHOD_NOT_ALLOWED);
                }

                self.update_allowed_methods(target.as_ref(), response);
            }
            None => response.set_status(Status::CLIENT_ERROR_NOT_FOUND),
        }
    }

    /// HEAD shares the GET policy; the transport suppresses the body.
    async fn handle_head(&self, request: &Request, response: &mut Response) {
        self.handle_get(request, response).await;
    }

    async fn handle_post(&self, request: &Request, response: &mut Response) {
        match self.lookup.find_target(request, response).await {
            Some(target) => {
                if target.allow_post() {
                    match request.entity() {
                        Some(entity) => {
                            let status = target.post(entity).await;
                            response.set_status(status);
                        }
                        None => response.set_status(
                            Status::CLIENT_ERROR_NOT_ACCEPTABLE.with_description("Missing request entity"),
                        ),
                    }
                } else {
                    response.set_status(Status::CLIENT_ERROR_METHOD_NOT_ALLOWED);
                }

                self.update_allowed_methods(target.as_ref(), response);
            }
            None => response.set_status(Status::CLIENT_ERROR_NOT_FOUND),
        }
    }

    async fn handle_put(&self, request: &Request, response: &mut Response) {
        match self.lookup.find_target(request, response).await {
            Some(target) => {
                if target.allow_put() {
                    match request.entity() {
                        Some(entity) => {
                            let status = target.put(entity).await;
                            response.set_status(status);
                        }
                        None => response.set_status(
                            Status::CLIENT_ERROR_NOT_ACCEPTABLE.with_description("Missing request entity"),
                        ),
                    }
                } else {
                    response.set_status(Status::CLIENT_ERROR_METHOD_NOT_ALLOWED);
                }

                self.update_allowed_methods(target.as_ref(), response);
            }
            None => response.set_status(Status::CLIENT_ERROR_NOT_FOUND),
        }
    }

    async fn handle_delete(&self, request: &Request, response: &mut Response) {
        match self.lookup.find_target(request, response).await {
            Some(target) => {
                if target.allow_delete() {
                    let status = target.delete().await;
                    response.set_status(status);
                } else {
                    response.set_status(Status::CLIENT_ERROR_METHOD_NOT_ALLOWED);
                }

                self.update_allowed_methods(target.as_ref(), response);
            }
            None => response.set_status(Status::CLIENT_ERROR_NOT_FOUND),
        }
    }

    /// OPTIONS keeps the initialized success status.
    fn handle_options(&self, _request: &Request, _response: &mut Response) {}

    /// Catch-all for unrecognized method tokens.
    fn handle_others(&self, _request: &Request, _response: &mut Response) {}

    /// Recomputes the allowed-methods set from the resource's current
    /// capability flags. Runs on every policy decision: the flags may be
    /// call-dependent, so the set is never cached.
    fn update_allowed_methods(&self, resource: &dyn Resource, response: &mut Response) {
        let allowed = response.allowed_methods_mut();
        allowed.clear();

        if resource.allow_get() {
            allowed.insert(Method::HEAD);
            allowed.insert(Method::GET);
        }
        if resource.allow_delete() {
            allowed.insert(Method::DELETE);
        }
        if resource.allow_post() {
            allowed.insert(Method::POST);
        }
        if resource.allow_put() {
            allowed.insert(Method::PUT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Entity, Preference};
    use std::sync::atomic::AtomicUsize;

    /// A resource with scripted capability flags that records delegations.
    #[derive(Default)]
    struct ScriptedResource {
        get: bool,
        post: bool,
        put: bool,
        delete: bool,
        variants: Vec<Entity>,
        delegations: AtomicUsize,
    }

    #[async_trait]
    impl Resource for ScriptedResource {
        fn allow_get(&self) -> bool {
            self.get
        }

        fn allow_post(&self) -> bool {
            self.post
        }

        fn allow_put(&self) -> bool {
            self.put
        }

        fn allow_delete(&self) -> bool {
            self.delete
        }

        fn variants(&self) -> Vec<Entity> {
            self.variants.clone()
        }

        async fn post(&self, _entity: &Entity) -> Status {
            self.delegations.fetch_add(1, Ordering::SeqCst);
            Status::new(201)
        }

        async fn put(&self, _entity: &Entity) -> Status {
            self.delegations.fetch_add(1, Ordering::SeqCst);
            Status::new(204)
        }

        async fn delete(&self) -> Status {
            self.delegations.fetch_add(1, Ordering::SeqCst);
            Status::new(204)
        }
    }

    /// A lookup that serves one optional resource and counts consultations.
    struct ScriptedLookup {
        target: Option<Arc<ScriptedResource>>,
        consultations: AtomicUsize,
    }

    impl ScriptedLookup {
        fn some(resource: ScriptedResource) -> Self {
            Self { target: Some(Arc::new(resource)), consultations: AtomicUsize::new(0) }
        }

        fn none() -> Self {
            Self { target: None, consultations: AtomicUsize::new(0) }
        }
    }

    #[async_trait]
    impl TargetLookup for ScriptedLookup {
        async fn find_target(&self, _request: &Request, _response: &mut Response) -> Option<Arc<dyn Resource>> {
            self.consultations.fetch_add(1, Ordering::SeqCst);
            self.target.clone().map(|target| target as Arc<dyn Resource>)
        }
    }

    fn started_finder(lookup: ScriptedLookup) -> Finder<ScriptedLookup> {
        let finder = Finder::new(lookup);
        finder.start();
        finder
    }

    fn html_variant() -> Entity {
        Entity::new("<html/>", mime::TEXT_HTML)
    }

    #[tokio::test]
    async fn stopped_finder_never_consults_lookup() {
        let finder = Finder::new(ScriptedLookup::some(ScriptedResource::default()));
        let request = Request::new(Method::GET, "/doc");
        let mut response = Response::new();

        finder.handle(&request, &mut response).await;

        assert_eq!(finder.lookup.consultations.load(Ordering::SeqCst), 0);
        assert_eq!(response.status(), &Status::SUCCESS_OK);
    }

    #[tokio::test]
    async fn get_without_target_is_not_found() {
        let finder = started_finder(ScriptedLookup::none());
        let request = Request::new(Method::GET, "/missing");
        let mut response = Response::new();

        finder.handle(&request, &mut response).await;

        assert_eq!(response.status(), &Status::CLIENT_ERROR_NOT_FOUND);
        assert!(response.allowed_methods().is_empty());
    }

    #[tokio::test]
    async fn get_not_allowed_reports_405_and_allowed_methods() {
        let resource = ScriptedResource { post: true, ..ScriptedResource::default() };
        let finder = started_finder(ScriptedLookup::some(resource));
        let request = Request::new(Method::GET, "/doc");
        let mut response = Response::new();

        finder.handle(&request, &mut response).await;

        assert_eq!(response.status(), &Status::CLIENT_ERROR_METHOD_NOT_ALLOWED);
        assert!(!response.allowed_methods().contains(&Method::GET));
        assert!(!response.allowed_methods().contains(&Method::HEAD));
        assert!(response.allowed_methods().contains(&Method::POST));
    }

    #[tokio::test]
    async fn get_serves_negotiated_entity() {
        let resource = ScriptedResource { get: true, variants: vec![html_variant()], ..ScriptedResource::default() };
        let finder = started_finder(ScriptedLookup::some(resource));

        let mut request = Request::new(Method::GET, "/doc");
        request.client_info_mut().accepted_media_types_mut().push(Preference::new(mime::TEXT_HTML));
        let mut response = Response::new();

        finder.handle(&request, &mut response).await;

        assert_eq!(response.status(), &Status::SUCCESS_OK);
        assert!(!response.entity().unwrap().is_empty());
        assert!(response.allowed_methods().contains(&Method::GET));
        assert!(response.allowed_methods().contains(&Method::HEAD));
    }

    #[tokio::test]
    async fn head_shares_get_policy() {
        let resource = ScriptedResource { get: true, variants: vec![html_variant()], ..ScriptedResource::default() };
        let finder = started_finder(ScriptedLookup::some(resource));
        let request = Request::new(Method::HEAD, "/doc");
        let mut response = Response::new();

        finder.handle(&request, &mut response).await;

        assert_eq!(response.status(), &Status::SUCCESS_OK);
        assert!(response.entity().is_some());
    }

    #[tokio::test]
    async fn get_with_no_acceptable_variant_is_406() {
        let resource = ScriptedResource { get: true, variants: vec![html_variant()], ..ScriptedResource::default() };
        let finder = started_finder(ScriptedLookup::some(resource));

        let mut request = Request::new(Method::GET, "/doc");
        request.client_info_mut().accepted_media_types_mut().push(Preference::new(mime::APPLICATION_JSON));
        let mut response = Response::new();

        finder.handle(&request, &mut response).await;

        assert_eq!(response.status(), &Status::CLIENT_ERROR_NOT_ACCEPTABLE);
        assert!(response.entity().is_none());
    }

    #[tokio::test]
    async fn post_without_entity_is_406_and_skips_resource() {
        let resource = ScriptedResource { post: true, ..ScriptedResource::default() };
        let finder = started_finder(ScriptedLookup::some(resource));
        let request = Request::new(Method::POST, "/doc");
        let mut response = Response::new();

        finder.handle(&request, &mut response).await;

        assert_eq!(response.status(), &Status::CLIENT_ERROR_NOT_ACCEPTABLE);
        assert_eq!(finder.lookup.target.as_ref().unwrap().delegations.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn post_with_entity_copies_resource_status() {
        let resource = ScriptedResource { post: true, ..ScriptedResource::default() };
        let finder = started_finder(ScriptedLookup::some(resource));

        let mut request = Request::new(Method::POST, "/doc");
        request.set_entity(Entity::new("payload", mime::TEXT_PLAIN));
        let mut response = Response::new();

        finder.handle(&request, &mut response).await;

        assert_eq!(response.status(), &Status::new(201));
        assert_eq!(finder.lookup.target.as_ref().unwrap().delegations.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn put_without_target_is_404_despite_capabilities() {
        let finder = started_finder(ScriptedLookup::none());
        let mut request = Request::new(Method::PUT, "/missing");
        request.set_entity(Entity::new("payload", mime::TEXT_PLAIN));
        let mut response = Response::new();

        finder.handle(&request, &mut response).await;

        assert_eq!(response.status(), &Status::CLIENT_ERROR_NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_copies_resource_status_and_allowed_methods() {
        let resource = ScriptedResource { delete: true, ..ScriptedResource::default() };
        let finder = started_finder(ScriptedLookup::some(resource));
        let request = Request::new(Method::DELETE, "/doc");
        let mut response = Response::new();

        finder.handle(&request, &mut response).await;

        assert_eq!(response.status(), &Status::new(204));
        assert_eq!(response.allowed_methods().len(), 1);
        assert!(response.allowed_methods().contains(&Method::DELETE));
    }

    #[tokio::test]
    async fn connect_and_trace_are_not_implemented() {
        let finder = started_finder(ScriptedLookup::some(ScriptedResource::default()));
        let mut response = Response::new();

        finder.handle(&Request::new(Method::CONNECT, "/doc"), &mut response).await;
        assert_eq!(response.status(), &Status::SERVER_ERROR_NOT_IMPLEMENTED);

        finder.handle(&Request::new(Method::TRACE, "/doc"), &mut response).await;
        assert_eq!(response.status(), &Status::SERVER_ERROR_NOT_IMPLEMENTED);
    }

    #[tokio::test]
    async fn options_and_extension_methods_keep_success() {
        let finder = started_finder(ScriptedLookup::some(ScriptedResource::default()));
        let mut response = Response::new();

        finder.handle(&Request::new(Method::OPTIONS, "/doc"), &mut response).await;
        assert_eq!(response.status(), &Status::SUCCESS_OK);

        let propfind = Method::from_bytes(b"PROPFIND").unwrap();
        finder.handle(&Request::new(propfind, "/doc"), &mut response).await;
        assert_eq!(response.status(), &Status::SUCCESS_OK);
    }

    #[tokio::test]
    async fn init_stamps_server_agent() {
        let finder = Finder::new(ScriptedLookup::none());
        let request = Request::new(Method::GET, "/doc");
        let mut response = Response::new();

        finder.handle(&request, &mut response).await;

        assert_eq!(response.server_info().agent(), Some(SERVER_AGENT));
    }
}
