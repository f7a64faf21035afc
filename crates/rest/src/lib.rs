//! The uniform rest call model and resource dispatch engine
//!
//! This crate provides the transport-independent half of a uniform HTTP
//! abstraction: application code manipulates protocol-agnostic
//! [`Request`]/[`Response`] objects, and the [`Finder`] dispatch engine
//! routes incoming calls to [`Resource`] implementations with consistent
//! status semantics. How those calls reach a wire is the business of a
//! connector crate (see `uni-http` for the HTTP client translation layer).
//!
//! # Features
//!
//! - Protocol-agnostic request/response pair with typed call data
//!   (statuses, preferences, cookies, challenges, conditions, entities)
//! - Capability-driven method dispatch with well-defined 404/405/406/501
//!   fallbacks
//! - Content negotiation over resource variants, with a configurable
//!   fallback language
//! - No internal threading or locking; one call, one request/response pair
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use http::Method;
//! use tracing::Level;
//! use tracing_subscriber::FmtSubscriber;
//! use uni_rest::data::{Entity, Status};
//! use uni_rest::{lookup_fn, Finder, Request, Resource, Response};
//!
//! struct Greeting;
//!
//! #[async_trait]
//! impl Resource for Greeting {
//!     fn variants(&self) -> Vec<Entity> {
//!         vec![Entity::new("hello, world", mime::TEXT_PLAIN)]
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     // Initialize logging
//!     let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
//!     tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
//!
//!     let finder = Finder::new(lookup_fn(|_request: &Request| {
//!         Some(Arc::new(Greeting) as Arc<dyn Resource>)
//!     }));
//!     finder.start();
//!
//!     let request = Request::new(Method::GET, "/greeting");
//!     let mut response = Response::new();
//!     finder.handle(&request, &mut response).await;
//!
//!     assert_eq!(response.status(), &Status::SUCCESS_OK);
//!     assert_eq!(&response.entity().unwrap().data()[..], b"hello, world");
//! }
//! ```
//!
//! # Architecture
//!
//! - [`data`]: the call data model shared by requests and responses
//! - [`Request`] / [`Response`]: the uniform call pair
//! - [`Resource`]: the capability contract a target implements
//! - [`Finder`]: the per-call dispatch state machine
//! - [`negotiate`]: variant selection for GET/HEAD

pub mod data;
pub mod negotiate;

mod request;
pub use request::Request;

mod response;
pub use response::Response;

mod resource;
pub use resource::Resource;

mod finder;
pub use finder::Finder;
pub use finder::LookupFn;
pub use finder::TargetLookup;
pub use finder::SERVER_AGENT;
pub use finder::lookup_fn;
