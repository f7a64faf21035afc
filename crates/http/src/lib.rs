//! The HTTP wire translation layer for the uniform rest call model
//!
//! This crate maps uniform [`Request`](uni_rest::Request)/
//! [`Response`](uni_rest::Response) pairs onto raw HTTP header lists and
//! entities, and back. The wire itself stays behind the [`WireCall`] and
//! [`WireTransport`] contracts: sockets, pools and TLS belong to whichever
//! connector implements them, while this crate owns the protocol logic —
//! header assembly order, preference serialization, cookie and challenge
//! syntax, and the interpretation of response headers.
//!
//! # Features
//!
//! - Deterministic, ordered request header assembly
//! - Quality-value preference serialization (`value;q=0.9`), with the
//!   wildcard `*/*` default when no media preference is expressed
//! - Cookie and authentication challenge formatting and parsing
//! - A closed, O(1)-checked set of protocol-managed header names that
//!   extension headers cannot override
//! - Contained failure handling: a bad header is skipped, a bad exchange
//!   degrades the response status, nothing panics or propagates
//!
//! # Example
//!
//! ```
//! use async_trait::async_trait;
//! use http::Method;
//! use tracing::{info, Level};
//! use tracing_subscriber::FmtSubscriber;
//! use uni_http::{ClientConverter, WireCall, WireError, WireTransport};
//! use uni_rest::data::{Entity, HeaderList, Status};
//! use uni_rest::{Request, Response};
//!
//! /// A loopback transport that answers every call with a plain greeting.
//! struct Loopback;
//!
//! struct LoopbackCall {
//!     request_headers: HeaderList,
//!     response_headers: HeaderList,
//! }
//!
//! #[async_trait]
//! impl WireCall for LoopbackCall {
//!     fn request_headers(&self) -> &HeaderList {
//!         &self.request_headers
//!     }
//!
//!     fn request_headers_mut(&mut self) -> &mut HeaderList {
//!         &mut self.request_headers
//!     }
//!
//!     fn response_headers(&self) -> &HeaderList {
//!         &self.response_headers
//!     }
//!
//!     async fn send_request(&mut self, _entity: Option<&Entity>) -> Result<Status, WireError> {
//!         Ok(Status::SUCCESS_OK)
//!     }
//!
//!     fn response_entity(&mut self) -> Option<Entity> {
//!         Some(Entity::new("hello, world", mime::TEXT_PLAIN))
//!     }
//!
//!     fn server_address(&self) -> Option<String> {
//!         Some("127.0.0.1".to_string())
//!     }
//! }
//!
//! impl WireTransport for Loopback {
//!     type Call = LoopbackCall;
//!
//!     fn create(&self, _request: &Request) -> Result<LoopbackCall, WireError> {
//!         Ok(LoopbackCall { request_headers: HeaderList::new(), response_headers: HeaderList::new() })
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     // Initialize logging
//!     let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
//!     tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
//!
//!     let converter = ClientConverter::new();
//!     let request = Request::new(Method::GET, "http://example.com/hello");
//!     let mut response = Response::new();
//!
//!     let mut call = converter.to_wire(&Loopback, &request, &response).expect("creating the call failed");
//!     converter.commit(&mut call, &request, &mut response).await;
//!
//!     info!(status = %response.status(), "call committed");
//!     assert_eq!(&response.entity().unwrap().data()[..], b"hello, world");
//! }
//! ```
//!
//! # Architecture
//!
//! - [`ClientConverter`]: the stateless translator between uniform and wire
//! - [`WireCall`] / [`WireTransport`]: the transport-facing contracts
//! - [`header`]: the closed set of protocol-managed header names
//! - [`util`]: the header value grammars (preferences, cookies, challenges)
//!
//! # Limitations
//!
//! - One in-flight request/response exchange per wire call; no multiplexing
//! - HEAD body suppression is the transport's obligation: this layer treats
//!   HEAD like GET and the transport must not yield a response entity

pub mod header;
pub mod util;

mod call;
pub use call::WireCall;
pub use call::WireTransport;

mod converter;
pub use converter::AGENT;
pub use converter::ClientConverter;

mod error;
pub use error::FormatError;
pub use error::ParseError;
pub use error::WireError;
