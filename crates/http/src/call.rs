//! The wire call contracts.
//!
//! A [`WireCall`] is the transport-facing side of one HTTP exchange: raw
//! ordered header lists plus the entity accessors. It is owned by the
//! connector and scoped to a single request/response pair — the converter
//! reads and writes it but never keeps it beyond the exchange. Different
//! transports (socket pools, test doubles, in-process loops) provide their
//! own implementations; the converter only sees these traits.

use async_trait::async_trait;

use uni_rest::Request;
use uni_rest::data::{Entity, HeaderList, Status};

use crate::error::WireError;

/// One transport-level HTTP exchange.
#[async_trait]
pub trait WireCall: Send {
    /// The request headers to send, in serialization order.
    fn request_headers(&self) -> &HeaderList;

    /// The request headers for appending.
    ///
    /// The converter only ever appends; it never rewrites what a transport
    /// put here.
    fn request_headers_mut(&mut self) -> &mut HeaderList;

    /// The response headers as received, in wire order.
    fn response_headers(&self) -> &HeaderList;

    /// Sends the request, streaming the entity when one is given, and
    /// returns the status of the received response.
    ///
    /// This is the only blocking point of the translation layer; timeouts
    /// are the transport's concern.
    async fn send_request(&mut self, entity: Option<&Entity>) -> Result<Status, WireError>;

    /// Takes the response entity, if the exchange produced one.
    ///
    /// For HEAD requests the transport must yield no entity here even when
    /// the response carries entity headers.
    fn response_entity(&mut self) -> Option<Entity>;

    /// The server address observed by the transport, if known.
    fn server_address(&self) -> Option<String>;
}

/// Creates wire calls bound to a request's target.
pub trait WireTransport {
    /// The call type this transport produces.
    type Call: WireCall;

    /// Creates a new call bound to the request's resource reference.
    fn create(&self, request: &Request) -> Result<Self::Call, WireError>;
}
