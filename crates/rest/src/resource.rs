//! The resource capability contract.
//!
//! A [`Resource`] is whatever sits behind a resolved target reference. The
//! dispatch engine only ever talks to it through capability flags and the
//! per-method handlers; it never sees resource internals. Implementations
//! range from static documents to database-backed records, which is also
//! why the flags are queried per call and never cached by the engine.

use async_trait::async_trait;

use crate::data::{Entity, Status};

/// A target resource exposed through the uniform interface.
///
/// The capability flags gate which methods dispatch will attempt. A freshly
/// exposed resource is readable and nothing else: `allow_get` defaults to
/// `true`, the mutating flags to `false`. The mutating handlers default to
/// 501 so that enabling a flag without overriding its handler is observable
/// rather than silent.
#[async_trait]
pub trait Resource: Send + Sync {
    /// May this resource be read (GET and HEAD)?
    fn allow_get(&self) -> bool {
        true
    }

    /// May this resource accept posted entities?
    fn allow_post(&self) -> bool {
        false
    }

    /// May this resource be stored to?
    fn allow_put(&self) -> bool {
        false
    }

    /// May this resource be deleted?
    fn allow_delete(&self) -> bool {
        false
    }

    /// The representations this resource can serve, in preference order.
    ///
    /// GET and HEAD negotiate over this list against the client's accepted
    /// media types and languages.
    fn variants(&self) -> Vec<Entity> {
        Vec::new()
    }

    /// Accepts a posted entity.
    async fn post(&self, entity: &Entity) -> Status {
        let _ = entity;
        Status::SERVER_ERROR_NOT_IMPLEMENTED
    }

    /// Stores the given entity.
    async fn put(&self, entity: &Entity) -> Status {
        let _ = entity;
        Status::SERVER_ERROR_NOT_IMPLEMENTED
    }

    /// Deletes the resource.
    async fn delete(&self) -> Status {
        Status::SERVER_ERROR_NOT_IMPLEMENTED
    }
}
