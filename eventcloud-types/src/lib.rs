//! Core value types for the eventcloud function layer.
//!
//! Everything in this crate is a plain value: ids, pointers, ACL
//! descriptors, file references, and the [`Entity`] field-map handle that
//! hooks read and mutate. Ownership of the actual records stays with the
//! external object store; these types are the in-process view of them.

mod acl;
mod entity;
mod file;
mod ids;
mod request;

pub use acl::Acl;
pub use entity::Entity;
pub use file::FileRef;
pub use ids::{ObjectId, Pointer};
pub use request::{CallRequest, Caller, RequestError, SaveRequest};

/// Class name of the user table on the backend.
pub const USER_CLASS: &str = "_User";

/// Class name of the event table on the backend.
pub const EVENT_CLASS: &str = "Event";
