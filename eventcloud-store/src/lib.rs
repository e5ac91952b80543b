//! REST clients for the external backend-as-a-service.
//!
//! The backend owns the object database, query engine, ACL enforcement, and
//! file storage; this crate is strictly a client of its REST surface. Each
//! concern gets a trait (so the function layer can run against in-process
//! doubles in tests) plus a `Parse*` implementation speaking the backend's
//! wire convention.
//!
//! All clients share [`StoreConfig`], which carries the server base URL so
//! tests can point them at a mock server.

mod config;
mod error;
mod files;
mod identity;
mod objects;
mod schema;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use files::{FileStore, ParseFiles};
pub use identity::{IdentityService, ParseIdentity, Session};
pub use objects::{ObjectStore, ParseObjects, QUERY_PAGE_SIZE};
pub use schema::SchemaAdmin;

/// Privilege under which a mutation runs on the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Privilege {
    /// Act as the session's user; the backend enforces the record's ACL.
    Session(String),
    /// Master-key access, bypassing per-record ACLs.
    Master,
}
