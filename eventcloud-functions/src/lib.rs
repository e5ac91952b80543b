//! The cloud-function layer.
//!
//! The external framework dispatches two kinds of work here: before-save
//! hooks, invoked with a before/after entity pair ahead of every persist of
//! a hooked class, and named callable functions, invoked with a caller
//! identity and a parameter map. [`Registry`] is the dispatch table the
//! runtime adapter drives; [`CloudContext`] bundles the backend clients the
//! handlers run against.
//!
//! Handlers never cache backend state between invocations; every call
//! re-fetches what it needs.

mod auth;
mod context;
mod error;
mod event;
mod pipeline;
mod profile;
mod registry;

pub use auth::CheckPassword;
pub use context::CloudContext;
pub use error::{FunctionError, FunctionResult};
pub use event::{EventBeforeSave, JoinEvent, LeaveEvent, MEMBERS_FIELD};
pub use profile::UserBeforeSave;
pub use registry::{BeforeSaveHook, CloudFunction, Registry};

/// Field carrying the primary image on hooked classes.
pub const IMAGE_FIELD: &str = "image";

/// Field carrying the thumbnail derivative on user profiles.
pub const IMAGE_MINI_FIELD: &str = "imageMini";
