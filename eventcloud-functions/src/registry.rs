//! The dispatch table driven by the external runtime adapter.

use crate::auth::CheckPassword;
use crate::context::CloudContext;
use crate::error::{FunctionError, FunctionResult};
use crate::event::{EventBeforeSave, JoinEvent, LeaveEvent};
use crate::profile::UserBeforeSave;
use async_trait::async_trait;
use eventcloud_types::{CallRequest, SaveRequest, EVENT_CLASS, USER_CLASS};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// A hook invoked before an entity of its registered class is persisted.
///
/// The hook mutates the request's entity in place; returning an error
/// aborts the persist.
#[async_trait]
pub trait BeforeSaveHook: Send + Sync {
    async fn run(&self, req: &mut SaveRequest) -> FunctionResult<()>;
}

/// A named function callable by clients through the external dispatcher.
#[async_trait]
pub trait CloudFunction: Send + Sync {
    async fn call(&self, req: CallRequest) -> FunctionResult<Value>;
}

/// Maps class names to save hooks and function names to callables.
#[derive(Default)]
pub struct Registry {
    before_save: HashMap<String, Arc<dyn BeforeSaveHook>>,
    functions: HashMap<String, Arc<dyn CloudFunction>>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry wired with the standard application handlers.
    #[must_use]
    pub fn with_defaults(ctx: Arc<CloudContext>) -> Self {
        let mut registry = Self::new();
        registry.register_before_save(USER_CLASS, Arc::new(UserBeforeSave::new(ctx.clone())));
        registry.register_before_save(EVENT_CLASS, Arc::new(EventBeforeSave::new(ctx.clone())));
        registry.define("joinEvent", Arc::new(JoinEvent::new(ctx.clone())));
        registry.define("leaveEvent", Arc::new(LeaveEvent::new(ctx.clone())));
        registry.define("checkPassword", Arc::new(CheckPassword::new(ctx)));
        registry
    }

    /// Registers a before-save hook for a class, replacing any existing one.
    pub fn register_before_save(&mut self, class: &str, hook: Arc<dyn BeforeSaveHook>) {
        self.before_save.insert(class.to_string(), hook);
    }

    /// Registers a named function, replacing any existing one.
    pub fn define(&mut self, name: &str, function: Arc<dyn CloudFunction>) {
        self.functions.insert(name.to_string(), function);
    }

    /// Runs the before-save hook for a class. Classes without a hook save
    /// unmodified.
    pub async fn run_before_save(&self, class: &str, req: &mut SaveRequest) -> FunctionResult<()> {
        match self.before_save.get(class) {
            Some(hook) => {
                debug!(class, "running before-save hook");
                hook.run(req).await
            }
            None => Ok(()),
        }
    }

    /// Invokes a named function.
    pub async fn call(&self, name: &str, req: CallRequest) -> FunctionResult<Value> {
        let function = self
            .functions
            .get(name)
            .ok_or_else(|| FunctionError::UnknownFunction(name.to_string()))?;
        debug!(name, "invoking cloud function");
        function.call(req).await
    }

    /// Names of all registered functions, for the runtime adapter's routing.
    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }
}
