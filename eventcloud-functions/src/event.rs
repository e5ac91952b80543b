//! Event save hook and membership toggles.

use crate::context::CloudContext;
use crate::error::FunctionResult;
use crate::pipeline::normalize_image;
use crate::registry::{BeforeSaveHook, CloudFunction};
use async_trait::async_trait;
use eventcloud_store::Privilege;
use eventcloud_types::{CallRequest, ObjectId, Pointer, SaveRequest, EVENT_CLASS};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

/// Field holding the member pointer list on an event.
pub const MEMBERS_FIELD: &str = "members";

/// Before-save hook for the event class: image pipeline only, no thumbnail.
pub struct EventBeforeSave {
    ctx: Arc<CloudContext>,
}

impl EventBeforeSave {
    #[must_use]
    pub fn new(ctx: Arc<CloudContext>) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl BeforeSaveHook for EventBeforeSave {
    async fn run(&self, req: &mut SaveRequest) -> FunctionResult<()> {
        normalize_image(&self.ctx, req, false).await
    }
}

/// Loads the event, applies the mutation to its member list, and persists
/// under the master key. Returns `{"changed": bool}`.
///
/// The save bypasses the event's ACL deliberately: the mutation is narrowly
/// scoped to the caller's own membership. Note the load-mutate-save is not
/// atomic against concurrent toggles on the same event; the backend's
/// last-write-wins save decides.
async fn toggle_membership(
    ctx: &CloudContext,
    req: &CallRequest,
    mutate: impl FnOnce(&mut Vec<Pointer>, &Pointer) -> bool + Send,
) -> FunctionResult<Value> {
    let caller = req.require_user()?;
    let id = req.require_str_param("id")?;

    let mut event = ctx.objects.get(EVENT_CLASS, &ObjectId::new(id)).await?;
    let mut members = event.get_pointers(MEMBERS_FIELD);
    let me = Pointer::to_user(caller.id.clone());

    let changed = mutate(&mut members, &me);
    if changed {
        event.set_pointers(MEMBERS_FIELD, &members);
        ctx.objects.update(&event, &Privilege::Master).await?;
        info!(event = id, user = %caller.id, "membership updated");
    }

    Ok(json!({ "changed": changed }))
}

/// `joinEvent`: appends the caller to the event's member list if absent.
pub struct JoinEvent {
    ctx: Arc<CloudContext>,
}

impl JoinEvent {
    #[must_use]
    pub fn new(ctx: Arc<CloudContext>) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl CloudFunction for JoinEvent {
    async fn call(&self, req: CallRequest) -> FunctionResult<Value> {
        toggle_membership(&self.ctx, &req, |members, me| {
            if members.contains(me) {
                false
            } else {
                members.push(me.clone());
                true
            }
        })
        .await
    }
}

/// `leaveEvent`: removes the caller's first occurrence from the member list.
pub struct LeaveEvent {
    ctx: Arc<CloudContext>,
}

impl LeaveEvent {
    #[must_use]
    pub fn new(ctx: Arc<CloudContext>) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl CloudFunction for LeaveEvent {
    async fn call(&self, req: CallRequest) -> FunctionResult<Value> {
        toggle_membership(&self.ctx, &req, |members, me| {
            match members.iter().position(|p| p == me) {
                Some(index) => {
                    members.remove(index);
                    true
                }
                None => false,
            }
        })
        .await
    }
}
