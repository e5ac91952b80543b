//! User-profile save hook.

use crate::context::CloudContext;
use crate::error::FunctionResult;
use crate::pipeline::normalize_image;
use crate::registry::BeforeSaveHook;
use async_trait::async_trait;
use eventcloud_types::SaveRequest;
use std::sync::Arc;
use tracing::debug;

/// Before-save hook for the user class.
///
/// Forces `username` to track `email` on every save (the app logs in by
/// email address, so the two must never diverge), then runs the image
/// pipeline with both the primary and thumbnail derivatives.
pub struct UserBeforeSave {
    ctx: Arc<CloudContext>,
}

impl UserBeforeSave {
    #[must_use]
    pub fn new(ctx: Arc<CloudContext>) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl BeforeSaveHook for UserBeforeSave {
    async fn run(&self, req: &mut SaveRequest) -> FunctionResult<()> {
        let email = req.entity.get_str("email").map(str::to_string);
        if req.entity.get_str("username") != email.as_deref() {
            debug!("normalizing username to email");
            match email {
                Some(email) => req.entity.set("username", email),
                // No email on the profile: the username tracks it into
                // absence as well.
                None => {
                    req.entity.remove("username");
                }
            }
        }

        normalize_image(&self.ctx, req, true).await
    }
}
