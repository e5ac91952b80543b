//! Credential re-verification.

use crate::context::CloudContext;
use crate::error::FunctionResult;
use crate::registry::CloudFunction;
use async_trait::async_trait;
use eventcloud_types::CallRequest;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

/// `checkPassword`: re-authenticates the caller's own username against the
/// supplied password via the identity service.
///
/// Used by sensitive flows (account deletion, email change) to confirm the
/// session holder still knows the password. The identity service's verdict
/// passes through untouched: a fresh session on success, its authentication
/// failure otherwise.
pub struct CheckPassword {
    ctx: Arc<CloudContext>,
}

impl CheckPassword {
    #[must_use]
    pub fn new(ctx: Arc<CloudContext>) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl CloudFunction for CheckPassword {
    async fn call(&self, req: CallRequest) -> FunctionResult<Value> {
        let caller = req.require_user()?;
        let password = req.require_str_param("password")?;

        debug!(user = %caller.id, "re-verifying password");
        let session = self.ctx.identity.login(&caller.username, password).await?;

        Ok(json!({
            "objectId": session.user_id,
            "sessionToken": session.token,
        }))
    }
}
