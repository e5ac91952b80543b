//! The image normalization pipeline shared by the save hooks.

use crate::context::CloudContext;
use crate::error::FunctionResult;
use crate::{IMAGE_FIELD, IMAGE_MINI_FIELD};
use eventcloud_media::{DerivativeSpec, DERIVATIVE_MIME, PRIMARY_BOUND, THUMBNAIL_SIZE};
use eventcloud_store::StoreError;
use eventcloud_types::SaveRequest;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Normalizes the `image` field of the entity about to be saved.
///
/// Runs only when the attached file actually changed (comparison is by file
/// name, so unrelated field updates never trigger re-encoding). On a change:
/// fetch the upload, render the bounded primary derivative (plus the 40×40
/// thumbnail when `thumbnail` is set), upload the derivatives, rewrite the
/// entity's image fields, and best-effort delete the superseded files.
///
/// Fetch, render, and upload failures abort the save. Cleanup failures do
/// not: an orphaned file is acceptable, a blocked save is not.
pub(crate) async fn normalize_image(
    ctx: &CloudContext,
    req: &mut SaveRequest,
    thumbnail: bool,
) -> FunctionResult<()> {
    let Some(upload) = req.entity.get_file(IMAGE_FIELD) else {
        return Ok(());
    };

    let previous = req.original.as_ref().and_then(|e| e.get_file(IMAGE_FIELD));
    if previous.as_ref().is_some_and(|p| p.same_file(&upload)) {
        debug!(class = %req.entity.class_name, "image unchanged, skipping pipeline");
        return Ok(());
    }

    let url = upload
        .url
        .as_deref()
        .ok_or_else(|| StoreError::FetchFailed(format!("{} has no url", upload.name)))?;
    let source = ctx.files.fetch(url).await?;

    let primary = eventcloud_media::render(&source, DerivativeSpec::bounded(PRIMARY_BOUND))?;
    let primary_ref = ctx
        .files
        .upload(
            &format!("img-{}.jpg", Uuid::new_v4()),
            primary,
            DERIVATIVE_MIME,
        )
        .await?;
    req.entity.set_file(IMAGE_FIELD, &primary_ref);

    if thumbnail {
        let thumb = eventcloud_media::render(&source, DerivativeSpec::exact(THUMBNAIL_SIZE))?;
        let thumb_ref = ctx
            .files
            .upload(
                &format!("thumb-{}.jpg", Uuid::new_v4()),
                thumb,
                DERIVATIVE_MIME,
            )
            .await?;
        req.entity.set_file(IMAGE_MINI_FIELD, &thumb_ref);
    }

    info!(
        class = %req.entity.class_name,
        source = %upload.name,
        primary = %primary_ref.name,
        "image derivatives rendered"
    );

    // Cleanup is best-effort: the raw upload is superseded by the primary
    // derivative, and the previous derivative (if any) is now unreferenced.
    if let Err(e) = ctx.files.delete(&upload.name).await {
        warn!(name = %upload.name, error = %e, "failed to delete superseded upload");
    }
    if let Some(prev) = previous {
        if let Err(e) = ctx.files.delete(&prev.name).await {
            warn!(name = %prev.name, error = %e, "failed to delete prior derivative");
        }
    }

    Ok(())
}
