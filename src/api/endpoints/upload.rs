//! Report upload. The file is validated, then a fixed sample panel is
//! returned after the configured extraction delay.

use axum::extract::{Multipart, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::intake::{sample_extraction, validate_upload, ExtractedReport, IntakeError};

/// `POST /api/upload`: multipart form with a `file` field.
pub async fn upload(
    State(ctx): State<ApiContext>,
    mut multipart: Multipart,
) -> Result<Json<ExtractedReport>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let declared_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;

        let content_type = validate_upload(&file_name, declared_type.as_deref(), bytes.len())?;
        tracing::info!(
            file_name = %file_name,
            content_type = %content_type,
            size = bytes.len(),
            "Report upload accepted"
        );

        ctx.state.upload_pacer.pause().await;
        return Ok(Json(sample_extraction(&file_name, content_type)));
    }

    Err(IntakeError::Empty.into())
}
