//! Handler for the reserved media upload endpoint.

use axum::http::StatusCode;

use crate::error::{AppError, AppResult};

/// POST /api/v1/media/upload
///
/// Reserved surface for image/video upload. Answers 501 until an upload
/// backend exists.
pub async fn upload_media() -> AppResult<StatusCode> {
    Err(AppError::NotImplemented("media upload"))
}
