//! Route definition for the reserved media endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// Media routes mounted at `/media`.
///
/// ```text
/// POST /upload  -> upload_media (501, reserved)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/upload", post(media::upload_media))
}
