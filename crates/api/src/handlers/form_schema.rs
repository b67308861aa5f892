//! Handler for the read-only form schema endpoint.

use axum::response::IntoResponse;
use axum::Json;

use bidboard_core::form::config::ad_form_schema;

use crate::error::AppResult;
use crate::response::DataResponse;

/// GET /api/v1/form-schema
///
/// The field configuration driving the advertisement form. Static today,
/// but clients must treat it as remote configuration.
pub async fn get_form_schema() -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: ad_form_schema(),
    }))
}
