//! Handlers for advertisement CRUD, click counting, and duplication.
//!
//! Create and update accept raw JSON objects, validate them against the
//! advertisement form schema (collecting every field violation), and only
//! then normalize the input into a draft for the store. The list endpoint
//! ranks the store snapshot by bid score before returning it.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{Map, Value};

use bidboard_core::ad::AdDraft;
use bidboard_core::bid;
use bidboard_core::error::CoreError;
use bidboard_core::form::config::ad_form_schema;
use bidboard_core::form::{draft, evaluator};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/ads
///
/// List all advertisements, ranked by bid score (highest first).
pub async fn list_ads(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let snapshot = state.store.list().await;
    let ranked = bid::rank(&snapshot);

    Ok(Json(DataResponse { data: ranked }))
}

/// POST /api/v1/ads
///
/// Create an advertisement from raw form values.
pub async fn create_ad(
    State(state): State<AppState>,
    Json(raw): Json<Map<String, Value>>,
) -> AppResult<impl IntoResponse> {
    let draft = validated_draft(&raw)?;
    let ad = state.store.create(draft).await;

    tracing::info!(id = %ad.id, title = %ad.title, "Ad created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: ad })))
}

/// PUT /api/v1/ads/{id}
///
/// Replace an advertisement's draft fields.
pub async fn update_ad(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(raw): Json<Map<String, Value>>,
) -> AppResult<impl IntoResponse> {
    let draft = validated_draft(&raw)?;
    let ad = state
        .store
        .update(&id, draft)
        .await
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Ad", id }))?;

    tracing::info!(id = %ad.id, "Ad updated");

    Ok(Json(DataResponse { data: ad }))
}

/// DELETE /api/v1/ads/{id}
pub async fn delete_ad(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = state.store.delete(&id).await;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Ad", id }));
    }

    tracing::info!(id, "Ad deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/ads/{id}/click
///
/// Register one click: increments the counter and returns the updated ad.
pub async fn click_ad(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let ad = state
        .store
        .click(&id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Ad", id }))?;

    tracing::info!(id = %ad.id, clicked = ad.clicked, "Ad click registered");

    Ok(Json(DataResponse { data: ad }))
}

/// POST /api/v1/ads/{id}/duplicate
///
/// Copy an advertisement into a fresh record with its own identity and
/// click history.
pub async fn duplicate_ad(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let copy = state.store.duplicate(&id).await.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Ad",
            id: id.clone(),
        })
    })?;

    tracing::info!(origin = %id, id = %copy.id, "Ad duplicated");

    Ok((StatusCode::CREATED, Json(DataResponse { data: copy })))
}

/// Validate raw form values against the ad schema, then normalize.
///
/// Validation runs first and collects every violation; only a clean report
/// lets the lossy normalization produce a trusted draft.
fn validated_draft(raw: &Map<String, Value>) -> Result<AdDraft, AppError> {
    let schema = ad_form_schema();
    let report = evaluator::validate(&evaluator::compile(&schema), raw);

    if !report.is_valid() {
        return Err(AppError::Validation(report.errors));
    }

    Ok(draft::normalize(&schema, raw))
}
