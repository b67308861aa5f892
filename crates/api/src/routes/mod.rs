//! Route definitions.

pub mod ads;
pub mod form_schema;
pub mod health;
pub mod media;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ads                      list (ranked), create
/// /ads/{id}                 update, delete
/// /ads/{id}/click           register a click (POST)
/// /ads/{id}/duplicate       copy into a fresh ad (POST)
///
/// /form-schema              form field configuration (GET)
///
/// /media/upload             reserved, answers 501 (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/ads", ads::router())
        .nest("/form-schema", form_schema::router())
        .nest("/media", media::router())
}
