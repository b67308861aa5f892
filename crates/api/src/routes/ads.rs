//! Route definitions for advertisements.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::ads;
use crate::state::AppState;

/// Advertisement routes mounted at `/ads`.
///
/// ```text
/// GET    /                 -> list_ads (ranked by bid score)
/// POST   /                 -> create_ad
/// PUT    /{id}             -> update_ad
/// DELETE /{id}             -> delete_ad
/// POST   /{id}/click       -> click_ad
/// POST   /{id}/duplicate   -> duplicate_ad
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(ads::list_ads).post(ads::create_ad))
        .route("/{id}", put(ads::update_ad).delete(ads::delete_ad))
        .route("/{id}/click", post(ads::click_ad))
        .route("/{id}/duplicate", post(ads::duplicate_ad))
}
