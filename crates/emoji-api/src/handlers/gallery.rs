//! Gallery handler

use axum::{extract::State, Json};
use emoji_service::dto::GalleryResponse;
use emoji_service::GalleryService;

use crate::response::ApiResult;
use crate::state::AppState;

/// Current gallery snapshot
///
/// GET /api/v1/gallery
pub async fn get_gallery(State(state): State<AppState>) -> ApiResult<Json<GalleryResponse>> {
    let service = GalleryService::new(state.service_context());
    Ok(Json(service.get_gallery()?))
}
