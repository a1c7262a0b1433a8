//! Item handlers
//!
//! Like toggling, liked queries, and downloads for single gallery items.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use emoji_service::dto::LikedResponse;
use emoji_service::{DownloadService, GalleryService};

use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Toggle the like on an item
///
/// POST /api/v1/items/{id}/like
///
/// Unknown or malformed IDs answer 204 without touching the gallery.
pub async fn toggle_like(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let service = GalleryService::new(state.service_context());
    Ok(match service.toggle_like(&id)? {
        Some(like) => Json(like).into_response(),
        None => NoContent.into_response(),
    })
}

/// Whether an item is liked
///
/// GET /api/v1/items/{id}/liked
pub async fn is_liked(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<LikedResponse>> {
    let service = GalleryService::new(state.service_context());
    Ok(Json(service.is_liked(&id)?))
}

/// Download the item's image as an attachment
///
/// GET /api/v1/items/{id}/download
pub async fn download(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let service = DownloadService::new(state.service_context());
    let image = service.download(&id).await?;

    let disposition = format!("attachment; filename=\"{}\"", image.filename);
    Ok((
        [
            (header::CONTENT_TYPE, image.content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        image.bytes,
    )
        .into_response())
}
