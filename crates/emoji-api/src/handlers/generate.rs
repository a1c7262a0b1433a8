//! Generation handler

use axum::{extract::State, Json};
use emoji_service::dto::{GenerateRequest, GenerateResponse};
use emoji_service::GenerationService;

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Generate emojis for a prompt
///
/// POST /api/v1/generate
pub async fn generate(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<GenerateRequest>,
) -> ApiResult<Created<Json<GenerateResponse>>> {
    let service = GenerationService::new(state.service_context());
    let response = service.generate(&request.prompt).await?;
    Ok(Created(Json(response)))
}
