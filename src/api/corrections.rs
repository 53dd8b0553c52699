use actix_web::{web, HttpResponse};
use crate::{
    models::{Correction, CorrectionRequest, CorrectionSavedResponse},
    state::AppState,
};

/// POST /api/corrections - record a manual classification override
#[utoipa::path(
    post,
    path = "/api/corrections",
    tag = "Corrections",
    request_body = CorrectionRequest,
    responses(
        (status = 200, description = "Correction saved", body = CorrectionSavedResponse),
        (status = 400, description = "Missing required fields")
    )
)]
pub async fn save_correction(
    state: web::Data<AppState>,
    request: Option<web::Json<CorrectionRequest>>,
) -> HttpResponse {
    let request = match request {
        Some(request) => request.into_inner(),
        None => return missing_fields(),
    };

    let (user_id, corrected) = match (request.user_id, request.corrected_classification) {
        (Some(user_id), Some(corrected)) if !user_id.is_empty() && !corrected.is_empty() => {
            (user_id, corrected)
        }
        _ => return missing_fields(),
    };

    log::info!(
        "✏️  Saved correction for user {}: {} -> {}",
        user_id,
        request.original_classification.as_deref().unwrap_or("unknown"),
        corrected
    );

    let corrections = state.corrections.set(
        user_id,
        Correction {
            original_classification: request.original_classification,
            corrected_classification: corrected,
            timestamp: chrono::Utc::now().to_rfc3339(),
        },
    );

    HttpResponse::Ok().json(CorrectionSavedResponse {
        success: true,
        corrections,
    })
}

fn missing_fields() -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "error": "Missing required fields"
    }))
}
