use actix_web::{http::StatusCode, web, HttpResponse};
use crate::{
    api::metrics,
    models::{Classification, ClassifiedProfilesResponse, ClassifierResult, ClassifyRequest},
    services::profile_service,
    state::AppState,
    utils::error::AppError,
};

/// POST /api/classify/all-profiles - classify every profile photo, one at a time
#[utoipa::path(
    post,
    path = "/api/classify/all-profiles",
    tag = "Classification",
    responses(
        (status = 200, description = "Profiles with classifications", body = ClassifiedProfilesResponse),
        (status = 500, description = "Mapping CSV unavailable")
    )
)]
pub async fn classify_all_profiles(state: web::Data<AppState>) -> HttpResponse {
    log::info!("🔍 POST /classify/all-profiles");

    match profile_service::classify_all(&state.storage, &state.classifier).await {
        Ok(response) => {
            let errors = response
                .users
                .iter()
                .filter(|u| u.classification == Some(Classification::Error))
                .count();
            metrics::record_classifications(response.classified as u64, errors as u64);
            log::info!(
                "✅ Classified {} profiles ({} errors)",
                response.classified,
                errors
            );

            state.results.set(response.users.clone());
            HttpResponse::Ok().json(response)
        }
        Err(e @ AppError::Upstream { .. }) => {
            log::error!("❌ Failed to fetch CSV: {}", e);
            e.to_response("Failed to fetch mapping CSV")
        }
        Err(e) => {
            log::error!("❌ Error classifying profiles: {}", e);
            e.to_response("Failed to classify profiles")
        }
    }
}

/// POST /api/classify - single image, proxied to the classification backend
#[utoipa::path(
    post,
    path = "/api/classify",
    tag = "Classification",
    request_body = ClassifyRequest,
    responses(
        (status = 200, description = "Backend classification result", body = ClassifierResult),
        (status = 400, description = "No image data provided")
    )
)]
pub async fn classify_image(
    state: web::Data<AppState>,
    request: Option<web::Json<ClassifyRequest>>,
) -> HttpResponse {
    // a missing or unparseable body is treated like a body without an image
    let image = match request.as_ref().and_then(|r| r.image.as_deref()) {
        Some(image) if !image.is_empty() => image,
        _ => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": "No image data provided"
            }))
        }
    };

    log::info!("🔍 POST /classify - {} bytes of image data", image.len());

    match state.classifier.forward_classify(image).await {
        Ok(forwarded) => {
            let status = StatusCode::from_u16(forwarded.status)
                .unwrap_or(StatusCode::BAD_GATEWAY);
            if !status.is_success() {
                log::warn!("⚠️  Backend rejected classification: {}", status);
            }
            HttpResponse::build(status).json(forwarded.body)
        }
        Err(e) => {
            log::error!("❌ Error classifying image: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to classify image",
                "message": e.message()
            }))
        }
    }
}
