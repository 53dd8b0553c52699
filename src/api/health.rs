use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use crate::state::AppState;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Relay is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: "profile-relay".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}

/// GET /api/health - classification backend health, proxied
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Backend health payload, forwarded as-is"),
        (status = 500, description = "Backend unreachable")
    )
)]
pub async fn backend_health(state: web::Data<AppState>) -> HttpResponse {
    match state.classifier.health().await {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(e) => {
            log::error!("❌ Error fetching from backend: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Backend unreachable",
                "message": e.message(),
                "backend_url": state.classifier.backend_url()
            }))
        }
    }
}
