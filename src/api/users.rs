use actix_web::{web, HttpResponse};
use crate::{
    models::{ProfilesResponse, UserCountResponse},
    services::profile_service,
    state::AppState,
    utils::error::AppError,
};

/// GET /api/users/count - directory user count from Microsoft Graph
#[utoipa::path(
    get,
    path = "/api/users/count",
    tag = "Users",
    responses(
        (status = 200, description = "User count", body = UserCountResponse),
        (status = 500, description = "Token or Graph failure")
    )
)]
pub async fn get_user_count(state: web::Data<AppState>) -> HttpResponse {
    log::info!(
        "👥 GET /users/count - tenant: {:?}, client: {:?}, has secret: {}",
        state.config.tenant_id,
        state.config.client_id,
        state.config.client_secret.is_some()
    );

    match state.graph.user_count(&state.tokens).await {
        Ok(count) => {
            log::info!("✅ User count retrieved: {}", count);
            HttpResponse::Ok().json(UserCountResponse {
                count,
                timestamp: chrono::Utc::now().to_rfc3339(),
            })
        }
        Err(e) => {
            log::error!("❌ Error fetching user count: {}", e);
            e.to_response("Failed to fetch user count")
        }
    }
}

/// GET /api/users/profiles - mapping CSV reshaped into user records
#[utoipa::path(
    get,
    path = "/api/users/profiles",
    tag = "Users",
    responses(
        (status = 200, description = "User profiles", body = ProfilesResponse),
        (status = 500, description = "Mapping CSV unavailable")
    )
)]
pub async fn get_profiles(state: web::Data<AppState>) -> HttpResponse {
    log::info!("🖼️  GET /users/profiles");

    match profile_service::load_profiles(&state.storage).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e @ AppError::Upstream { .. }) => {
            log::error!("❌ Failed to fetch CSV: {}", e);
            e.to_response("Failed to fetch mapping CSV")
        }
        Err(e) => {
            log::error!("❌ Error loading profiles: {}", e);
            e.to_response("Failed to load profiles")
        }
    }
}
