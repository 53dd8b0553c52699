use actix_web::{web, HttpResponse};
use crate::{
    models::WeeklyAnalyticsResponse,
    services::analytics_service,
    state::AppState,
    utils::error::AppError,
};

#[utoipa::path(
    get,
    path = "/api/analytics/weekly",
    tag = "Analytics",
    responses(
        (status = 200, description = "Weekly classification counts", body = WeeklyAnalyticsResponse),
        (status = 404, description = "Analytics data not found")
    )
)]
pub async fn get_weekly_analytics(state: web::Data<AppState>) -> HttpResponse {
    match analytics_service::load_weekly_analytics(&state.config.analytics_csv_path).await {
        Ok(data) => HttpResponse::Ok().json(WeeklyAnalyticsResponse {
            data,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }),
        Err(AppError::NotFound(message)) => {
            log::warn!("⚠️  {} at {}", message, state.config.analytics_csv_path);
            HttpResponse::NotFound().json(serde_json::json!({ "error": message }))
        }
        Err(e) => {
            log::error!("❌ Error loading analytics: {}", e);
            e.to_response("Failed to load analytics")
        }
    }
}
