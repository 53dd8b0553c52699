pub mod analytics;
pub mod classify;
pub mod corrections;
pub mod health;
pub mod metrics;
pub mod proxy;
pub mod reports;
pub mod swagger;
pub mod users;

use actix_web::web;

/// Classification requests carry whole images as data URLs
const JSON_BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Registers every relay route. Shared by the server and the handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().limit(JSON_BODY_LIMIT))
        // Health check
        .route("/health", web::get().to(health::health_check))
        // Metrics
        .route("/metrics", web::get().to(metrics::get_metrics))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::backend_health))
                // Microsoft Graph + Blob Storage
                .route("/users/count", web::get().to(users::get_user_count))
                .route("/users/profiles", web::get().to(users::get_profiles))
                .route("/analytics/weekly", web::get().to(analytics::get_weekly_analytics))
                // Classification backend
                .route("/classify/all-profiles", web::post().to(classify::classify_all_profiles))
                .route("/classify", web::post().to(classify::classify_image))
                // Corrections & reports (in-memory)
                .route("/corrections", web::post().to(corrections::save_correction))
                .route("/reports/non-human", web::get().to(reports::get_non_human_report))
                .route("/reports/misclassified", web::get().to(reports::get_misclassified_report))
                .route("/proxy-image", web::get().to(proxy::proxy_image)),
        );
}
