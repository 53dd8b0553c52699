use actix_web::{web, HttpResponse};
use crate::{
    models::{MisclassifiedReport, NonHumanReport},
    services::report_service,
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/reports/misclassified",
    tag = "Reports",
    responses(
        (status = 200, description = "All recorded corrections", body = MisclassifiedReport)
    )
)]
pub async fn get_misclassified_report(state: web::Data<AppState>) -> HttpResponse {
    let report = report_service::misclassified_report(&state.corrections);
    log::info!("📋 Misclassification report: {} entries", report.total_misclassified);
    HttpResponse::Ok().json(report)
}

/// Built from the most recent classify-all run; empty until one has completed
#[utoipa::path(
    get,
    path = "/api/reports/non-human",
    tag = "Reports",
    responses(
        (status = 200, description = "Profiles classified as avatar or other", body = NonHumanReport)
    )
)]
pub async fn get_non_human_report(state: web::Data<AppState>) -> HttpResponse {
    let report = report_service::non_human_report(&state.results, &state.corrections);
    log::info!("📋 Non-human report: {} users", report.total_count);
    HttpResponse::Ok().json(report)
}
