use actix_web::{http::StatusCode, web, HttpResponse};
use serde::{Deserialize, Serialize};
use crate::{state::AppState, utils::error::AppError};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProxyImageQuery {
    pub url: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProxyImageResponse {
    pub data_url: String,
}

/// GET /api/proxy-image?url=... - fetch an image server-side and return it as a data URL
#[utoipa::path(
    get,
    path = "/api/proxy-image",
    tag = "Images",
    params(ProxyImageQuery),
    responses(
        (status = 200, description = "Image as data URL", body = ProxyImageResponse),
        (status = 400, description = "No image URL provided, or URL outside profile storage")
    )
)]
pub async fn proxy_image(
    state: web::Data<AppState>,
    query: web::Query<ProxyImageQuery>,
) -> HttpResponse {
    let url = match query.url.as_deref() {
        Some(url) if !url.is_empty() => url,
        _ => {
            log::error!("[PROXY] No URL provided");
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": "No image URL provided"
            }));
        }
    };

    // only profile storage is reachable through the relay
    let storage_prefix = format!("{}/", state.config.storage_base_url);
    if !url.starts_with(&storage_prefix) {
        log::warn!("[PROXY] Rejected URL outside profile storage: {}", url);
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Image URL must point to profile storage"
        }));
    }

    log::info!("[PROXY] Fetching image from: {}", url);

    match state.storage.fetch_image(url).await {
        Ok(image) => {
            log::info!(
                "[PROXY] Successfully proxied image ({}, {} bytes)",
                image.content_type,
                image.bytes.len()
            );
            HttpResponse::Ok().json(ProxyImageResponse {
                data_url: image.to_data_url(),
            })
        }
        Err(AppError::Upstream { status, .. }) => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            log::error!("[PROXY] Failed to fetch: {}", status);
            HttpResponse::build(status).json(serde_json::json!({
                "error": format!(
                    "Failed to fetch image: {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("")
                )
            }))
        }
        Err(e) => {
            log::error!("[PROXY] Error proxying image: {}", e);
            e.to_response("Failed to proxy image")
        }
    }
}
