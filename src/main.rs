mod api;
mod config;
mod middleware;
mod models;
mod services;
mod state;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::{Compress, Logger}, web, App, HttpServer};
use dotenv::dotenv;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::Config, state::AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let bind_addr = format!("{}:{}", config.host, config.port);

    log::info!("🚀 Starting Profile Relay...");
    log::info!("🔗 Backend URL configured as: {}", config.backend_url);
    log::info!("🗄️  Storage base URL: {}", config.storage_base_url);
    log::info!(
        "🔑 Graph API config - tenant: {:?}, client: {:?}, has secret: {}",
        config.tenant_id,
        config.client_id,
        config.client_secret.is_some()
    );
    if !config.has_graph_credentials() {
        log::warn!("⚠️  Graph credentials incomplete, /api/users/count will fail");
    }

    let cors_origins = config.cors_allowed_origins.clone();
    let state = AppState::new(config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    let state = web::Data::new(state);

    log::info!("🌐 Server starting on {}", bind_addr);
    log::info!("📚 Swagger UI available at: http://{}/swagger-ui/", bind_addr);

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
                actix_web::http::header::CACHE_CONTROL,
            ])
            .max_age(3600);

        if cors_origins.is_empty() {
            cors = cors.allow_any_origin();
        } else {
            for origin in &cors_origins {
                cors = cors.allowed_origin(origin);
            }
        }

        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(state.clone())
            .wrap(cors)
            .wrap(middleware::RequestMetrics)
            .wrap(Compress::default())
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi)
            )
            .configure(api::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
