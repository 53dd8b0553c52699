use std::env;
use std::time::Duration;

const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
const DEFAULT_STORAGE_BASE_URL: &str = "https://azuretest001profiles.blob.core.windows.net";
const DEFAULT_GRAPH_API_ENDPOINT: &str = "https://graph.microsoft.com/v1.0";
const DEFAULT_IDENTITY_ENDPOINT: &str = "https://login.microsoftonline.com";
const DEFAULT_ANALYTICS_CSV_PATH: &str = "data/weekly_analytics.csv";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

pub const GRAPH_SCOPE: &str = "https://graph.microsoft.com/.default";

/// Runtime configuration, read once at startup from the environment (.env included)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub backend_url: String,
    pub storage_base_url: String,
    pub graph_api_endpoint: String,
    pub identity_endpoint: String,
    pub tenant_id: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub analytics_csv_path: String,
    pub http_timeout: Duration,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        let http_timeout_secs = env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            backend_url: trim_url(env_or("BACKEND_URL_EXTERNAL", DEFAULT_BACKEND_URL)),
            storage_base_url: trim_url(env_or("STORAGE_BASE_URL", DEFAULT_STORAGE_BASE_URL)),
            graph_api_endpoint: trim_url(env_or("GRAPH_API_ENDPOINT", DEFAULT_GRAPH_API_ENDPOINT)),
            identity_endpoint: trim_url(env_or("IDENTITY_ENDPOINT", DEFAULT_IDENTITY_ENDPOINT)),
            tenant_id: non_empty_var("TENANT_ID"),
            client_id: non_empty_var("CLIENT_ID"),
            client_secret: non_empty_var("CLIENT_SECRET"),
            analytics_csv_path: env_or("ANALYTICS_CSV_PATH", DEFAULT_ANALYTICS_CSV_PATH),
            http_timeout: Duration::from_secs(http_timeout_secs),
            cors_allowed_origins,
        }
    }

    /// Configuration pointing every upstream at the same base URL (mock server in tests).
    #[cfg(test)]
    pub fn for_upstream(base_url: &str) -> Self {
        let base = trim_url(base_url.to_string());
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            backend_url: base.clone(),
            storage_base_url: base.clone(),
            graph_api_endpoint: format!("{}/v1.0", base),
            identity_endpoint: base,
            tenant_id: Some("tenant".to_string()),
            client_id: Some("client".to_string()),
            client_secret: Some("secret".to_string()),
            analytics_csv_path: DEFAULT_ANALYTICS_CSV_PATH.to_string(),
            http_timeout: Duration::from_secs(5),
            cors_allowed_origins: Vec::new(),
        }
    }

    pub fn profile_images_url(&self) -> String {
        format!("{}/profile-images", self.storage_base_url)
    }

    pub fn mapping_csv_url(&self) -> String {
        format!("{}/mappings/profile_image_mapping.csv", self.storage_base_url)
    }

    pub fn token_endpoint(&self) -> Option<String> {
        self.tenant_id
            .as_ref()
            .map(|tenant| format!("{}/{}/oauth2/v2.0/token", self.identity_endpoint, tenant))
    }

    pub fn has_graph_credentials(&self) -> bool {
        self.tenant_id.is_some() && self.client_id.is_some() && self.client_secret.is_some()
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn trim_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
