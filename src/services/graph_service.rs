use crate::{
    services::token_cache::TokenCache,
    utils::error::{ensure_success, AppError},
};

/// Microsoft Graph directory queries
pub struct GraphClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GraphClient {
    pub fn new(http: reqwest::Client, endpoint: String) -> Self {
        Self { http, endpoint }
    }

    /// GET /users/$count (advanced query, needs `ConsistencyLevel: eventual`)
    pub async fn user_count(&self, tokens: &TokenCache) -> Result<u64, AppError> {
        let access_token = tokens.access_token().await?;

        let url = format!("{}/users/$count", self.endpoint);
        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .header("ConsistencyLevel", "eventual")
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            // token revoked or rotated upstream before its expiry
            log::warn!("⚠️  Graph rejected the cached access token, dropping it");
            tokens.invalidate();
        }

        let response = ensure_success(response).await?;
        let body = response.text().await?;

        body.trim()
            .parse::<u64>()
            .map_err(|e| AppError::InvalidPayload(format!("Unexpected user count '{}': {}", body.trim(), e)))
    }
}
