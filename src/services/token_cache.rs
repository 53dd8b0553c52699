use crate::{
    config::{Config, GRAPH_SCOPE},
    utils::error::{ensure_success, AppError},
};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use std::sync::{Arc, RwLock};

/// Tokens are refreshed this long before they actually expire
pub const REFRESH_MARGIN_SECS: i64 = 300;

/// Token endpoint answer (client-credentials grant)
#[derive(Debug, Clone, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    pub expires_in: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CachedToken {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

impl CachedToken {
    pub fn from_grant(grant: TokenGrant, issued_at: DateTime<Utc>) -> Self {
        Self {
            access_token: grant.access_token,
            expires_at: issued_at + Duration::seconds(grant.expires_in),
        }
    }

    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at - Duration::seconds(REFRESH_MARGIN_SECS)
    }
}

/// Last-writer-wins holder for the current bearer token
#[derive(Debug, Default)]
pub struct TokenStore {
    inner: RwLock<Option<CachedToken>>,
}

impl TokenStore {
    pub fn get(&self) -> Option<CachedToken> {
        self.inner.read().ok()?.clone()
    }

    pub fn set(&self, token: CachedToken) {
        if let Ok(mut slot) = self.inner.write() {
            *slot = Some(token);
        }
    }

    pub fn clear(&self) {
        if let Ok(mut slot) = self.inner.write() {
            *slot = None;
        }
    }
}

#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn fetch_token(&self) -> Result<TokenGrant, AppError>;
}

/// OAuth client-credentials flow against the identity endpoint
pub struct ClientCredentialsProvider {
    http: reqwest::Client,
    token_endpoint: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
}

impl ClientCredentialsProvider {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            token_endpoint: config.token_endpoint(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
        }
    }
}

#[async_trait]
impl TokenProvider for ClientCredentialsProvider {
    async fn fetch_token(&self) -> Result<TokenGrant, AppError> {
        let (endpoint, client_id, client_secret) =
            match (&self.token_endpoint, &self.client_id, &self.client_secret) {
                (Some(e), Some(id), Some(secret)) => (e, id, secret),
                _ => {
                    return Err(AppError::ConfigError(
                        "TENANT_ID, CLIENT_ID and CLIENT_SECRET must be set".to_string(),
                    ))
                }
            };

        log::debug!("🔑 Requesting access token from {}", endpoint);

        let params = [
            ("client_id", client_id.as_str()),
            ("client_secret", client_secret.as_str()),
            ("scope", GRAPH_SCOPE),
            ("grant_type", "client_credentials"),
        ];

        let response = self
            .http
            .post(endpoint)
            .form(&params)
            .send()
            .await?;

        let response = ensure_success(response).await.map_err(|e| match e {
            AppError::Upstream { status, message } => AppError::Upstream {
                status,
                message: format!("Failed to get access token: {}", message),
            },
            other => other,
        })?;

        let grant: TokenGrant = response.json().await?;
        Ok(grant)
    }
}

/// Bearer token cache shared by the Graph endpoints
pub struct TokenCache {
    store: TokenStore,
    provider: Arc<dyn TokenProvider>,
}

impl TokenCache {
    pub fn new(provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            store: TokenStore::default(),
            provider,
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    /// Drops the cached token so the next call fetches a fresh one.
    pub fn invalidate(&self) {
        self.store.clear();
    }

    pub async fn access_token(&self) -> Result<String, AppError> {
        self.access_token_at(Utc::now()).await
    }

    /// Returns the cached token while it is fresh at `now`, otherwise fetches a new one.
    /// Concurrent callers may both fetch; the last one stored wins.
    pub async fn access_token_at(&self, now: DateTime<Utc>) -> Result<String, AppError> {
        if let Some(cached) = self.store.get() {
            if cached.is_fresh(now) {
                return Ok(cached.access_token);
            }
            log::info!("🔄 Access token within refresh window, fetching a new one");
        }

        let grant = match self.provider.fetch_token().await {
            Ok(grant) => grant,
            Err(e) => {
                log::error!("❌ Error getting access token: {}", e);
                return Err(e);
            }
        };

        let token = CachedToken::from_grant(grant, now);
        log::info!("✅ Access token obtained (expires at {})", token.expires_at.to_rfc3339());

        let access_token = token.access_token.clone();
        self.store.set(token);
        Ok(access_token)
    }
}
