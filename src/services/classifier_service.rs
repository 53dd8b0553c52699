use crate::{
    models::ClassifierResult,
    utils::error::{ensure_success, AppError},
};
use serde_json::Value;

/// Client for the external photo classification backend
pub struct ClassifierClient {
    http: reqwest::Client,
    backend_url: String,
}

/// Backend answer forwarded as-is (status + JSON body)
#[derive(Debug)]
pub struct ForwardedResponse {
    pub status: u16,
    pub body: Value,
}

impl ClassifierClient {
    pub fn new(http: reqwest::Client, backend_url: String) -> Self {
        Self { http, backend_url }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub async fn health(&self) -> Result<Value, AppError> {
        let response = self
            .http
            .get(format!("{}/health", self.backend_url))
            .send()
            .await?;

        Ok(response.json().await?)
    }

    /// POST /classify, typed result. Non-2xx answers become `AppError::Upstream`.
    pub async fn classify(&self, data_url: &str) -> Result<ClassifierResult, AppError> {
        let response = self
            .http
            .post(format!("{}/classify", self.backend_url))
            .json(&serde_json::json!({ "image": data_url }))
            .send()
            .await?;

        log::debug!("[CLASSIFY] Backend response status: {}", response.status());

        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// POST /classify, keeping the backend's status and JSON body whatever they are.
    pub async fn forward_classify(&self, image: &str) -> Result<ForwardedResponse, AppError> {
        let response = self
            .http
            .post(format!("{}/classify", self.backend_url))
            .json(&serde_json::json!({ "image": image }))
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.json().await?;

        Ok(ForwardedResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_classify_success() {
        let mut server = mockito::Server::new_async().await;
        let classify = server
            .mock("POST", "/classify")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "image": "data:image/png;base64,AAAA"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"classification":"human","confidence":0.93}"#)
            .create_async()
            .await;

        let client = ClassifierClient::new(reqwest::Client::new(), server.url());
        let result = client.classify("data:image/png;base64,AAAA").await.unwrap();

        assert_eq!(result.classification, "human");
        assert_eq!(result.confidence, Some(0.93));
        classify.assert_async().await;
    }

    #[tokio::test]
    async fn test_classify_backend_error() {
        let mut server = mockito::Server::new_async().await;
        let _classify = server
            .mock("POST", "/classify")
            .with_status(500)
            .with_body(r#"{"error":"model not loaded"}"#)
            .create_async()
            .await;

        let client = ClassifierClient::new(reqwest::Client::new(), server.url());
        let err = client.classify("data:,").await.unwrap_err();

        assert_eq!(err.upstream_status(), Some(500));
        assert!(err.message().contains("model not loaded"));
    }

    #[tokio::test]
    async fn test_forward_keeps_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _classify = server
            .mock("POST", "/classify")
            .with_status(422)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"Invalid image data"}"#)
            .create_async()
            .await;

        let client = ClassifierClient::new(reqwest::Client::new(), server.url());
        let forwarded = client.forward_classify("garbage").await.unwrap();

        assert_eq!(forwarded.status, 422);
        assert_eq!(forwarded.body["error"], "Invalid image data");
    }

    #[tokio::test]
    async fn test_health_unreachable() {
        // nothing listens on the discard port
        let client = ClassifierClient::new(reqwest::Client::new(), "http://127.0.0.1:9".to_string());
        let err = client.health().await.unwrap_err();
        assert!(matches!(err, AppError::Transport(_)));
    }
}
