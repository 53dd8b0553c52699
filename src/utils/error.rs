use actix_web::{http::StatusCode, HttpResponse};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Upstream answered with a non-2xx status
    Upstream { status: u16, message: String },
    /// Request never produced a response (DNS, connect, timeout...)
    Transport(String),
    /// Upstream answered 2xx but the payload could not be decoded
    InvalidPayload(String),
    ConfigError(String),
    NotFound(String),
    Io(String),
}

impl AppError {
    /// Upstream status code, when the failure came from an upstream response.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            AppError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Error message without the variant prefix, as surfaced to the browser.
    pub fn message(&self) -> &str {
        match self {
            AppError::Upstream { message, .. }
            | AppError::Transport(message)
            | AppError::InvalidPayload(message)
            | AppError::ConfigError(message)
            | AppError::NotFound(message)
            | AppError::Io(message) => message,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Transport(_)
            | AppError::InvalidPayload(_)
            | AppError::ConfigError(_)
            | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON error body `{error, message, status?}` with the matching status code.
    pub fn to_response(&self, context: &str) -> HttpResponse {
        let body = match self.upstream_status() {
            Some(status) => serde_json::json!({
                "error": context,
                "message": self.message(),
                "status": status
            }),
            None => serde_json::json!({
                "error": context,
                "message": self.message()
            }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Upstream { status, message } => {
                write!(f, "Upstream error ({}): {}", status, message)
            }
            AppError::Transport(msg) => write!(f, "Transport error: {}", msg),
            AppError::InvalidPayload(msg) => write!(f, "Invalid payload: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AppError::InvalidPayload(e.to_string())
        } else {
            AppError::Transport(e.to_string())
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e.to_string())
    }
}

/// Turns a non-2xx response into `AppError::Upstream`, keeping the body text.
pub async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .text()
        .await
        .unwrap_or_else(|e| format!("<unreadable body: {}>", e));

    Err(AppError::Upstream {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_is_forwarded() {
        let err = AppError::Upstream {
            status: 404,
            message: "BlobNotFound".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.upstream_status(), Some(404));
        assert_eq!(err.message(), "BlobNotFound");
    }

    #[test]
    fn test_local_errors_map_to_500() {
        assert_eq!(
            AppError::Transport("connection refused".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::ConfigError("TENANT_ID".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::NotFound("weekly.csv".into()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_invalid_upstream_status_falls_back_to_bad_gateway() {
        let err = AppError::Upstream { status: 42, message: String::new() };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }
}
