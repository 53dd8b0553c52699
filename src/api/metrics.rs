use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static REQUEST_COUNT: AtomicU64 = AtomicU64::new(0);
static ERROR_COUNT: AtomicU64 = AtomicU64::new(0);
static CLASSIFICATION_COUNT: AtomicU64 = AtomicU64::new(0);
static CLASSIFICATION_ERROR_COUNT: AtomicU64 = AtomicU64::new(0);

pub fn increment_request_count() {
    REQUEST_COUNT.fetch_add(1, Ordering::Relaxed);
}

pub fn increment_error_count() {
    ERROR_COUNT.fetch_add(1, Ordering::Relaxed);
}

pub fn record_classifications(total: u64, errors: u64) {
    CLASSIFICATION_COUNT.fetch_add(total, Ordering::Relaxed);
    CLASSIFICATION_ERROR_COUNT.fetch_add(errors, Ordering::Relaxed);
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MetricsResponse {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub classifications_total: u64,
    pub classification_errors_total: u64,
}

impl MetricsResponse {
    pub fn snapshot() -> Self {
        Self {
            http_requests_total: REQUEST_COUNT.load(Ordering::Relaxed),
            http_errors_total: ERROR_COUNT.load(Ordering::Relaxed),
            classifications_total: CLASSIFICATION_COUNT.load(Ordering::Relaxed),
            classification_errors_total: CLASSIFICATION_ERROR_COUNT.load(Ordering::Relaxed),
        }
    }

    pub fn to_prometheus(&self) -> String {
        format!(
            "# HELP http_requests_total Total number of HTTP requests\n\
             # TYPE http_requests_total counter\n\
             http_requests_total {}\n\
             \n\
             # HELP http_errors_total Total number of HTTP responses with status >= 400\n\
             # TYPE http_errors_total counter\n\
             http_errors_total {}\n\
             \n\
             # HELP classifications_total Total number of profile photos sent for classification\n\
             # TYPE classifications_total counter\n\
             classifications_total {}\n\
             \n\
             # HELP classification_errors_total Profile photos whose classification failed\n\
             # TYPE classification_errors_total counter\n\
             classification_errors_total {}\n",
            self.http_requests_total,
            self.http_errors_total,
            self.classifications_total,
            self.classification_errors_total
        )
    }
}

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    responses(
        (status = 200, description = "Prometheus counters", body = String)
    )
)]
pub async fn get_metrics() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(MetricsResponse::snapshot().to_prometheus())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prometheus_format() {
        let text = MetricsResponse {
            http_requests_total: 7,
            http_errors_total: 2,
            classifications_total: 5,
            classification_errors_total: 1,
        }
        .to_prometheus();

        assert!(text.contains("http_requests_total 7\n"));
        assert!(text.contains("http_errors_total 2\n"));
        assert!(text.contains("classifications_total 5\n"));
        assert!(text.contains("classification_errors_total 1\n"));
    }
}
