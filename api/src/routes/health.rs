//! Health check endpoint

use actix_web::HttpResponse;
use chrono::Utc;
use std::collections::HashMap;

use lst_shared::types::response::{ApiResponse, HealthResponse, HealthStatus};

/// Handler for GET /health
pub async fn health_check() -> HttpResponse {
    let mut services = HashMap::new();
    services.insert("api".to_string(), HealthStatus::Healthy);

    HttpResponse::Ok().json(ApiResponse::success(HealthResponse {
        status: HealthStatus::Healthy,
        services,
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_rt::test]
    async fn health_reports_success() {
        let response = health_check().await;
        assert_eq!(response.status(), actix_web::http::StatusCode::OK);
    }
}
