use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

/// Liveness endpoint for orchestrators and load balancers.
pub struct HealthApi;

impl HealthApi {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Reports that the process is up. Does not touch the database.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::{Route, test::TestClient};
    use poem_openapi::OpenApiService;

    #[tokio::test]
    async fn should_report_healthy() {
        let service = OpenApiService::new(HealthApi::new(), "Product Catalog API", "test");
        let cli = TestClient::new(Route::new().nest("/", service));

        let resp = cli.get("/health").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        json.value().object().get("status").assert_string("healthy");
    }
}
