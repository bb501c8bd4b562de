use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;

/// Body of `GET /`
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub status: String,
    pub message: String,
}

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub database: String,
    pub application: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    /// `None` when running on the in-memory backend
    pub database: Option<bool>,
    pub application: bool,
}

/// GET /
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(RootResponse {
        status: "OK".to_string(),
        message: "Pluto API is running".to_string(),
    })
}

/// GET /health - Liveness probe
/// Does not check dependencies
pub async fn health_check() -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        checks: HealthChecks {
            database: "not_checked".to_string(),
            application: "healthy".to_string(),
        },
    };

    HttpResponse::Ok().json(response)
}

/// GET /ready - Readiness probe
/// Pings the MySQL pool when one is registered
pub async fn readiness_check(pool: Option<web::Data<MySqlPool>>) -> impl Responder {
    let mut ready = true;
    let mut checks = ReadinessChecks {
        database: None,
        application: true,
    };

    if let Some(pool) = pool {
        match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
            Ok(_) => checks.database = Some(true),
            Err(e) => {
                ready = false;
                checks.database = Some(false);
                tracing::error!(error = %e, "Database readiness check failed");
            }
        }
    }

    let response = ReadinessResponse { ready, checks };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
