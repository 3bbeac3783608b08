use actix_web::{get, web, HttpResponse, Responder};
use deadpool_redis::Pool;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
    redis: &'static str,
}

/// Liveness probe. No I/O.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Process is up", body = HealthResponse))
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// Readiness probe: database and Redis must both answer.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Dependencies reachable", body = ReadinessResponse),
        (status = 503, description = "A dependency is down", body = ReadinessResponse),
    )
)]
#[get("/ready")]
pub async fn readiness(
    db: web::Data<Arc<DatabaseConnection>>,
    redis: web::Data<Arc<Pool>>,
) -> impl Responder {
    let db_status = match db
        .execute(Statement::from_string(db.get_database_backend(), "SELECT 1"))
        .await
    {
        Ok(_) => "ok",
        Err(e) => {
            warn!("Readiness: database check failed: {}", e);
            "unhealthy"
        }
    };

    let redis_status = match redis.get().await {
        Ok(mut conn) => match deadpool_redis::redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
        {
            Ok(_) => "ok",
            Err(e) => {
                warn!("Readiness: redis PING failed: {}", e);
                "unhealthy"
            }
        },
        Err(e) => {
            warn!("Readiness: redis pool unavailable: {}", e);
            "unhealthy"
        }
    };

    let body = ReadinessResponse {
        status: if db_status == "ok" && redis_status == "ok" {
            "ok"
        } else {
            "unhealthy"
        },
        database: db_status,
        redis: redis_status,
    };

    if body.status == "ok" {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
