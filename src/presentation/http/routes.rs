// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{audit, auth, categories, products},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::Method,
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route(
            "/api/v1/audit/logs",
            get(audit::list_audit_logs).post(audit::create_audit_log),
        )
        .route("/api/v1/audit/logs/{id}", get(audit::get_audit_log))
        .route(
            "/api/v1/audit/products/{product_id}",
            get(audit::get_audit_logs_by_product),
        )
        .route("/api/v1/audit/types", get(audit::get_audit_types))
        .route(
            "/api/v1/products",
            get(products::list_products).post(products::add_product),
        )
        .route(
            "/api/v1/products/{id}",
            get(products::get_product)
                .put(products::edit_product)
                .delete(products::delete_product),
        )
        .route(
            "/api/v1/categories",
            get(categories::list_categories).post(categories::add_category),
        )
        .route(
            "/api/v1/categories/{id}",
            axum::routing::delete(categories::delete_category),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
