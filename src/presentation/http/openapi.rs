// src/presentation/http/openapi.rs
use crate::application::dto::{AuditLogDto, ProductDto};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::audit::list_audit_logs,
        crate::presentation::http::controllers::audit::get_audit_log,
        crate::presentation::http::controllers::audit::get_audit_logs_by_product,
        crate::presentation::http::controllers::audit::get_audit_types,
        crate::presentation::http::controllers::audit::create_audit_log,
        crate::presentation::http::controllers::auth::register,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::logout,
        crate::presentation::http::controllers::products::list_products,
        crate::presentation::http::controllers::products::get_product,
        crate::presentation::http::controllers::products::add_product,
        crate::presentation::http::controllers::products::edit_product,
        crate::presentation::http::controllers::products::delete_product,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::categories::add_category,
        crate::presentation::http::controllers::categories::delete_category,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::audit::CreateAuditLogRequest,
            crate::presentation::http::controllers::audit::CreateAuditLogResponse,
            crate::presentation::http::controllers::auth::RegisterRequest,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::LogoutRequest,
            crate::presentation::http::controllers::products::AddProductRequest,
            crate::presentation::http::controllers::products::EditProductRequest,
            crate::presentation::http::controllers::products::DeleteProductRequest,
            crate::presentation::http::controllers::categories::AddCategoryRequest,
            crate::application::dto::Page<AuditLogDto>,
            crate::application::dto::Page<ProductDto>,
            crate::application::dto::AuditLogDto,
            crate::application::dto::AuditTypeDto,
            crate::application::dto::ProductQuantityPointDto,
            crate::application::dto::ProductDto,
            crate::application::dto::ProductActionDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::AccountActionDto
        )
    ),
    tags(
        (name = "Audit", description = "Audit trail endpoints"),
        (name = "Auth", description = "Account and session endpoints"),
        (name = "Products", description = "Product inventory endpoints"),
        (name = "Categories", description = "Product category endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Stocktrail API",
        description = "Inventory backend with an append-only audit trail",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if !urls.iter().any(|url| url == "http://localhost:3000") {
            urls.push("http://localhost:3000".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi);
    Router::new()
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
