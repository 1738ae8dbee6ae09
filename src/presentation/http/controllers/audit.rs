// src/presentation/http/controllers/audit.rs
use crate::application::audit::AuditEventRequest;
use crate::application::dto::{AuditLogDto, AuditTypeDto, Page, ProductQuantityPointDto};
use crate::application::queries::audit::{ListAuditLogsQuery, ProductHistoryQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct ListAuditLogsParams {
    #[serde(default)]
    pub audit_log_id: Option<String>,
    #[serde(default)]
    pub audit_type_id: Option<i32>,
    #[serde(default)]
    pub action_by: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub end_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub page: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ProductHistoryParams {
    #[serde(default)]
    pub year: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAuditLogRequest {
    pub audit_type_id: i32,
    pub audit_content: String,
    pub action_by: String,
    /// Local wall-clock time of the action in the display zone.
    pub date: NaiveDateTime,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateAuditLogResponse {
    pub audit_log_id: Uuid,
}

#[utoipa::path(
    get,
    path = "/api/v1/audit/logs",
    responses((status = 200, description = "Filtered, paginated audit trail.", body = Page<AuditLogDto>)),
    tag = "Audit"
)]
pub async fn list_audit_logs(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListAuditLogsParams>,
) -> HttpResult<Json<Page<AuditLogDto>>> {
    let query = ListAuditLogsQuery {
        audit_log_id: params.audit_log_id,
        audit_type_id: params.audit_type_id,
        action_by: params.action_by,
        start_date: params.start_date,
        end_date: params.end_date,
        page: params.page,
    };

    state
        .services
        .audit_queries
        .list_audit_logs(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/audit/logs/{id}",
    responses((status = 200, description = "One formatted audit entry, or null for an unknown id.", body = Option<AuditLogDto>)),
    tag = "Audit"
)]
pub async fn get_audit_log(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<Option<AuditLogDto>>> {
    state
        .services
        .audit_queries
        .get_audit_log(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/audit/products/{product_id}",
    responses((status = 200, description = "Quantity-over-time series for a product.", body = Vec<ProductQuantityPointDto>)),
    tag = "Audit"
)]
pub async fn get_audit_logs_by_product(
    Extension(state): Extension<HttpState>,
    Path(product_id): Path<i32>,
    Query(params): Query<ProductHistoryParams>,
) -> HttpResult<Json<Vec<ProductQuantityPointDto>>> {
    state
        .services
        .audit_queries
        .get_logs_by_product(ProductHistoryQuery {
            product_id,
            year: params.year,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/audit/types",
    responses((status = 200, description = "All audit types.", body = Vec<AuditTypeDto>)),
    tag = "Audit"
)]
pub async fn get_audit_types(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<AuditTypeDto>>> {
    state
        .services
        .audit_queries
        .get_audit_types()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/audit/logs",
    request_body = CreateAuditLogRequest,
    responses((status = 200, description = "Id of the appended entry.", body = CreateAuditLogResponse)),
    tag = "Audit"
)]
pub async fn create_audit_log(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateAuditLogRequest>,
) -> HttpResult<Json<CreateAuditLogResponse>> {
    let kind = crate::domain::audit::AuditKind::from_code(payload.audit_type_id)
        .map_err(crate::application::error::ApplicationError::from)
        .into_http()?;

    let audit_log_id = state
        .services
        .audit_recorder()
        .record(AuditEventRequest {
            kind,
            content: payload.audit_content,
            action_by: payload.action_by,
            local_date: Some(payload.date),
        })
        .await
        .into_http()?;

    Ok(Json(CreateAuditLogResponse { audit_log_id }))
}
