// src/presentation/http/controllers/categories.rs
use crate::application::dto::CategoryDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCategoryRequest {
    pub category_name: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses((status = 200, description = "All categories.", body = Vec<CategoryDto>)),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .category_queries
        .list_categories()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = AddCategoryRequest,
    responses((status = 200, description = "The created category.", body = CategoryDto)),
    tag = "Categories"
)]
pub async fn add_category(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<AddCategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_commands
        .add_category(payload.category_name)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/categories/{id}",
    responses((status = 204, description = "Category removed.")),
    tag = "Categories"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i32>,
) -> HttpResult<StatusCode> {
    state
        .services
        .category_commands
        .delete_category(id)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
