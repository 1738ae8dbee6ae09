// src/presentation/http/controllers/products.rs
use crate::application::commands::products::{
    AddProductCommand, DeleteProductCommand, EditProductCommand,
};
use crate::application::dto::{Page, ProductActionDto, ProductDto};
use crate::application::queries::products::ListProductsQuery;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use chrono::NaiveDateTime;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize)]
pub struct ListProductsParams {
    #[serde(default)]
    pub product_no: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub batch_no: Option<String>,
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default)]
    pub category_id: Option<i32>,
    #[serde(default)]
    pub mfg_date_from: Option<NaiveDateTime>,
    #[serde(default)]
    pub mfg_date_to: Option<NaiveDateTime>,
    #[serde(default)]
    pub mfg_expiry_date_from: Option<NaiveDateTime>,
    #[serde(default)]
    pub mfg_expiry_date_to: Option<NaiveDateTime>,
    #[serde(default)]
    pub page: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddProductRequest {
    pub product_no: String,
    pub product_name: String,
    pub manufacturer: String,
    pub batch_no: String,
    pub quantity: i32,
    pub category_id: i32,
    pub mfg_date: Option<NaiveDateTime>,
    pub mfg_expiry_date: Option<NaiveDateTime>,
    /// Acting principal, carried into the audit entry.
    pub username: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct EditProductRequest {
    pub product_no: String,
    pub product_name: String,
    pub manufacturer: String,
    pub batch_no: String,
    pub quantity: i32,
    pub category_id: i32,
    pub mfg_date: Option<NaiveDateTime>,
    pub mfg_expiry_date: Option<NaiveDateTime>,
    pub username: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteProductRequest {
    pub username: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    responses((status = 200, description = "Filtered, paginated products.", body = Page<ProductDto>)),
    tag = "Products"
)]
pub async fn list_products(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListProductsParams>,
) -> HttpResult<Json<Page<ProductDto>>> {
    let query = ListProductsQuery {
        product_no: params.product_no,
        product_name: params.product_name,
        manufacturer: params.manufacturer,
        batch_no: params.batch_no,
        quantity: params.quantity,
        category_id: params.category_id,
        mfg_date_from: params.mfg_date_from,
        mfg_date_to: params.mfg_date_to,
        mfg_expiry_date_from: params.mfg_expiry_date_from,
        mfg_expiry_date_to: params.mfg_expiry_date_to,
        page: params.page,
    };

    state
        .services
        .product_queries
        .list_products(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    responses((status = 200, description = "One product, or null for an unknown id.", body = Option<ProductDto>)),
    tag = "Products"
)]
pub async fn get_product(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i32>,
) -> HttpResult<Json<Option<ProductDto>>> {
    state
        .services
        .product_queries
        .get_product(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    request_body = AddProductRequest,
    responses((status = 200, description = "Mutation outcome; rejections carry success=false.", body = ProductActionDto)),
    tag = "Products"
)]
pub async fn add_product(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<AddProductRequest>,
) -> HttpResult<Json<ProductActionDto>> {
    state
        .services
        .product_commands
        .add_product(AddProductCommand {
            product_no: payload.product_no,
            product_name: payload.product_name,
            manufacturer: payload.manufacturer,
            batch_no: payload.batch_no,
            quantity: payload.quantity,
            category_id: payload.category_id,
            mfg_date: payload.mfg_date,
            mfg_expiry_date: payload.mfg_expiry_date,
            username: payload.username,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    request_body = EditProductRequest,
    responses((status = 200, description = "Mutation outcome; rejections carry success=false.", body = ProductActionDto)),
    tag = "Products"
)]
pub async fn edit_product(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i32>,
    Json(payload): Json<EditProductRequest>,
) -> HttpResult<Json<ProductActionDto>> {
    state
        .services
        .product_commands
        .edit_product(EditProductCommand {
            product_id: id,
            product_no: payload.product_no,
            product_name: payload.product_name,
            manufacturer: payload.manufacturer,
            batch_no: payload.batch_no,
            quantity: payload.quantity,
            category_id: payload.category_id,
            mfg_date: payload.mfg_date,
            mfg_expiry_date: payload.mfg_expiry_date,
            username: payload.username,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    request_body = DeleteProductRequest,
    responses((status = 200, description = "Mutation outcome; rejections carry success=false.", body = ProductActionDto)),
    tag = "Products"
)]
pub async fn delete_product(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i32>,
    Json(payload): Json<DeleteProductRequest>,
) -> HttpResult<Json<ProductActionDto>> {
    state
        .services
        .product_commands
        .delete_product(DeleteProductCommand {
            product_id: id,
            username: payload.username,
        })
        .await
        .into_http()
        .map(Json)
}
