// src/application/dto/products.rs
use crate::domain::product::Product;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    pub product_id: i32,
    pub product_no: String,
    pub product_name: String,
    pub manufacturer: String,
    pub batch_no: String,
    pub quantity: i32,
    pub category_id: i32,
    pub category_name: String,
    pub mfg_date: Option<DateTime<Utc>>,
    pub mfg_expiry_date: Option<DateTime<Utc>>,
    pub added_on: Option<DateTime<Utc>>,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self {
            product_id: p.product_id,
            product_no: p.product_no,
            product_name: p.product_name,
            manufacturer: p.manufacturer,
            batch_no: p.batch_no,
            quantity: p.quantity,
            category_id: p.category_id,
            category_name: p.category_name,
            mfg_date: p.mfg_date,
            mfg_expiry_date: p.mfg_expiry_date,
            added_on: p.added_on,
        }
    }
}

/// Structured outcome of a product mutation. Business rejections (duplicate
/// identity, unknown id) come back here with `success: false` instead of a
/// transport-level error; the audit id of the recorded failure rides along
/// for the client message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductActionDto {
    pub success: bool,
    pub product_id: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_log_id: Option<Uuid>,
}

impl ProductActionDto {
    pub fn succeeded(product_id: i32, message: impl Into<String>, audit_log_id: Uuid) -> Self {
        Self {
            success: true,
            product_id,
            message: message.into(),
            audit_log_id: Some(audit_log_id),
        }
    }

    pub fn rejected(message: impl Into<String>, audit_log_id: Option<Uuid>) -> Self {
        Self {
            success: false,
            product_id: 0,
            message: message.into(),
            audit_log_id,
        }
    }
}
