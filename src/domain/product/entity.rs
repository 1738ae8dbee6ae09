// src/domain/product/entity.rs
use crate::domain::audit::repository::DateRange;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Product {
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
    pub row_version: Option<i32>,
}

/// The tuple that makes a product unique. Two rows may never share all
/// three components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductIdentity {
    pub product_no: String,
    pub manufacturer: String,
    pub batch_no: String,
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub product_no: String,
    pub product_name: String,
    pub manufacturer: String,
    pub batch_no: String,
    pub quantity: i32,
    pub category_id: i32,
    pub mfg_date: Option<DateTime<Utc>>,
    pub mfg_expiry_date: Option<DateTime<Utc>>,
    pub added_on: DateTime<Utc>,
}

impl NewProduct {
    pub fn validate(&self) -> DomainResult<()> {
        if self.product_no.trim().is_empty() {
            return Err(DomainError::Validation("product_no is required".into()));
        }
        if self.product_name.trim().is_empty() {
            return Err(DomainError::Validation("product_name is required".into()));
        }
        if self.quantity < 0 {
            return Err(DomainError::Validation(
                "quantity must not be negative".into(),
            ));
        }
        Ok(())
    }

    pub fn identity(&self) -> ProductIdentity {
        ProductIdentity {
            product_no: self.product_no.clone(),
            manufacturer: self.manufacturer.clone(),
            batch_no: self.batch_no.clone(),
        }
    }
}

/// Optional, AND-combined product listing filters.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub product_no: Option<String>,
    pub product_name: Option<String>,
    pub manufacturer: Option<String>,
    pub batch_no: Option<String>,
    /// Minimum quantity, inclusive.
    pub quantity_at_least: Option<i32>,
    pub category_id: Option<i32>,
    pub mfg_date: DateRange,
    pub mfg_expiry_date: DateRange,
}

#[derive(Debug, Clone)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub current_page: i64,
    pub total_pages: i64,
}
