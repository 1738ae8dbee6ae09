// src/application/queries/products.rs
use crate::application::dto::{Page, ProductDto};
use crate::application::error::ApplicationResult;
use crate::domain::audit::repository::DateRange;
use crate::domain::product::{ProductFilter, ProductRepository};
use chrono::NaiveDateTime;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct ListProductsQuery {
    pub product_no: Option<String>,
    pub product_name: Option<String>,
    pub manufacturer: Option<String>,
    pub batch_no: Option<String>,
    pub quantity: Option<i32>,
    pub category_id: Option<i32>,
    pub mfg_date_from: Option<NaiveDateTime>,
    pub mfg_date_to: Option<NaiveDateTime>,
    pub mfg_expiry_date_from: Option<NaiveDateTime>,
    pub mfg_expiry_date_to: Option<NaiveDateTime>,
    pub page: Option<i64>,
}

pub struct ProductQueryService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductQueryService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_products(
        &self,
        query: ListProductsQuery,
    ) -> ApplicationResult<Page<ProductDto>> {
        let filter = ProductFilter {
            product_no: normalize(query.product_no),
            product_name: normalize(query.product_name),
            manufacturer: normalize(query.manufacturer),
            batch_no: normalize(query.batch_no),
            quantity_at_least: query.quantity,
            category_id: query.category_id,
            mfg_date: DateRange {
                start: query.mfg_date_from.map(|d| d.and_utc()),
                end: query.mfg_date_to.map(|d| d.and_utc()),
            },
            mfg_expiry_date: DateRange {
                start: query.mfg_expiry_date_from.map(|d| d.and_utc()),
                end: query.mfg_expiry_date_to.map(|d| d.and_utc()),
            },
        };

        let page = self.repo.list(&filter, query.page.unwrap_or(1)).await?;
        let items = page.items.into_iter().map(Into::into).collect();

        Ok(Page::new(items, page.current_page, page.total_pages))
    }

    pub async fn get_product(&self, product_id: i32) -> ApplicationResult<Option<ProductDto>> {
        let product = self.repo.find_by_id(product_id).await?;
        Ok(product.map(Into::into))
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
