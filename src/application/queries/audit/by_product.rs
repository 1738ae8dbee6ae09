// src/application/queries/audit/by_product.rs
use super::AuditQueryService;
use crate::application::dto::ProductQuantityPointDto;
use crate::application::error::ApplicationResult;
use crate::domain::audit::content::{QUANTITY_FIELD_INDEX, extract_field};
use crate::domain::audit::timestamp;
use chrono::Datelike;

#[derive(Debug, Clone)]
pub struct ProductHistoryQuery {
    pub product_id: i32,
    /// Calendar year; defaults to the current year in the display zone.
    pub year: Option<i32>,
}

impl AuditQueryService {
    /// Quantity-over-time series for one product: AddProduct and EditProduct
    /// entries in the given year, ascending by date. Quantities come out of
    /// historical content best-effort, so a malformed legacy row contributes
    /// a zero instead of failing the series.
    pub async fn get_logs_by_product(
        &self,
        query: ProductHistoryQuery,
    ) -> ApplicationResult<Vec<ProductQuantityPointDto>> {
        let year = query
            .year
            .unwrap_or_else(|| self.clock.now().with_timezone(&self.display_tz).year());

        let records = self
            .repo
            .find_by_product_year(query.product_id, year)
            .await?;

        let points = records
            .into_iter()
            .map(|record| ProductQuantityPointDto {
                quantity: extract_field(&record.audit_content, "Quantity", QUANTITY_FIELD_INDEX),
                date: timestamp::to_display_string(record.date, self.display_tz),
            })
            .collect();

        Ok(points)
    }
}
