// src/application/dto/pagination.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const PAGE_SIZE: i64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub current_page: i64,
    pub total_pages: i64,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub const fn new(items: Vec<T>, current_page: i64, total_pages: i64) -> Self {
        Self {
            current_page,
            total_pages,
            items,
        }
    }
}

/// Total page count for a result set; an empty set still has one page.
pub fn total_pages(count: i64, page_size: i64) -> i64 {
    ((count + page_size - 1) / page_size).max(1)
}

/// Clamp a requested page into [1, total]. Page 0 or a negative page behaves
/// like page 1; anything past the end behaves like the last page.
pub fn clamp_page(requested: Option<i64>, total: i64) -> i64 {
    requested.unwrap_or(1).clamp(1, total)
}
