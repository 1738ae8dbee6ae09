// src/application/dto/categories.rs
use crate::domain::category::Category;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub category_id: i32,
    pub category_name: String,
}

impl From<Category> for CategoryDto {
    fn from(c: Category) -> Self {
        Self {
            category_id: c.category_id,
            category_name: c.category_name,
        }
    }
}
