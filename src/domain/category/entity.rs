// src/domain/category/entity.rs
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone)]
pub struct Category {
    pub category_id: i32,
    pub category_name: String,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub category_name: String,
}

impl NewCategory {
    pub fn new(category_name: impl Into<String>) -> DomainResult<Self> {
        let category_name = category_name.into();
        if category_name.trim().is_empty() {
            return Err(DomainError::Validation("category name is required".into()));
        }
        Ok(Self { category_name })
    }
}
