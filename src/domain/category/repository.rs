// src/domain/category/repository.rs
use crate::domain::category::entity::{Category, NewCategory};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<Category>>;
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn delete(&self, category_id: i32) -> DomainResult<bool>;
}
