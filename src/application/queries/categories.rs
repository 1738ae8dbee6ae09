// src/application/queries/categories.rs
use crate::application::dto::CategoryDto;
use crate::application::error::ApplicationResult;
use crate::domain::category::CategoryRepository;
use std::sync::Arc;

pub struct CategoryQueryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryQueryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.repo.list().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }
}
