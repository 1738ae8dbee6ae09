// src/application/commands/categories.rs
use crate::application::dto::CategoryDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::category::{CategoryRepository, NewCategory};
use std::sync::Arc;

/// Categories have no audit types, so these mutations write no trail
/// entries.
pub struct CategoryCommandService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryCommandService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    pub async fn add_category(&self, category_name: String) -> ApplicationResult<CategoryDto> {
        let category = NewCategory::new(category_name)?;
        let created = self.repo.insert(category).await?;
        Ok(created.into())
    }

    pub async fn delete_category(&self, category_id: i32) -> ApplicationResult<()> {
        if self.repo.delete(category_id).await? {
            Ok(())
        } else {
            Err(ApplicationError::not_found(format!(
                "category {category_id} not found"
            )))
        }
    }
}
