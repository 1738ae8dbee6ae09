// src/infrastructure/repositories/postgres_category.rs
use super::map_sqlx;
use crate::domain::category::entity::{Category, NewCategory};
use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn list(&self) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, (i32, String)>(
            "SELECT category_id, category_name FROM categories ORDER BY category_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows
            .into_iter()
            .map(|(category_id, category_name)| Category {
                category_id,
                category_name,
            })
            .collect())
    }

    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let (category_id, category_name) = sqlx::query_as::<_, (i32, String)>(
            "INSERT INTO categories (category_name) VALUES ($1)
             RETURNING category_id, category_name",
        )
        .bind(&category.category_name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(Category {
            category_id,
            category_name,
        })
    }

    async fn delete(&self, category_id: i32) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE category_id = $1")
            .bind(category_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}
