// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_PRODUCT_IDENTITY: &str = "products_identity_key";
const CNT_PRODUCT_CATEGORY: &str = "products_category_id_fkey";
const CNT_CATEGORY_NAME: &str = "categories_category_name_key";
const CNT_AUDIT_TYPE: &str = "audit_logs_audit_type_id_fkey";
const CNT_ACCOUNT_USERNAME: &str = "accounts_username_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_PRODUCT_IDENTITY => DomainError::Conflict(
                        "product with the same product_no, manufacturer and batch_no already exists"
                            .into(),
                    ),
                    CNT_CATEGORY_NAME => DomainError::Conflict("category already exists".into()),
                    CNT_ACCOUNT_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_PRODUCT_CATEGORY => DomainError::NotFound("category not found".into()),
                    CNT_AUDIT_TYPE => DomainError::NotFound("audit type not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
