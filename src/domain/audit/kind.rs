// src/domain/audit/kind.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Fixed enumeration of auditable actions. Codes match the seeded
/// `audit_types` rows and are never reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditKind {
    Register,
    Login,
    Logout,
    AddProduct,
    EditProduct,
    DeleteProduct,
}

impl AuditKind {
    pub const fn code(self) -> i32 {
        match self {
            Self::Register => 1,
            Self::Login => 2,
            Self::Logout => 3,
            Self::AddProduct => 4,
            Self::EditProduct => 5,
            Self::DeleteProduct => 6,
        }
    }

    pub fn from_code(code: i32) -> DomainResult<Self> {
        match code {
            1 => Ok(Self::Register),
            2 => Ok(Self::Login),
            3 => Ok(Self::Logout),
            4 => Ok(Self::AddProduct),
            5 => Ok(Self::EditProduct),
            6 => Ok(Self::DeleteProduct),
            other => Err(DomainError::Validation(format!(
                "unknown audit type code: {other}"
            ))),
        }
    }

    /// Product-lifecycle kinds carry bracket-tagged `Key:Value` content;
    /// account kinds carry free-form text.
    pub const fn is_product_event(self) -> bool {
        matches!(self, Self::AddProduct | Self::EditProduct | Self::DeleteProduct)
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Register => "Register",
            Self::Login => "Login",
            Self::Logout => "Logout",
            Self::AddProduct => "Add Product",
            Self::EditProduct => "Edit Product",
            Self::DeleteProduct => "Delete Product",
        }
    }

    pub const fn success_tag(self) -> &'static str {
        match self {
            Self::Register => "RegisterSuccess",
            Self::Login => "LoginSuccess",
            Self::Logout => "LogoutSuccess",
            Self::AddProduct => "AddProductSuccess",
            Self::EditProduct => "EditProductSuccess",
            Self::DeleteProduct => "DeleteProductSuccess",
        }
    }

    pub const fn failure_tag(self) -> &'static str {
        match self {
            Self::Register => "RegisterFailed",
            Self::Login => "LoginFailed",
            Self::Logout => "LogoutFailed",
            Self::AddProduct => "AddProductFailed",
            Self::EditProduct => "EditProductFailed",
            Self::DeleteProduct => "DeleteProductFailed",
        }
    }
}
