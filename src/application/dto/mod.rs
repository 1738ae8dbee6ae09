pub mod accounts;
pub mod audit;
pub mod categories;
pub mod pagination;
pub mod products;

pub use accounts::AccountActionDto;
pub use audit::{AuditLogDto, AuditTypeDto, ProductQuantityPointDto};
pub use categories::CategoryDto;
pub use pagination::{PAGE_SIZE, Page};
pub use products::{ProductActionDto, ProductDto};
