mod add;
mod delete;
mod edit;
mod service;

pub use add::AddProductCommand;
pub use delete::DeleteProductCommand;
pub use edit::EditProductCommand;
pub use service::ProductCommandService;
