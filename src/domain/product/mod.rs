pub mod entity;
pub mod repository;

pub use entity::{NewProduct, Product, ProductFilter, ProductIdentity, ProductPage};
pub use repository::ProductRepository;
