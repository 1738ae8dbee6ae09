pub mod audit;
pub mod auth;
pub mod categories;
pub mod products;
