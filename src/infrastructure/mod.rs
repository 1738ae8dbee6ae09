pub mod database;
pub mod identity;
pub mod repositories;
pub mod time;
