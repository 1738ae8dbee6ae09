mod postgres;

pub use postgres::PostgresIdentityProvider;
