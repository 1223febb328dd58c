//! Infrastructure layer - external concerns

pub mod database;

pub use database::{init_database, provision_slots, DatabaseConfig, SeaOrmRepositoryProvider};
