//! # Park-o-matic Reservation Engine
//!
//! Slot reservation and occupancy consistency engine for a parking facility.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, status machine and repository traits
//! - **application**: Reservation, status board and loyalty services
//! - **infrastructure**: SeaORM storage, migrations and slot provisioning
//! - **api**: REST API with Swagger documentation

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, provision_slots, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use api::create_api_router;
