pub mod catalog;
pub mod fixture;
pub mod manager;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod query_builder;
pub mod repository;

pub use catalog::{CarCatalog, HealthCheck, RentalCatalog, UpdateOutcome, UserStore};
pub use manager::{DatabaseError, DatabaseManager};
pub use memory::MemoryStore;
pub use postgres::PgStore;
