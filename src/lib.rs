pub mod app;
pub mod config;
pub mod database;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod state;
pub mod types;

pub use app::app;
pub use config::AppConfig;
pub use state::AppState;

#[cfg(test)]
pub mod testing;
