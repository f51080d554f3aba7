pub mod availability;
pub mod filter_parameters;
pub mod search_service;

pub use availability::{filter_available, DateWindow, WindowError, DATE_FORMAT};
pub use search_service::{SearchError, SearchService};
