pub mod car_query;
pub mod error;
pub mod filter;
pub mod filter_where;
pub mod types;

pub use car_query::{CarPredicate, CarQuery};
pub use error::FilterError;
pub use filter::Filter;
pub use types::*;
