pub mod car;
pub mod rental;
pub mod user;

pub use car::Car;
pub use rental::Rental;
pub use user::{User, UserPatch};
