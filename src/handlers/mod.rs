// Route handlers, one module per resource
pub mod filtered;
pub mod system;
pub mod users;
