pub mod config;
pub mod errors;
pub mod products;
pub mod reviews;
pub mod time;
