pub mod data;
pub mod gateway;
pub mod models;
pub mod store;
pub mod utils;
