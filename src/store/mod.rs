pub mod errors;
pub mod local;
pub mod remote;
