pub mod ids;
pub mod net;
