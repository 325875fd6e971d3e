pub mod errors;
pub mod ids;
pub mod order;
pub mod ports;
pub mod user;
