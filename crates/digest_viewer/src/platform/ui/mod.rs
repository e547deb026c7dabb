pub mod constants;
pub mod layout;
pub mod ports;
pub mod render;
