mod app;
pub mod cli;
mod effects;
mod input;
pub mod logging;
mod ui;

pub use app::run_app;
